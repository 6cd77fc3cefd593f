//! Integration tests for route matching across server and client modes.

use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use vitrine_router::{ClientNavigator, RouteTable};

fn storefront_table() -> RouteTable<&'static str> {
	RouteTable::new()
		.route("/", "home")
		.route("/product/:id/", "detail")
		.route("*", "not-found")
}

#[test]
fn test_spec_examples() {
	let routes = storefront_table();

	let matched = routes.match_path("/product/abc/").unwrap();
	assert_eq!(matched.params.get("id"), Some(&"abc".to_string()));

	let without_sentinel = RouteTable::new()
		.route("/", "home")
		.route("/product/:id/", "detail");
	assert!(without_sentinel.match_path("/unknown").is_none());
}

#[test]
fn test_server_and_client_modes_agree() {
	let routes = Arc::new(storefront_table());
	let navigator = ClientNavigator::new(Arc::clone(&routes));

	for path in ["/", "/product/abc/", "/nowhere", "/product/a%2Fb/"] {
		let server = routes.navigate(path, &HashMap::new());
		navigator.push(path, &HashMap::new());
		let client = navigator.current();

		assert_eq!(
			server.target.as_ref().map(|m| m.handler),
			client.target.as_ref().map(|m| m.handler),
			"handler mismatch for {path}"
		);
		assert_eq!(
			server.target.as_ref().map(|m| &m.params),
			client.target.as_ref().map(|m| &m.params),
			"params mismatch for {path}"
		);
	}
}

proptest! {
	/// The same (routes, path) pair always yields the same match and the
	/// same extracted parameters.
	#[test]
	fn prop_matching_is_deterministic(segments in proptest::collection::vec("[a-z0-9%.-]{1,12}", 0..4)) {
		let routes = storefront_table();
		let path = format!("/{}/", segments.join("/")).replace("//", "/");

		let first = routes.match_path(&path);
		let second = routes.match_path(&path);

		prop_assert_eq!(
			first.as_ref().map(|m| (m.handler, m.params.clone())),
			second.as_ref().map(|m| (m.handler, m.params.clone()))
		);
	}

	/// With the catch-all registered, every path matches something.
	#[test]
	fn prop_catch_all_is_total(path in "/[a-z0-9/._~-]{0,40}") {
		let routes = storefront_table();
		prop_assert!(routes.match_path(&path).is_some());
	}

	/// Detail params always come from the current path, never a prior one.
	#[test]
	fn prop_params_derive_from_path(id in "[a-z0-9]{1,10}") {
		let routes = storefront_table();
		let path = format!("/product/{id}/");
		let matched = routes.match_path(&path).unwrap();
		prop_assert_eq!(matched.params.get("id"), Some(&id));
	}
}
