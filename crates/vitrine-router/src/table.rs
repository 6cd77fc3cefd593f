//! Route table and per-request match state.

use crate::error::RouterError;
use crate::pattern::PathPattern;
use std::collections::HashMap;

/// A single route: a compiled pattern paired with a handler.
///
/// The handler type is generic; the render pipeline registers page
/// identifiers, tests register plain strings.
#[derive(Debug, Clone)]
pub struct Route<H> {
	pattern: PathPattern,
	handler: H,
}

impl<H> Route<H> {
	/// Returns the route's pattern.
	pub fn pattern(&self) -> &PathPattern {
		&self.pattern
	}

	/// Returns the route's handler.
	pub fn handler(&self) -> &H {
		&self.handler
	}
}

/// A matched route with extracted parameters.
///
/// Derived solely from the route table and the matched path; recomputed on
/// every navigation and never carried over from a previous match.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch<H> {
	/// The matched route's handler.
	pub handler: H,
	/// Extracted path parameters, percent-decoded.
	pub params: HashMap<String, String>,
	/// The normalized path that matched.
	pub path: String,
}

/// Per-request navigation state: the current match plus the raw query
/// mapping supplied by the caller.
///
/// This is a plain value returned by [`RouteTable::navigate`]; the table
/// itself holds no mutable match state and may be shared across concurrent
/// requests.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveRoute<H> {
	/// The matched handler and parameters, or `None` when nothing matched.
	pub target: Option<RouteMatch<H>>,
	/// Query key/value pairs, independent of path matching. The table
	/// stores what it is given and never parses query strings itself.
	pub query: HashMap<String, String>,
	/// The normalized current path.
	pub path: String,
}

impl<H> ActiveRoute<H> {
	/// Returns the matched parameters, or an empty map when unmatched.
	pub fn params(&self) -> HashMap<String, String> {
		self.target
			.as_ref()
			.map(|m| m.params.clone())
			.unwrap_or_default()
	}

	/// Returns whether a route matched.
	pub fn is_match(&self) -> bool {
		self.target.is_some()
	}
}

/// An ordered, immutable-once-built route table.
///
/// Routes are tried in registration order; the first structural match wins.
/// A catch-all sentinel (`*`) is conventionally registered last.
#[derive(Debug, Clone, Default)]
pub struct RouteTable<H> {
	routes: Vec<Route<H>>,
}

impl<H: Clone> RouteTable<H> {
	/// Creates an empty route table.
	pub fn new() -> Self {
		Self { routes: Vec::new() }
	}

	/// Appends a route, validating the pattern.
	///
	/// # Errors
	///
	/// Returns [`RouterError`] when the pattern is malformed; detection
	/// happens here, at registration time, not at first match.
	pub fn add_route(&mut self, pattern: &str, handler: H) -> Result<(), RouterError> {
		let pattern = PathPattern::new(pattern)?;
		self.routes.push(Route { pattern, handler });
		Ok(())
	}

	/// Builder-style route registration.
	///
	/// # Panics
	///
	/// Panics if the pattern is invalid. Use [`RouteTable::add_route`] for
	/// fallible construction.
	pub fn route(mut self, pattern: &str, handler: H) -> Self {
		self.add_route(pattern, handler)
			.unwrap_or_else(|e| panic!("{}", e));
		self
	}

	/// Matches a path against the registered routes.
	///
	/// Pure function of `(routes, path)`: the same inputs always yield the
	/// same match and the same extracted parameters.
	pub fn match_path(&self, path: &str) -> Option<RouteMatch<H>> {
		for route in &self.routes {
			if let Some(params) = route.pattern.matches(path) {
				return Some(RouteMatch {
					handler: route.handler.clone(),
					params,
					path: path.to_string(),
				});
			}
		}
		None
	}

	/// Runs the matching algorithm for one navigation and returns the
	/// per-request state.
	///
	/// The url is normalized (query-string suffix dropped, leading `/`
	/// guaranteed) before matching; the query mapping is stored as given.
	pub fn navigate(&self, url: &str, query: &HashMap<String, String>) -> ActiveRoute<H> {
		let path = normalize_path(url);
		let target = self.match_path(&path);
		tracing::debug!(path = %path, matched = target.is_some(), "route navigate");

		ActiveRoute {
			target,
			query: query.clone(),
			path,
		}
	}

	/// Returns the number of registered routes.
	pub fn route_count(&self) -> usize {
		self.routes.len()
	}

	/// Returns whether a catch-all sentinel is registered.
	pub fn has_catch_all(&self) -> bool {
		self.routes.iter().any(|r| r.pattern.is_catch_all())
	}

	/// Returns the registered routes in order.
	pub fn routes(&self) -> &[Route<H>] {
		&self.routes
	}
}

/// Normalizes a raw url into a matchable path.
///
/// Drops any `?query` or `#fragment` suffix and guarantees a leading `/`
/// (an empty url becomes `/`). Base-prefix stripping is the caller's job.
pub(crate) fn normalize_path(url: &str) -> String {
	let without_fragment = url.split_once('#').map_or(url, |(path, _)| path);
	let path = without_fragment
		.split_once('?')
		.map_or(without_fragment, |(path, _)| path);

	if path.is_empty() {
		"/".to_string()
	} else if path.starts_with('/') {
		path.to_string()
	} else {
		format!("/{}", path)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn table() -> RouteTable<&'static str> {
		RouteTable::new()
			.route("/", "home")
			.route("/product/:id/", "detail")
			.route("*", "not-found")
	}

	#[test]
	fn test_first_match_wins() {
		let routes = RouteTable::new()
			.route("/product/:id/", "first")
			.route("/product/:slug/", "second");

		let matched = routes.match_path("/product/42/").unwrap();
		assert_eq!(matched.handler, "first");
	}

	#[test]
	fn test_match_extracts_params() {
		let matched = table().match_path("/product/abc/").unwrap();
		assert_eq!(matched.handler, "detail");
		assert_eq!(matched.params.get("id"), Some(&"abc".to_string()));
	}

	#[test]
	fn test_catch_all_matches_last() {
		let matched = table().match_path("/nowhere/").unwrap();
		assert_eq!(matched.handler, "not-found");
		assert!(matched.params.is_empty());
	}

	#[test]
	fn test_no_match_without_catch_all() {
		let routes = RouteTable::new()
			.route("/", "home")
			.route("/product/:id/", "detail");

		assert!(routes.match_path("/unknown").is_none());
		let active = routes.navigate("/unknown", &HashMap::new());
		assert!(!active.is_match());
		assert!(active.params().is_empty());
	}

	#[test]
	fn test_add_route_rejects_malformed_pattern() {
		let mut routes: RouteTable<&str> = RouteTable::new();
		let result = routes.add_route("/a/:/", "broken");
		assert!(matches!(result, Err(RouterError::InvalidPattern { .. })));
		assert_eq!(routes.route_count(), 0);
	}

	#[test]
	fn test_navigate_stores_query_as_given() {
		let mut query = HashMap::new();
		query.insert("sort".to_string(), "price_desc".to_string());

		let active = table().navigate("/", &query);
		assert_eq!(active.query.get("sort"), Some(&"price_desc".to_string()));
		assert_eq!(active.path, "/");
	}

	#[test]
	fn test_navigate_drops_query_suffix() {
		let active = table().navigate("/product/xyz/?search=mouse", &HashMap::new());
		assert_eq!(active.path, "/product/xyz/");
		assert_eq!(
			active.target.unwrap().params.get("id"),
			Some(&"xyz".to_string())
		);
	}

	#[test]
	fn test_navigate_normalizes_bare_urls() {
		let active = table().navigate("", &HashMap::new());
		assert_eq!(active.path, "/");
		assert_eq!(active.target.unwrap().handler, "home");

		let active = table().navigate("product/a/", &HashMap::new());
		assert_eq!(active.path, "/product/a/");
	}

	#[test]
	fn test_match_state_not_carried_over() {
		let routes = table();
		let first = routes.navigate("/product/one/", &HashMap::new());
		let second = routes.navigate("/", &HashMap::new());
		assert_eq!(
			first.target.unwrap().params.get("id"),
			Some(&"one".to_string())
		);
		assert!(second.target.unwrap().params.is_empty());
	}

	#[test]
	fn test_has_catch_all() {
		assert!(table().has_catch_all());
		let routes: RouteTable<&str> = RouteTable::new().route("/", "home");
		assert!(!routes.has_catch_all());
	}
}
