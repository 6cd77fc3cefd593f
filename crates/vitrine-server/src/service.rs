//! The per-request HTTP service: url in, spliced HTML page out.

use crate::config::ServerConfig;
use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};
use percent_encoding::percent_decode_str;
use std::collections::HashMap;
use std::sync::Arc;
use vitrine_catalog::Catalog;
use vitrine_router::RouteTable;
use vitrine_ssr::{PageKind, Template, render, storefront_routes};

/// The embedded page template with the head and body markers.
const INDEX_TEMPLATE: &str = include_str!("../assets/index.html");

/// Shared application state: everything immutable across requests.
///
/// Per-request state (stores, route match) is created inside
/// [`vitrine_ssr::render`]; nothing here is mutated after startup.
pub struct App {
	routes: RouteTable<PageKind>,
	catalog: Catalog,
	template: Template,
	config: ServerConfig,
}

impl App {
	/// Builds the application: routes registered once, catalog loaded,
	/// template validated.
	pub fn new(config: ServerConfig) -> anyhow::Result<Arc<Self>> {
		let template = Template::new(INDEX_TEMPLATE)?;
		Ok(Arc::new(Self {
			routes: storefront_routes(),
			catalog: Catalog::builtin(),
			template,
			config,
		}))
	}

	/// Handles one request end to end.
	pub async fn handle<B>(&self, req: hyper::Request<B>) -> Response<Full<Bytes>> {
		let uri = req.uri();
		let path = strip_base(uri.path(), &self.config.base);
		let query = parse_query(uri.query());

		tracing::debug!(path = %path, "incoming request");

		let output = render(&self.routes, &path, &query, &self.catalog).await;

		match self.template.splice(&output) {
			Ok(page) => html_response(StatusCode::OK, page),
			Err(error) => {
				tracing::error!(%error, "template splice failed");
				html_response(
					StatusCode::INTERNAL_SERVER_ERROR,
					"<h1>Internal Server Error</h1>".to_string(),
				)
			}
		}
	}
}

fn html_response(status: StatusCode, body: String) -> Response<Full<Bytes>> {
	let mut response = Response::new(Full::new(Bytes::from(body)));
	*response.status_mut() = status;
	response.headers_mut().insert(
		hyper::header::CONTENT_TYPE,
		hyper::header::HeaderValue::from_static("text/html; charset=utf-8"),
	);
	response
}

/// Strips the configured base prefix from an incoming path.
///
/// A path outside the base is passed through untouched; an empty result
/// becomes `/`.
pub(crate) fn strip_base(path: &str, base: &str) -> String {
	let stripped = if base != "/" && path.starts_with(base) {
		&path[base.len() - 1..]
	} else {
		path
	};

	if stripped.is_empty() {
		"/".to_string()
	} else {
		stripped.to_string()
	}
}

/// Parses a raw query string into decoded key/value pairs.
///
/// Splits on the first `=` only, so values may contain `=`; keys and
/// values are percent-decoded.
pub(crate) fn parse_query(raw: Option<&str>) -> HashMap<String, String> {
	raw.map(|q| {
		q.split('&')
			.filter(|pair| !pair.is_empty())
			.map(|pair| {
				let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
				(
					percent_decode_str(key).decode_utf8_lossy().to_string(),
					percent_decode_str(value).decode_utf8_lossy().to_string(),
				)
			})
			.collect()
	})
	.unwrap_or_default()
}
