//! The render pipeline: `(url, query)` in, `(html, head, initial data)` out.

use crate::head::{error_head, synthesize_head};
use crate::hydration::InitialData;
use crate::pages::{PageKind, error_page, render_page};
use crate::state::{ProductAction, ProductStore, cart_store, product_store};
use std::collections::HashMap;
use thiserror::Error;
use vitrine_catalog::{CatalogError, CatalogQuery, ProductSource};
use vitrine_router::{ActiveRoute, RouteTable};

/// Cap on the related-product list for a detail page.
const RELATED_LIMIT: usize = 20;

/// Everything a render produces.
///
/// The caller splices `html` and `head` into its template and embeds
/// `initial_data` as the hydration payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
	/// Rendered body fragment.
	pub html: String,
	/// Synthesized head fragment.
	pub head: String,
	/// Serializable store snapshots for client hydration.
	pub initial_data: InitialData,
}

/// Error type for pipeline failures.
///
/// No-route-match and missing-entity are *not* errors; they are
/// representable states handled inside the pipeline. This type covers the
/// unexpected failures the total [`render`] wrapper degrades on.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
	/// The data source failed during prefetch.
	#[error("prefetch failed: {0}")]
	Prefetch(#[from] CatalogError),
}

/// Builds the storefront route table: home, product detail, and the
/// catch-all not-found sentinel last.
///
/// Built once at process start and shared; per-request match state is the
/// value returned by [`RouteTable::navigate`].
pub fn storefront_routes() -> RouteTable<PageKind> {
	RouteTable::new()
		.route("/", PageKind::Home)
		.route("/product/:id/", PageKind::ProductDetail)
		.route("*", PageKind::NotFound)
}

/// Runs the pipeline, surfacing failures as `Err`.
///
/// Steps: fresh stores, route match, prefetch (awaited), page component,
/// head synthesis, payload assembly. Each call creates its own stores, so
/// concurrent calls never observe each other's state.
///
/// # Errors
///
/// Returns [`RenderError`] when the data source fails; see [`render`] for
/// the total variant.
pub async fn try_render(
	routes: &RouteTable<PageKind>,
	url: &str,
	query: &HashMap<String, String>,
	source: &dyn ProductSource,
) -> Result<RenderOutput, RenderError> {
	let products = product_store();
	let cart = cart_store();

	let active = routes.navigate(url, query);
	prefetch(&products, &active, source).await?;

	let kind = active
		.target
		.as_ref()
		.map(|matched| matched.handler)
		.unwrap_or(PageKind::NotFound);

	let product_state = products.state();
	let html = render_page(kind, &product_state);
	let head = synthesize_head(&product_state);

	Ok(RenderOutput {
		html,
		head,
		initial_data: InitialData {
			product_state,
			cart_state: cart.state(),
		},
	})
}

/// The total render entry point: always returns a well-formed output,
/// never panics on pipeline failures.
///
/// Failures are logged and converted into the degraded triple: a generic
/// error fragment, an error head, and both stores' pristine initial state.
pub async fn render(
	routes: &RouteTable<PageKind>,
	url: &str,
	query: &HashMap<String, String>,
	source: &dyn ProductSource,
) -> RenderOutput {
	match try_render(routes, url, query, source).await {
		Ok(output) => {
			tracing::info!(url = %url, degraded = false, "render complete");
			output
		}
		Err(error) => {
			tracing::error!(url = %url, %error, "render failed, serving degraded page");
			RenderOutput {
				html: error_page(),
				head: error_head(),
				initial_data: InitialData::default(),
			}
		}
	}
}

/// Prefetches domain data for the matched route into the product store.
///
/// Async so the pipeline tolerates a data source backed by real I/O; the
/// in-memory catalog resolves immediately.
async fn prefetch(
	store: &ProductStore,
	active: &ActiveRoute<PageKind>,
	source: &dyn ProductSource,
) -> Result<(), RenderError> {
	let categories = source.categories()?;
	store.dispatch(&ProductAction::SetCategories(categories));

	match active.target.as_ref().map(|matched| matched.handler) {
		Some(PageKind::ProductDetail) => {
			let params = active.params();
			let Some(id) = params.get("id") else {
				return Ok(());
			};

			match source.by_id(id)? {
				Some(product) => {
					let related = source.related(&product, RELATED_LIMIT)?;
					store.dispatch(&ProductAction::SetCurrentProduct(product));
					store.dispatch(&ProductAction::SetRelatedProducts(related));
				}
				None => {
					// Missing entity is a representable state, not an error:
					// the detail page renders its not-found view.
					tracing::debug!(id = %id, "product not found during prefetch");
				}
			}
		}
		Some(PageKind::Home) => {
			let query = CatalogQuery::from_query(&active.query);
			let page = source.list(&query)?;
			store.dispatch(&ProductAction::SetProducts {
				products: page.products,
				total_count: page.total_count,
			});
		}
		Some(PageKind::NotFound) | None => {
			// Nothing to prefetch beyond categories.
		}
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use vitrine_catalog::Catalog;

	fn empty_query() -> HashMap<String, String> {
		HashMap::new()
	}

	#[tokio::test]
	async fn test_home_render_prefetches_listing() {
		let routes = storefront_routes();
		let catalog = Catalog::builtin();

		let output = try_render(&routes, "/", &empty_query(), &catalog)
			.await
			.unwrap();

		assert!(!output.initial_data.product_state.products.is_empty());
		assert!(output.html.contains("product-grid"));
		assert!(output.head.contains("<title>Vitrine</title>"));
	}

	#[tokio::test]
	async fn test_detail_render_sets_subject() {
		let routes = storefront_routes();
		let catalog = Catalog::builtin();

		let output = try_render(&routes, "/product/p-1001/", &empty_query(), &catalog)
			.await
			.unwrap();

		let subject = output.initial_data.product_state.current_product.unwrap();
		assert_eq!(subject.id, "p-1001");
		assert!(output.head.contains("Wireless Mouse | Vitrine"));
	}

	#[tokio::test]
	async fn test_unmatched_path_renders_not_found() {
		let routes = storefront_routes();
		let catalog = Catalog::builtin();

		let output = try_render(&routes, "/nowhere/", &empty_query(), &catalog)
			.await
			.unwrap();

		assert!(output.html.contains("404"));
		assert!(output.head.contains("<title>Vitrine</title>"));
	}

	#[tokio::test]
	async fn test_listing_respects_query() {
		let routes = storefront_routes();
		let catalog = Catalog::builtin();
		let query: HashMap<String, String> = [
			("category1", "digital"),
			("sort", "price_desc"),
			("limit", "5"),
		]
		.into_iter()
		.map(|(k, v)| (k.to_string(), v.to_string()))
		.collect();

		let output = try_render(&routes, "/", &query, &catalog).await.unwrap();
		let products = &output.initial_data.product_state.products;

		assert!(products.len() <= 5);
		assert!(products.iter().all(|p| p.category1 == "digital"));
		for pair in products.windows(2) {
			assert!(pair[0].price >= pair[1].price);
		}
	}
}
