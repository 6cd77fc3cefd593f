//! Vitrine SSR - The Render Pipeline
//!
//! Turns `(url, query)` into `(html, head, initial data)` with no
//! observable side effects beyond logging:
//!
//! 1. fresh [`Store`](vitrine_store::Store) instances per request, the
//!    isolation invariant;
//! 2. route matching through a shared, immutable
//!    [`RouteTable`](vitrine_router::RouteTable);
//! 3. async prefetch from a [`ProductSource`](vitrine_catalog::ProductSource)
//!    dispatched into the stores;
//! 4. pure page components over the final store state;
//! 5. head synthesis and hydration-payload serialization.
//!
//! [`render`] is total: any pipeline failure is logged and converted into a
//! degraded-but-valid output. The fallible pipeline is exposed separately
//! as [`try_render`].
//!
//! ## Example
//!
//! ```
//! use vitrine_catalog::Catalog;
//! use vitrine_ssr::{render, storefront_routes};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let routes = storefront_routes();
//! let catalog = Catalog::builtin();
//!
//! let output = render(&routes, "/product/p-1001/", &Default::default(), &catalog).await;
//! assert!(output.head.contains("<title>"));
//! # }
//! ```

mod head;
mod hydration;
mod pages;
mod pipeline;
mod state;
mod template;

pub use head::{error_head, generic_head, synthesize_head};
pub use hydration::{INITIAL_DATA_VAR, InitialData};
pub use pages::{
	PageKind, error_page, home_page, not_found_page, product_detail_page, render_page,
};
pub use pipeline::{RenderError, RenderOutput, render, storefront_routes, try_render};
pub use state::{
	CartAction, CartItem, CartState, CartStore, ProductAction, ProductState, ProductStore,
	cart_reducer, cart_store, product_reducer, product_store,
};
pub use template::{HEAD_MARKER, HTML_MARKER, Template, TemplateError};
