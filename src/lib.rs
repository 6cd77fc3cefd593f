//! # Vitrine
//!
//! A server-rendered storefront core built from three primitives that behave
//! identically on server and client:
//!
//! - [`store`]: a minimal unidirectional state store (reducer + subscriptions)
//! - [`router`]: a pattern-based path router with parameter extraction
//! - [`ssr`]: the render pipeline composing store state and route matches
//!   into HTML, head markup, and a serializable hydration payload
//!
//! The [`catalog`] module supplies the read-only product data source the
//! render pipeline prefetches from.
//!
//! ## Example
//!
//! ```ignore
//! use vitrine::ssr::{render, storefront_routes};
//! use vitrine::catalog::Catalog;
//!
//! # async fn example() {
//! let catalog = Catalog::builtin();
//! let routes = storefront_routes();
//! let output = render(&routes, "/product/p-1001/", &Default::default(), &catalog).await;
//! assert!(output.html.contains("<"));
//! # }
//! ```

/// State store: reducer-driven container with subscription notification.
pub mod store {
	pub use vitrine_store::*;
}

/// Isomorphic router: pattern compilation, matching, parameter extraction.
pub mod router {
	pub use vitrine_router::*;
}

/// Product catalog: read-only data source with query filtering.
pub mod catalog {
	pub use vitrine_catalog::*;
}

/// Render pipeline: SSR orchestration, pages, hydration payload.
pub mod ssr {
	pub use vitrine_ssr::*;
}

// Most-used types at the crate root
pub use vitrine_catalog::{Catalog, Product, ProductSource};
pub use vitrine_router::{ActiveRoute, RouteMatch, RouteTable};
pub use vitrine_ssr::{RenderOutput, render, storefront_routes, try_render};
pub use vitrine_store::{Store, Subscription};
