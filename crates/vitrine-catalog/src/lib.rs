//! Vitrine Catalog - Read-Only Product Data Source
//!
//! The catalog is the storefront's only data source: an immutable,
//! in-memory sequence of product records behind the [`ProductSource`]
//! trait. The render pipeline consumes the trait, never the concrete
//! [`Catalog`], so tests can substitute failing or fixed-data sources.
//!
//! Query handling ([`CatalogQuery`]) is deterministic and total: every
//! combination of absent/present keys produces a defined result, defaulting
//! to an unfiltered, price-ascending, 20-item page.

mod catalog;
mod product;
mod query;

pub use catalog::{Catalog, CatalogError, ProductPage, ProductSource};
pub use product::{CategoryMap, Product};
pub use query::{CatalogQuery, SortKey};
