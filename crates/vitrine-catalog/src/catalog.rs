//! Catalog: the concrete in-memory product source.

use crate::product::{CategoryMap, Product};
use crate::query::CatalogQuery;
use thiserror::Error;

/// Embedded storefront catalog data.
const BUILTIN_JSON: &str = include_str!("data/products.json");

/// Error type for catalog operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
	/// Catalog data could not be parsed.
	#[error("catalog data malformed: {0}")]
	Data(String),
	/// The data source could not be queried.
	#[error("catalog unavailable: {0}")]
	Unavailable(String),
}

/// One page of a product listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductPage {
	/// The products on this page, filtered, sorted, and truncated.
	pub products: Vec<Product>,
	/// Number of products matching the filter before the page limit.
	pub total_count: usize,
}

/// The read-only query surface the render pipeline consumes.
///
/// The pipeline never touches a concrete catalog directly, so tests can
/// substitute sources that fail or return fixed data.
pub trait ProductSource: Send + Sync {
	/// Lists products matching `query`, sorted and truncated to its limit.
	fn list(&self, query: &CatalogQuery) -> Result<ProductPage, CatalogError>;

	/// Looks up a product by id. A missing id is `Ok(None)`, not an error.
	fn by_id(&self, id: &str) -> Result<Option<Product>, CatalogError>;

	/// Returns up to `limit` products sharing `product`'s second-level
	/// category, excluding the product itself.
	fn related(&self, product: &Product, limit: usize) -> Result<Vec<Product>, CatalogError>;

	/// Returns the category aggregation for the whole catalog.
	fn categories(&self) -> Result<CategoryMap, CatalogError>;
}

/// An immutable in-memory catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
	products: Vec<Product>,
	categories: CategoryMap,
}

impl Catalog {
	/// Creates a catalog from a product list, precomputing the category
	/// aggregation.
	pub fn new(products: Vec<Product>) -> Self {
		let mut categories = CategoryMap::new();
		for product in &products {
			let seconds = categories.entry(product.category1.clone()).or_default();
			if !seconds.contains(&product.category2) {
				seconds.push(product.category2.clone());
			}
		}
		tracing::debug!(
			products = products.len(),
			categories = categories.len(),
			"catalog loaded"
		);
		Self {
			products,
			categories,
		}
	}

	/// Parses a catalog from a JSON array of product records.
	pub fn from_json(json: &str) -> Result<Self, CatalogError> {
		let products: Vec<Product> =
			serde_json::from_str(json).map_err(|e| CatalogError::Data(e.to_string()))?;
		Ok(Self::new(products))
	}

	/// Loads the embedded storefront catalog.
	///
	/// # Panics
	///
	/// Panics if the embedded data is malformed; the data ships with the
	/// crate and is covered by tests.
	pub fn builtin() -> Self {
		Self::from_json(BUILTIN_JSON).unwrap_or_else(|e| panic!("{}", e))
	}

	/// Returns the number of products in the catalog.
	pub fn len(&self) -> usize {
		self.products.len()
	}

	/// Returns whether the catalog is empty.
	pub fn is_empty(&self) -> bool {
		self.products.is_empty()
	}

	/// Returns all products, in catalog order.
	pub fn products(&self) -> &[Product] {
		&self.products
	}
}

impl ProductSource for Catalog {
	fn list(&self, query: &CatalogQuery) -> Result<ProductPage, CatalogError> {
		let mut matching: Vec<Product> = self
			.products
			.iter()
			.filter(|p| query.accepts(p))
			.cloned()
			.collect();
		let total_count = matching.len();

		query.sort(&mut matching);
		matching.truncate(query.limit);

		Ok(ProductPage {
			products: matching,
			total_count,
		})
	}

	fn by_id(&self, id: &str) -> Result<Option<Product>, CatalogError> {
		Ok(self.products.iter().find(|p| p.id == id).cloned())
	}

	fn related(&self, product: &Product, limit: usize) -> Result<Vec<Product>, CatalogError> {
		Ok(self
			.products
			.iter()
			.filter(|p| p.category2 == product.category2 && p.id != product.id)
			.take(limit)
			.cloned()
			.collect())
	}

	fn categories(&self) -> Result<CategoryMap, CatalogError> {
		Ok(self.categories.clone())
	}
}
