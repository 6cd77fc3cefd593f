//! Query parsing and deterministic filtering.

use crate::product::Product;
use std::collections::HashMap;

/// Default page size when `limit` is absent or invalid.
const DEFAULT_LIMIT: usize = 20;

/// Sort order for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
	/// Price ascending, the default for absent or unrecognized values.
	#[default]
	PriceAsc,
	/// Price descending.
	PriceDesc,
	/// Title ascending.
	NameAsc,
	/// Title descending.
	NameDesc,
}

impl SortKey {
	/// Parses a raw query value; anything unrecognized is the default.
	pub fn parse(raw: Option<&str>) -> Self {
		match raw {
			Some("price_asc") => Self::PriceAsc,
			Some("price_desc") => Self::PriceDesc,
			Some("name_asc") => Self::NameAsc,
			Some("name_desc") => Self::NameDesc,
			_ => Self::default(),
		}
	}
}

/// A parsed, total product query.
///
/// Every field has a defined value for every possible raw query mapping;
/// the defaults are an unfiltered, price-ascending, 20-item page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
	/// Case-insensitive substring match against the title.
	pub search: Option<String>,
	/// Exact match on `category1`.
	pub category1: Option<String>,
	/// Exact match on `category2`.
	pub category2: Option<String>,
	/// Sort order.
	pub sort: SortKey,
	/// Page size.
	pub limit: usize,
}

impl Default for CatalogQuery {
	fn default() -> Self {
		Self {
			search: None,
			category1: None,
			category2: None,
			sort: SortKey::default(),
			limit: DEFAULT_LIMIT,
		}
	}
}

impl CatalogQuery {
	/// Builds a query from raw query-string key/value pairs.
	///
	/// Absent keys take their defaults; a non-numeric or zero `limit`
	/// falls back to 20.
	pub fn from_query(query: &HashMap<String, String>) -> Self {
		let non_empty = |key: &str| query.get(key).filter(|v| !v.is_empty()).cloned();

		let limit = query
			.get("limit")
			.and_then(|raw| raw.parse::<usize>().ok())
			.filter(|n| *n > 0)
			.unwrap_or(DEFAULT_LIMIT);

		Self {
			search: non_empty("search"),
			category1: non_empty("category1"),
			category2: non_empty("category2"),
			sort: SortKey::parse(query.get("sort").map(String::as_str)),
			limit,
		}
	}

	/// Returns whether a product passes the filter part of this query.
	pub fn accepts(&self, product: &Product) -> bool {
		if let Some(search) = &self.search {
			if !product
				.title
				.to_lowercase()
				.contains(&search.to_lowercase())
			{
				return false;
			}
		}
		if let Some(category1) = &self.category1 {
			if product.category1 != *category1 {
				return false;
			}
		}
		if let Some(category2) = &self.category2 {
			if product.category2 != *category2 {
				return false;
			}
		}
		true
	}

	/// Sorts products in place, stably: ties keep their existing order.
	pub fn sort(&self, products: &mut [Product]) {
		match self.sort {
			SortKey::PriceAsc => products.sort_by_key(|p| p.price),
			SortKey::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
			SortKey::NameAsc => products.sort_by(|a, b| a.title.cmp(&b.title)),
			SortKey::NameDesc => products.sort_by(|a, b| b.title.cmp(&a.title)),
		}
	}
}
