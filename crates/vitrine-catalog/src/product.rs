//! Product record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category aggregation: `category1` mapped to its distinct `category2`
/// values, in first-seen catalog order.
pub type CategoryMap = BTreeMap<String, Vec<String>>;

/// A single product record, immutable as consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
	/// Canonical identity, used for detail lookup and self-exclusion in
	/// related-product queries.
	pub id: String,
	/// Display title; `search` matches against this field.
	pub title: String,
	/// Optional long description; head synthesis falls back to the title
	/// when absent.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Image URL.
	pub image: String,
	/// Top-level category.
	pub category1: String,
	/// Second-level category.
	pub category2: String,
	/// Price in integer currency units.
	pub price: u64,
}
