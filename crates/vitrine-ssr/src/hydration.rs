//! Hydration payload: the serialized initial state the client seeds its
//! stores from.

use crate::state::{CartState, ProductState};
use serde::{Deserialize, Serialize};

/// The global JavaScript variable the payload is assigned to.
pub const INITIAL_DATA_VAR: &str = "__INITIAL_DATA__";

/// Serialized snapshot of every store a render produced.
///
/// Safe to serialize in every pipeline state, including `current_product:
/// None` and empty carts; the degraded render path serializes the default
/// value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialData {
	/// Product store snapshot.
	pub product_state: ProductState,
	/// Cart store snapshot.
	pub cart_state: CartState,
}

impl InitialData {
	/// Serializes the payload to JSON.
	pub fn to_json(&self) -> Result<String, serde_json::Error> {
		serde_json::to_string(self)
	}

	/// Restores a payload from JSON, as the client does at hydration time.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}

	/// Renders the inline `<script>` block assigning the payload to
	/// `window.__INITIAL_DATA__`.
	///
	/// Every `<` in the JSON is escaped as the `\u003c` sequence so
	/// embedded markup can never close the surrounding script tag early.
	pub fn to_script_tag(&self) -> Result<String, serde_json::Error> {
		let json = self.to_json()?;
		Ok(format!(
			"<script>window.{} = {};</script>",
			INITIAL_DATA_VAR,
			escape_for_inline_script(&json)
		))
	}
}

/// Escapes JSON for embedding inside a `<script>` element.
fn escape_for_inline_script(json: &str) -> String {
	json.replace('<', "\\u003c")
}

#[cfg(test)]
mod tests {
	use super::*;
	use vitrine_catalog::Product;

	fn payload_with_product(title: &str) -> InitialData {
		InitialData {
			product_state: ProductState {
				current_product: Some(Product {
					id: "p-1".to_string(),
					title: title.to_string(),
					description: None,
					image: "/images/p-1.jpg".to_string(),
					category1: "digital".to_string(),
					category2: "audio".to_string(),
					price: 100,
				}),
				..ProductState::default()
			},
			cart_state: CartState::default(),
		}
	}

	#[test]
	fn test_default_payload_serializes() {
		let json = InitialData::default().to_json().unwrap();
		assert!(json.contains("\"productState\""));
		assert!(json.contains("\"cartState\""));
		assert!(json.contains("\"currentProduct\":null"));
	}

	#[test]
	fn test_payload_roundtrip() {
		let payload = payload_with_product("Speaker");
		let restored = InitialData::from_json(&payload.to_json().unwrap()).unwrap();
		assert_eq!(restored, payload);
	}

	#[test]
	fn test_cart_state_roundtrips() {
		let payload = InitialData {
			product_state: ProductState::default(),
			cart_state: CartState {
				items: vec![crate::state::CartItem {
					product_id: "p-1".to_string(),
					title: "Speaker".to_string(),
					price: 59000,
					quantity: 2,
				}],
			},
		};

		let restored = InitialData::from_json(&payload.to_json().unwrap()).unwrap();
		assert_eq!(restored.cart_state.item_count(), 2);
		assert_eq!(restored, payload);
	}

	#[test]
	fn test_script_tag_escapes_angle_brackets() {
		let payload = payload_with_product("</script><script>alert(1)</script>");
		let script = payload.to_script_tag().unwrap();

		// The only raw "</script>" is the one closing the block itself.
		assert_eq!(script.matches("</script>").count(), 1);
		assert!(script.ends_with("</script>"));
		assert!(script.contains("\\u003c"));
		assert!(script.contains("window.__INITIAL_DATA__ ="));
	}

	#[test]
	fn test_escape_for_inline_script() {
		assert_eq!(
			escape_for_inline_script(r#"{"t":"</script>"}"#),
			r#"{"t":"\u003c/script>"}"#
		);
		assert_eq!(escape_for_inline_script(r#"{"n":1}"#), r#"{"n":1}"#);
	}
}
