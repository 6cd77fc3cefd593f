//! Store state, actions, and reducers for the storefront.

use serde::{Deserialize, Serialize};
use vitrine_catalog::{CategoryMap, Product};
use vitrine_store::Store;

/// Product store state, one instance per server render.
///
/// Serialized into the hydration payload with camelCase keys so the client
/// runtime reads the same shape it would produce itself.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductState {
	/// The current listing page.
	pub products: Vec<Product>,
	/// Number of products matching the listing filter before paging.
	pub total_count: usize,
	/// The product a detail page is about, when one was found.
	pub current_product: Option<Product>,
	/// Products related to `current_product` (same second-level category).
	pub related_products: Vec<Product>,
	/// Category aggregation for navigation.
	pub categories: CategoryMap,
}

/// Actions understood by the product reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
	/// Replace the listing page.
	SetProducts {
		/// The page contents.
		products: Vec<Product>,
		/// Matching count before paging.
		total_count: usize,
	},
	/// Replace the category aggregation.
	SetCategories(CategoryMap),
	/// Set the detail subject.
	SetCurrentProduct(Product),
	/// Replace the related-product list.
	SetRelatedProducts(Vec<Product>),
	/// Clear the detail subject.
	ClearCurrentProduct,
}

/// Pure, total reducer for [`ProductState`].
pub fn product_reducer(state: &ProductState, action: &ProductAction) -> ProductState {
	let mut next = state.clone();
	match action {
		ProductAction::SetProducts {
			products,
			total_count,
		} => {
			next.products = products.clone();
			next.total_count = *total_count;
		}
		ProductAction::SetCategories(categories) => next.categories = categories.clone(),
		ProductAction::SetCurrentProduct(product) => next.current_product = Some(product.clone()),
		ProductAction::SetRelatedProducts(products) => next.related_products = products.clone(),
		ProductAction::ClearCurrentProduct => next.current_product = None,
	}
	next
}

/// One cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
	/// The product this line refers to.
	pub product_id: String,
	/// Title at the time of adding.
	pub title: String,
	/// Unit price.
	pub price: u64,
	/// Line quantity, always at least 1.
	pub quantity: u32,
}

/// Cart store state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
	/// Cart lines in insertion order.
	pub items: Vec<CartItem>,
}

impl CartState {
	/// Total quantity across all lines.
	pub fn item_count(&self) -> u32 {
		self.items.iter().map(|item| item.quantity).sum()
	}

	/// Total price across all lines.
	pub fn total_price(&self) -> u64 {
		self.items
			.iter()
			.map(|item| item.price * u64::from(item.quantity))
			.sum()
	}
}

/// Actions understood by the cart reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
	/// Add one unit of a product, merging into an existing line.
	AddItem(Product),
	/// Remove a line entirely.
	RemoveItem {
		/// Identity of the product to remove.
		product_id: String,
	},
	/// Empty the cart.
	Clear,
}

/// Pure, total reducer for [`CartState`].
pub fn cart_reducer(state: &CartState, action: &CartAction) -> CartState {
	let mut next = state.clone();
	match action {
		CartAction::AddItem(product) => {
			if let Some(line) = next.items.iter_mut().find(|i| i.product_id == product.id) {
				line.quantity += 1;
			} else {
				next.items.push(CartItem {
					product_id: product.id.clone(),
					title: product.title.clone(),
					price: product.price,
					quantity: 1,
				});
			}
		}
		CartAction::RemoveItem { product_id } => {
			next.items.retain(|i| i.product_id != *product_id);
		}
		CartAction::Clear => next.items.clear(),
	}
	next
}

/// Store alias for the product domain.
pub type ProductStore = Store<ProductState, ProductAction>;

/// Store alias for the cart domain.
pub type CartStore = Store<CartState, CartAction>;

/// Creates a fresh product store with pristine initial state.
pub fn product_store() -> ProductStore {
	Store::new(product_reducer, ProductState::default())
}

/// Creates a fresh cart store with pristine initial state.
pub fn cart_store() -> CartStore {
	Store::new(cart_reducer, CartState::default())
}
