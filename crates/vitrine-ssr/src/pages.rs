//! Page components: pure functions from store state to HTML fragments.

use crate::state::ProductState;
use vitrine_catalog::Product;

/// Identifies which page component handles a route.
///
/// Registered as the route table's handler type; the pipeline maps a
/// matched `PageKind` to the component function below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
	/// Product listing.
	Home,
	/// Single product detail.
	ProductDetail,
	/// Fallback for unmatched paths.
	NotFound,
}

/// Invokes the page component for `kind` against the given state.
pub fn render_page(kind: PageKind, state: &ProductState) -> String {
	match kind {
		PageKind::Home => home_page(state),
		PageKind::ProductDetail => product_detail_page(state),
		PageKind::NotFound => not_found_page(),
	}
}

/// The product listing page.
pub fn home_page(state: &ProductState) -> String {
	let mut html = String::with_capacity(1024);
	html.push_str("<div class=\"home\">\n");
	html.push_str(&category_nav(state));

	html.push_str(&format!(
		"<p class=\"result-count\">{} products</p>\n",
		state.total_count
	));

	html.push_str("<ul class=\"product-grid\">\n");
	for product in &state.products {
		html.push_str(&product_card(product));
	}
	html.push_str("</ul>\n</div>");
	html
}

/// The product detail page.
///
/// A missing `current_product` is a normal, representable state: the
/// component renders a graceful not-found view instead of failing.
pub fn product_detail_page(state: &ProductState) -> String {
	let Some(product) = &state.current_product else {
		return "<div class=\"product-detail product-detail--missing\">\
			<h1>Product not found</h1>\
			<p>The product you are looking for is no longer available.</p>\
			</div>"
			.to_string();
	};

	let mut html = String::with_capacity(1024);
	html.push_str("<div class=\"product-detail\">\n");
	html.push_str(&format!(
		"<img src=\"{}\" alt=\"{}\" />\n",
		html_escape(&product.image),
		html_escape(&product.title)
	));
	html.push_str(&format!("<h1>{}</h1>\n", html_escape(&product.title)));
	html.push_str(&format!(
		"<p class=\"category\">{} &gt; {}</p>\n",
		html_escape(&product.category1),
		html_escape(&product.category2)
	));
	if let Some(description) = &product.description {
		html.push_str(&format!(
			"<p class=\"description\">{}</p>\n",
			html_escape(description)
		));
	}
	html.push_str(&format!(
		"<p class=\"price\">{}</p>\n",
		format_price(product.price)
	));
	html.push_str("<button class=\"add-to-cart\" data-product-id=\"");
	html.push_str(&html_escape(&product.id));
	html.push_str("\">Add to cart</button>\n");

	if !state.related_products.is_empty() {
		html.push_str("<h2>Related products</h2>\n<ul class=\"related-products\">\n");
		for related in &state.related_products {
			html.push_str(&product_card(related));
		}
		html.push_str("</ul>\n");
	}

	html.push_str("</div>");
	html
}

/// The fallback page for unmatched paths.
pub fn not_found_page() -> String {
	"<div class=\"not-found\"><h1>404</h1><p>Page not found.</p></div>".to_string()
}

/// The degraded page returned when the pipeline fails.
pub fn error_page() -> String {
	"<div class=\"error\">Error loading page</div>".to_string()
}

fn category_nav(state: &ProductState) -> String {
	if state.categories.is_empty() {
		return String::new();
	}

	let mut html = String::from("<nav class=\"categories\">\n<ul>\n");
	for (category1, seconds) in &state.categories {
		html.push_str(&format!("<li>{}<ul>\n", html_escape(category1)));
		for category2 in seconds {
			html.push_str(&format!(
				"<li><a href=\"/?category1={}&amp;category2={}\">{}</a></li>\n",
				html_escape(category1),
				html_escape(category2),
				html_escape(category2)
			));
		}
		html.push_str("</ul></li>\n");
	}
	html.push_str("</ul>\n</nav>\n");
	html
}

fn product_card(product: &Product) -> String {
	format!(
		"<li class=\"product-card\"><a href=\"/product/{id}/\">\
		<img src=\"{image}\" alt=\"{title}\" />\
		<span class=\"title\">{title}</span>\
		<span class=\"price\">{price}</span>\
		</a></li>\n",
		id = html_escape(&product.id),
		image = html_escape(&product.image),
		title = html_escape(&product.title),
		price = format_price(product.price),
	)
}

/// Formats a price in integer currency units with thousands separators.
pub(crate) fn format_price(price: u64) -> String {
	let digits = price.to_string();
	let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
	for (index, c) in digits.chars().enumerate() {
		if index > 0 && (digits.len() - index) % 3 == 0 {
			out.push(',');
		}
		out.push(c);
	}
	out
}

/// Escapes text for HTML element and attribute contexts.
pub(crate) fn html_escape(s: &str) -> String {
	s.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
	use super::*;
	use vitrine_catalog::CategoryMap;

	fn product(id: &str, title: &str) -> Product {
		Product {
			id: id.to_string(),
			title: title.to_string(),
			description: Some("A description".to_string()),
			image: format!("/images/{id}.jpg"),
			category1: "digital".to_string(),
			category2: "audio".to_string(),
			price: 1234567,
		}
	}

	#[test]
	fn test_home_page_lists_products() {
		let state = ProductState {
			products: vec![product("p-1", "Speaker"), product("p-2", "Earbuds")],
			total_count: 2,
			..ProductState::default()
		};

		let html = home_page(&state);
		assert!(html.contains("Speaker"));
		assert!(html.contains("Earbuds"));
		assert!(html.contains("2 products"));
		assert!(html.contains("/product/p-1/"));
	}

	#[test]
	fn test_home_page_renders_category_nav() {
		let mut categories = CategoryMap::new();
		categories.insert("digital".to_string(), vec!["audio".to_string()]);
		let state = ProductState {
			categories,
			..ProductState::default()
		};

		let html = home_page(&state);
		assert!(html.contains("class=\"categories\""));
		assert!(html.contains("category1=digital"));
	}

	#[test]
	fn test_detail_page_renders_subject() {
		let state = ProductState {
			current_product: Some(product("p-1", "Speaker")),
			related_products: vec![product("p-2", "Earbuds")],
			..ProductState::default()
		};

		let html = product_detail_page(&state);
		assert!(html.contains("<h1>Speaker</h1>"));
		assert!(html.contains("A description"));
		assert!(html.contains("1,234,567"));
		assert!(html.contains("Related products"));
		assert!(html.contains("Earbuds"));
	}

	#[test]
	fn test_detail_page_without_subject_is_graceful() {
		let html = product_detail_page(&ProductState::default());
		assert!(html.contains("Product not found"));
	}

	#[test]
	fn test_detail_page_escapes_title() {
		let state = ProductState {
			current_product: Some(product("p-1", "<script>alert(1)</script>")),
			..ProductState::default()
		};

		let html = product_detail_page(&state);
		assert!(!html.contains("<script>alert"));
		assert!(html.contains("&lt;script&gt;"));
	}

	#[test]
	fn test_render_page_dispatches_on_kind() {
		let state = ProductState::default();
		assert!(render_page(PageKind::NotFound, &state).contains("404"));
		assert!(render_page(PageKind::Home, &state).contains("home"));
	}

	#[test]
	fn test_format_price() {
		assert_eq!(format_price(0), "0");
		assert_eq!(format_price(999), "999");
		assert_eq!(format_price(1000), "1,000");
		assert_eq!(format_price(24900), "24,900");
		assert_eq!(format_price(1234567), "1,234,567");
	}

	#[test]
	fn test_html_escape() {
		assert_eq!(html_escape("<script>"), "&lt;script&gt;");
		assert_eq!(html_escape("a&b"), "a&amp;b");
		assert_eq!(html_escape("\"quoted\""), "&quot;quoted&quot;");
	}
}
