//! Head markup synthesis.

use crate::pages::html_escape;
use crate::state::ProductState;

/// Storefront display name used in titles.
const SITE_NAME: &str = "Vitrine";

/// Synthesizes the head fragment for a rendered page.
///
/// When a single product is the current subject, emits title, description,
/// and Open Graph tags derived from its fields (description falling back to
/// the title); otherwise emits the generic storefront head.
pub fn synthesize_head(state: &ProductState) -> String {
	match &state.current_product {
		Some(product) => {
			let title = html_escape(&product.title);
			let description =
				html_escape(product.description.as_deref().unwrap_or(&product.title));
			let image = html_escape(&product.image);

			let mut head = String::with_capacity(512);
			head.push_str(&format!("<title>{} | {}</title>\n", title, SITE_NAME));
			head.push_str(&format!(
				"<meta name=\"description\" content=\"{}\" />\n",
				description
			));
			head.push_str(&format!(
				"<meta property=\"og:title\" content=\"{}\" />\n",
				title
			));
			head.push_str(&format!(
				"<meta property=\"og:description\" content=\"{}\" />\n",
				description
			));
			head.push_str(&format!(
				"<meta property=\"og:image\" content=\"{}\" />\n",
				image
			));
			head
		}
		None => generic_head(),
	}
}

/// The generic storefront head.
pub fn generic_head() -> String {
	format!(
		"<title>{}</title>\n<meta name=\"description\" content=\"Find the best products\" />\n",
		SITE_NAME
	)
}

/// The degraded head returned when the pipeline fails.
pub fn error_head() -> String {
	"<title>Error</title>".to_string()
}
