//! HTML template splicing.
//!
//! The HTTP layer supplies a template containing two literal markers; the
//! render output is spliced in verbatim at those markers, and the hydration
//! script block is inserted immediately before the closing head tag.

use crate::pipeline::RenderOutput;
use thiserror::Error;

/// Marker replaced by the synthesized head fragment.
pub const HEAD_MARKER: &str = "<!--app-head-->";

/// Marker replaced by the rendered body fragment.
pub const HTML_MARKER: &str = "<!--app-html-->";

/// The closing tag the hydration script is inserted before.
const HEAD_CLOSE: &str = "</head>";

/// Error type for template handling.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TemplateError {
	/// A required marker is missing from the template source.
	#[error("template is missing the '{0}' marker")]
	MissingMarker(&'static str),
	/// The hydration payload could not be serialized.
	#[error("failed to serialize hydration payload: {0}")]
	Serialize(String),
}

/// A validated HTML template.
#[derive(Debug, Clone)]
pub struct Template {
	source: String,
}

impl Template {
	/// Validates that `source` carries both markers and a closing head tag.
	pub fn new(source: impl Into<String>) -> Result<Self, TemplateError> {
		let source = source.into();
		for marker in [HEAD_MARKER, HTML_MARKER, HEAD_CLOSE] {
			if !source.contains(marker) {
				return Err(TemplateError::MissingMarker(marker));
			}
		}
		Ok(Self { source })
	}

	/// Splices a render output into the template.
	///
	/// Head and body fragments replace their markers verbatim; the
	/// hydration script block lands immediately before `</head>`.
	pub fn splice(&self, output: &RenderOutput) -> Result<String, TemplateError> {
		let script = output
			.initial_data
			.to_script_tag()
			.map_err(|e| TemplateError::Serialize(e.to_string()))?;

		Ok(self
			.source
			.replacen(HEAD_MARKER, &output.head, 1)
			.replacen(HTML_MARKER, &output.html, 1)
			.replacen(HEAD_CLOSE, &format!("{script}\n{HEAD_CLOSE}"), 1))
	}
}
