//! Path pattern compilation and matching.

use crate::error::RouterError;
use percent_encoding::percent_decode_str;
use std::collections::HashMap;

/// Maximum allowed length for a route pattern string in bytes.
const MAX_PATTERN_LENGTH: usize = 1024;

/// Maximum allowed number of path segments in a route pattern.
const MAX_PATH_SEGMENTS: usize = 32;

/// Maximum allowed size for a compiled pattern regex (in bytes).
const MAX_REGEX_SIZE: usize = 1 << 20; // 1 MiB

/// A compiled path pattern.
///
/// Supports three segment kinds:
/// - static segments, matched exactly (`/products/`)
/// - `:name` parameter segments, each matching one non-empty path segment
///   (`/product/:id/`); captured values are percent-decoded exactly once
/// - the catch-all sentinel `*` (also accepted spelled `.*`), matching any
///   path and capturing nothing
#[derive(Debug, Clone)]
pub struct PathPattern {
	/// The original pattern string.
	pattern: String,
	/// Compiled anchored regex.
	regex: regex::Regex,
	/// Parameter names in the order they appear in the pattern.
	param_names: Vec<String>,
	/// Whether this is the match-all sentinel.
	catch_all: bool,
}

impl PathPattern {
	/// Compiles a pattern string.
	///
	/// # Errors
	///
	/// Returns [`RouterError::InvalidPattern`] for patterns that can never
	/// match anything (missing leading `/`, empty or malformed parameter
	/// names, `*` outside the sentinel position, duplicate parameter names,
	/// length or segment-count limits exceeded), and
	/// [`RouterError::PatternCompile`] if the regex engine rejects the
	/// compiled pattern.
	pub fn new(pattern: &str) -> Result<Self, RouterError> {
		if pattern.len() > MAX_PATTERN_LENGTH {
			return Err(invalid(
				pattern,
				format!(
					"length {} exceeds maximum of {} bytes",
					pattern.len(),
					MAX_PATTERN_LENGTH
				),
			));
		}

		// The match-all sentinel matches any path.
		if pattern == "*" || pattern == ".*" {
			let regex = build_regex(pattern, "^.*$")?;
			return Ok(Self {
				pattern: pattern.to_string(),
				regex,
				param_names: Vec::new(),
				catch_all: true,
			});
		}

		if !pattern.starts_with('/') {
			return Err(invalid(pattern, "must begin with '/'".to_string()));
		}

		let segment_count = pattern.split('/').count();
		if segment_count > MAX_PATH_SEGMENTS {
			return Err(invalid(
				pattern,
				format!(
					"{} path segments exceed maximum of {}",
					segment_count, MAX_PATH_SEGMENTS
				),
			));
		}

		let (regex_str, param_names) = compile_pattern(pattern)?;
		let regex = build_regex(pattern, &regex_str)?;

		Ok(Self {
			pattern: pattern.to_string(),
			regex,
			param_names,
			catch_all: false,
		})
	}

	/// Returns the original pattern string.
	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	/// Returns the parameter names in pattern order.
	pub fn param_names(&self) -> &[String] {
		&self.param_names
	}

	/// Returns whether this is the match-all sentinel.
	pub fn is_catch_all(&self) -> bool {
		self.catch_all
	}

	/// Returns whether this pattern has no parameters and is not the
	/// sentinel.
	pub fn is_exact(&self) -> bool {
		!self.catch_all && self.param_names.is_empty()
	}

	/// Attempts to match a path against this pattern.
	///
	/// Returns the extracted parameters (percent-decoded) when the path
	/// matches.
	pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
		self.regex.captures(path).map(|caps| {
			self.param_names
				.iter()
				.filter_map(|name| {
					caps.name(name).map(|m| {
						let decoded = percent_decode_str(m.as_str()).decode_utf8_lossy();
						(name.clone(), decoded.to_string())
					})
				})
				.collect()
		})
	}

	/// Checks whether this pattern would match the given path.
	pub fn is_match(&self, path: &str) -> bool {
		self.regex.is_match(path)
	}
}

impl PartialEq for PathPattern {
	fn eq(&self, other: &Self) -> bool {
		self.pattern == other.pattern
	}
}

impl Eq for PathPattern {}

impl std::fmt::Display for PathPattern {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.pattern)
	}
}

fn invalid(pattern: &str, reason: String) -> RouterError {
	RouterError::InvalidPattern {
		pattern: pattern.to_string(),
		reason,
	}
}

fn build_regex(pattern: &str, regex_str: &str) -> Result<regex::Regex, RouterError> {
	regex::RegexBuilder::new(regex_str)
		.size_limit(MAX_REGEX_SIZE)
		.build()
		.map_err(|e| RouterError::PatternCompile {
			pattern: pattern.to_string(),
			source: e.to_string(),
		})
}

/// Compiles a pattern into an anchored regex string plus parameter names.
fn compile_pattern(pattern: &str) -> Result<(String, Vec<String>), RouterError> {
	let mut regex_str = String::from("^");
	let mut param_names: Vec<String> = Vec::new();

	for (index, segment) in pattern.split('/').enumerate() {
		if index > 0 {
			regex_str.push('/');
		}
		if segment.is_empty() {
			continue;
		}

		if let Some(name) = segment.strip_prefix(':') {
			if name.is_empty() {
				return Err(invalid(pattern, "empty parameter name".to_string()));
			}
			if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
				return Err(invalid(
					pattern,
					format!("parameter name '{}' must be alphanumeric", name),
				));
			}
			if param_names.iter().any(|existing| existing == name) {
				return Err(invalid(
					pattern,
					format!("duplicate parameter name '{}'", name),
				));
			}
			param_names.push(name.to_string());
			// One non-empty path segment per parameter.
			regex_str.push_str(&format!("(?P<{}>[^/]+)", name));
		} else if segment.contains(':') || segment.contains('*') {
			return Err(invalid(
				pattern,
				format!("segment '{}' mixes literals with ':' or '*'", segment),
			));
		} else {
			regex_str.push_str(&regex::escape(segment));
		}
	}

	regex_str.push('$');
	Ok((regex_str, param_names))
}
