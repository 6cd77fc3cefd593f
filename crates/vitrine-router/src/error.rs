//! Error types for routing.

/// Error type for router operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
	/// Pattern is structurally invalid and can never match anything.
	InvalidPattern {
		/// The offending pattern string.
		pattern: String,
		/// What is wrong with it.
		reason: String,
	},
	/// Pattern failed to compile to a regex.
	PatternCompile {
		/// The offending pattern string.
		pattern: String,
		/// Error message from the regex engine.
		source: String,
	},
}

impl std::fmt::Display for RouterError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::InvalidPattern { pattern, reason } => {
				write!(f, "Invalid route pattern '{}': {}", pattern, reason)
			}
			Self::PatternCompile { pattern, source } => {
				write!(f, "Failed to compile route pattern '{}': {}", pattern, source)
			}
		}
	}
}

impl std::error::Error for RouterError {}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_invalid_pattern_display() {
		let err = RouterError::InvalidPattern {
			pattern: "/a/:/".to_string(),
			reason: "empty parameter name".to_string(),
		};
		assert!(err.to_string().contains("/a/:/"));
		assert!(err.to_string().contains("empty parameter name"));
	}

	#[rstest]
	fn test_pattern_compile_display() {
		let err = RouterError::PatternCompile {
			pattern: "/x/".to_string(),
			source: "size limit".to_string(),
		};
		assert!(err.to_string().contains("Failed to compile"));
	}
}
