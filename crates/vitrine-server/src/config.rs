//! Environment-driven server configuration.

/// Default listen port.
const DEFAULT_PORT: u16 = 5173;

/// Typed server settings resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
	/// Listen port (`VITRINE_PORT`).
	pub port: u16,
	/// Base path prefix stripped from incoming urls (`VITRINE_BASE`).
	/// Always starts and ends with `/`.
	pub base: String,
	/// Whether the process runs in production mode (`VITRINE_ENV`).
	pub production: bool,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			port: DEFAULT_PORT,
			base: "/".to_string(),
			production: false,
		}
	}
}

impl ServerConfig {
	/// Reads settings from `VITRINE_PORT`, `VITRINE_BASE`, and
	/// `VITRINE_ENV`, with defaults for anything absent or malformed.
	pub fn from_env() -> Self {
		Self::resolve(
			std::env::var("VITRINE_PORT").ok(),
			std::env::var("VITRINE_BASE").ok(),
			std::env::var("VITRINE_ENV").ok(),
		)
	}

	/// Resolves raw environment values into a config.
	pub fn resolve(port: Option<String>, base: Option<String>, env: Option<String>) -> Self {
		let port = port
			.and_then(|raw| raw.parse::<u16>().ok())
			.unwrap_or(DEFAULT_PORT);

		let base = base
			.filter(|raw| !raw.is_empty())
			.map(|raw| normalize_base(&raw))
			.unwrap_or_else(|| "/".to_string());

		let production = env.as_deref() == Some("production");

		Self {
			port,
			base,
			production,
		}
	}
}

/// Guarantees a leading and trailing slash on the base prefix.
fn normalize_base(raw: &str) -> String {
	let mut base = String::new();
	if !raw.starts_with('/') {
		base.push('/');
	}
	base.push_str(raw);
	if !base.ends_with('/') {
		base.push('/');
	}
	base
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn test_defaults() {
		let config = ServerConfig::resolve(None, None, None);
		assert_eq!(config, ServerConfig::default());
	}

	#[rstest]
	#[case(Some("8080"), 8080)]
	#[case(Some("not-a-port"), 5173)]
	#[case(None, 5173)]
	fn test_port_resolution(#[case] raw: Option<&str>, #[case] expected: u16) {
		let config = ServerConfig::resolve(raw.map(str::to_string), None, None);
		assert_eq!(config.port, expected);
	}

	#[rstest]
	#[case("/shop/", "/shop/")]
	#[case("/shop", "/shop/")]
	#[case("shop", "/shop/")]
	#[case("/", "/")]
	fn test_base_normalization(#[case] raw: &str, #[case] expected: &str) {
		let config = ServerConfig::resolve(None, Some(raw.to_string()), None);
		assert_eq!(config.base, expected);
	}

	#[rstest]
	#[case(Some("production"), true)]
	#[case(Some("development"), false)]
	#[case(None, false)]
	fn test_production_flag(#[case] raw: Option<&str>, #[case] expected: bool) {
		let config = ServerConfig::resolve(None, None, raw.map(str::to_string));
		assert_eq!(config.production, expected);
	}
}
