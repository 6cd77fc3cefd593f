use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;
use vitrine_server::{App, ServerConfig, serve};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.init();

	let config = ServerConfig::from_env();
	let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
	tracing::info!(?config, "starting vitrine");

	let app = App::new(config)?;
	serve(app, addr).await
}
