//! Vitrine Server - HTTP Entry Layer
//!
//! A thin hyper service around the render pipeline: strip the base prefix,
//! parse the query string, render, splice into the page template, respond.
//! Everything request-scoped lives inside the pipeline; this crate only
//! holds the immutable startup state (routes, catalog, template, config).

pub mod config;
pub mod service;

pub use config::ServerConfig;
pub use service::App;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Binds the listener and serves requests until the process exits.
pub async fn serve(app: Arc<App>, addr: SocketAddr) -> anyhow::Result<()> {
	let listener = TcpListener::bind(addr).await?;
	tracing::info!(%addr, "server listening");

	loop {
		let (stream, remote) = listener.accept().await?;
		let app = Arc::clone(&app);

		tokio::task::spawn(async move {
			let io = TokioIo::new(stream);
			let service = service_fn(move |req| {
				let app = Arc::clone(&app);
				async move { Ok::<_, Infallible>(app.handle(req).await) }
			});

			if let Err(error) = http1::Builder::new().serve_connection(io, service).await {
				tracing::warn!(%remote, %error, "connection error");
			}
		});
	}
}
