use crate::config::Config;
use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod payload;
mod shutdown;
mod webserver;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    info!("Starting science-worker {}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    let addr = config.webserver.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind webserver to {}", addr))?;

    webserver::serve(listener, webserver::create_app(), shutdown::shutdown_signal()).await
}
