//! Integration gateway binary.
//!
//! Loads configuration (TOML file plus environment fallback chain for the
//! backend endpoint), binds the listener, and serves the gated connect
//! endpoint until shutdown.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use integration_gateway::config::load_config;
use integration_gateway::http::HttpServer;

#[derive(Parser)]
#[command(name = "integration-gateway")]
#[command(about = "Authenticated gateway for OAuth integration connections", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "integration_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("integration-gateway v0.1.0 starting");

    let cli = Cli::parse();

    // Fail fast: a missing or invalid backend endpoint is a startup error,
    // never a malformed outbound URL at request time.
    let config = load_config(cli.config.as_deref())?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        backend_endpoint = %config.backend.endpoint,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            integration_gateway::observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
