// =============================================================================
// Protocol Pulse — Main Entry Point
// =============================================================================
//
// Stateless DeFi protocol health scoring service. One pure scoring function
// behind two HTTP endpoints; no persistence, no background tasks.
// =============================================================================

mod api;
mod scorer;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let bind_addr =
        std::env::var("PULSE_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into());

    let app = api::rest::router();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "Protocol Pulse scoring service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Protocol Pulse shut down complete.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    warn!("Shutdown signal received — stopping gracefully");
}
