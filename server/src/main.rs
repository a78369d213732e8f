//! ACME Travels server: reads config from the environment (and `.env`), builds the in-memory
//! store, and serves the API until Ctrl-C.
//!
//! Run from repo root: `cargo run -p acme-travels-server`

use acme_travels::{app, AppState, ServerConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("acme_travels=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!(
        static_dir = %config.static_dir.display(),
        delete_style = ?config.delete_style,
        seed_sample = config.seed_sample,
        body_limit = config.body_limit,
        "configuration loaded"
    );
    let addr = config.addr;
    let state = AppState::new(config)?;
    tracing::info!(kinds = ?state.store.enabled_kinds(), "collections ready");

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("ACME Travels API listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
