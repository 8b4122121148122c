//! gravbus gateway binary.
//!
//! Loads `GRAVBUS_CONFIG` (default `gravbus.yaml`), builds one filter per
//! configured pod, and serves the HTTP ingestion/admin surface.

use tracing_subscriber::{fmt, EnvFilter};

use gravbus_core::error::Result;
use gravbus_gateway::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "gravbus-gateway failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let path = config::config_path();
    let cfg = config::load_from_file(&path)?;
    let listen = cfg.gateway.listen_addr()?;

    let state = app_state::AppState::new(cfg)?;
    tracing::info!(pods = state.pods().len(), config = %path, "config loaded");
    let app = router::build_router(state);

    tracing::info!(%listen, "gravbus-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
