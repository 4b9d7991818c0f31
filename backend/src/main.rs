//! HTTP backend for the feedback admin: serves sorted, paged feedback from an
//! in-memory set generated at start-up.

mod config;
mod handlers;
mod request_context;
mod routes;
mod seed;
mod state;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!("Starting feedback admin backend");

    let app_state = state::AppState::new(seed::generate_feedbacks(config.seed_count, config.seed));
    tracing::info!(
        "Seeded {} feedback records (seed {})",
        app_state.feedback_count().await,
        config.seed
    );

    let app = routes::create_router(app_state);

    let addr = config.listen_addr();
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
