mod api_types;
mod app_system;
mod clients;
mod config;
mod domain;
mod messages;
mod order_actor;
mod order_store;
mod routes;
mod state;

#[cfg(test)]
mod mock_framework;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{error, info, Level};

use crate::app_system::{setup_tracing, OrderSystem};
use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Optional; production passes configuration through the environment.
    let _ = dotenvy::dotenv();

    setup_tracing();

    let config = Config::parse();
    info!(
        addr = %config.addr,
        buffer_size = config.buffer_size,
        update_window_minutes = config.update_window_minutes,
        "Starting order service"
    );

    let system = OrderSystem::new(&config);

    let app = routes::build_router(Arc::new(AppState::new(system.order_client.clone()))).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    );

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    info!("order service listening on http://{}", config.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server crashed")?;

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}
