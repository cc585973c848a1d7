use std::sync::Arc;

use activity_log_core::AppConfig;
use activity_log_http::{AppState, create_router};
use anyhow::Result;

use crate::build_service;

pub(crate) async fn run(config: &AppConfig, port: u16, host: &str) -> Result<()> {
    let activity_service = Arc::new(build_service(config)?);
    let state = Arc::new(AppState { activity_service });

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
