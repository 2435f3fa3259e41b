//! HTTP server for the contact relay.
//!
//! Exposes the contact endpoint plus health and metrics endpoints on an axum
//! router, and runs it until SIGINT or SIGTERM.

pub mod handlers;

pub use handlers::{AppState, FAILURE_MESSAGE};

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Path the website's form posts to.
pub const CONTACT_PATH: &str = "/api/contact";

/// Build the application router.
///
/// `max_body_bytes` caps the accepted request body; larger bodies are
/// rejected with 413 before reaching a handler.
pub fn build_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route(CONTACT_PATH, post(handlers::contact_handler))
        .route("/healthz", get(handlers::healthz_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}

/// Bind `addr` and serve `router` until a shutdown signal arrives.
pub async fn run_server(router: Router, addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await?;

    Ok(())
}

async fn wait_for_shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to register SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
