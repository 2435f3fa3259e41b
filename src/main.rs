//! Sealcoat Contact - Main entry point
//!
//! Loads configuration once, wires the submission service into the axum
//! router, and serves until shutdown.

use anyhow::Result;
use sealcoat_contact::services::ContactService;
use sealcoat_contact::{build_router, AppState, Config, ContactServiceImpl, Metrics};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // RUST_LOG wins; LOG_LEVEL is the fallback
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let metrics = Metrics::new();
    let service = ContactServiceImpl::from_config(&config, metrics.clone());

    // The webhook URL usually embeds a secret token; keep it out of info logs
    if service.is_forwarding() {
        info!("Forwarding contact submissions to the configured CRM webhook");
    } else {
        warn!("No CRM webhook configured; submissions will only be logged");
    }

    let service = Arc::new(service) as Arc<dyn ContactService>;
    let router = build_router(AppState::new(service, metrics), config.max_body_bytes);

    if let Err(e) = sealcoat_contact::server::run_server(router, config.bind_addr).await {
        error!("Server error: {}", e);
        return Err(e);
    }

    info!("Sealcoat Contact shutdown complete");
    Ok(())
}
