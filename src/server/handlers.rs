//! HTTP handlers for the contact relay.

use crate::metrics::Metrics;
use crate::services::{ContactService, Delivery};
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::sync::Arc;

/// Body returned for every failed submission, whatever the cause.
pub const FAILURE_MESSAGE: &str = "Failed to process form submission";

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn ContactService>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(service: Arc<dyn ContactService>, metrics: Metrics) -> Self {
        Self { service, metrics }
    }
}

/// `POST /api/contact`
///
/// The body is read as raw bytes so a missing or wrong `Content-Type`
/// does not matter; anything that is not JSON fails validation. Failures
/// of every kind, including a body over the configured limit, get the same
/// 500 response and are only detailed in the log.
pub async fn contact_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            state.metrics.record_received();
            state.metrics.record_rejected();
            tracing::error!(
                kind = "unreadable_body",
                status = rejection.status().as_u16(),
                "Contact form error: {}",
                rejection.body_text()
            );
            return failure_response();
        }
    };

    match state.service.submit(&body).await {
        Ok(delivery) => {
            if let Delivery::Forwarded { status } = delivery {
                tracing::info!(webhook_status = status, "Contact submission forwarded");
            }
            (StatusCode::OK, Json(json!({ "success": true }))).into_response()
        }
        Err(e) => {
            tracing::error!(
                kind = e.kind(),
                field = e.field().unwrap_or("-"),
                "Contact form error: {}",
                e
            );
            failure_response()
        }
    }
}

fn failure_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": FAILURE_MESSAGE })),
    )
        .into_response()
}

/// `GET /healthz`
pub async fn healthz_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// `GET /metrics`
pub async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.metrics.summary())
}
