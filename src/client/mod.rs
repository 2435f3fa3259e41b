//! HTTP client for the CRM webhook.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. It issues one POST per submission and never
//! inspects the webhook's response.

mod async_wrapper;
pub use async_wrapper::{AsyncWebhookClient, AsyncWebhookClientImpl};

use crate::config::Config;
use crate::error::{WebhookError, WebhookResult};
use crate::metrics::Metrics;
use crate::models::ContactSubmission;
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// HTTP client for the CRM webhook.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct WebhookClient {
    /// Target webhook URL
    url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl WebhookClient {
    /// Create a new WebhookClient posting to `url`.
    ///
    /// The agent timeout comes from `config.request_timeout`; when unset the
    /// `ureq` defaults apply.
    pub fn new(url: impl Into<String>, config: &Config) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(secs) = config.request_timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Self {
            url: url.into(),
            agent: Arc::new(builder.build()),
            metrics: Metrics::new(),
        }
    }

    /// Create a WebhookClient with default settings (useful for testing).
    #[doc(hidden)]
    pub fn with_url(url: impl Into<String>) -> Self {
        Self::new(url, &Config::default())
    }

    /// Replace the metrics collector, typically with one shared by the service.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Get the webhook URL this client posts to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// POST a validated submission to the webhook.
    ///
    /// Returns the HTTP status the webhook answered with. Any status,
    /// including 4xx and 5xx, counts as delivered; only transport failures
    /// are errors.
    pub fn post_submission(&self, submission: &ContactSubmission) -> WebhookResult<u16> {
        let body = submission.to_json()?;
        let start = Instant::now();

        tracing::debug!("POST {} ({} bytes)", self.url, body.len());

        let result = match self
            .agent
            .post(&self.url)
            .set("Content-Type", "application/json")
            .send_bytes(&body)
        {
            Ok(response) => Ok(response.status()),
            // Status is not a failure; the response body is never read
            Err(ureq::Error::Status(code, _response)) => {
                tracing::warn!("Webhook POST answered with status {}", code);
                self.metrics.record_webhook_non_success();
                Ok(code)
            }
            Err(ureq::Error::Transport(transport)) => Err(Self::map_transport(transport)),
        };

        let duration = start.elapsed();
        self.metrics.record_webhook_request(duration);
        match &result {
            Ok(status) => {
                tracing::debug!("POST {} - status {} in {:?}", self.url, status, duration);
            }
            Err(e) => {
                tracing::error!("Webhook POST failed: {:?}", e);
                self.metrics.record_webhook_error();
            }
        }

        result
    }

    /// Map a ureq transport failure to a WebhookError.
    fn map_transport(transport: ureq::Transport) -> WebhookError {
        match transport.kind() {
            ureq::ErrorKind::ConnectionFailed => {
                WebhookError::HttpError("Connection failed".to_string())
            }
            ureq::ErrorKind::Io if Self::timed_out(&transport) => WebhookError::Timeout,
            _ => WebhookError::HttpError(transport.to_string()),
        }
    }

    /// Whether the I/O error under a transport failure is a read/write timeout.
    fn timed_out(transport: &ureq::Transport) -> bool {
        std::error::Error::source(transport)
            .and_then(|source| source.downcast_ref::<io::Error>())
            .map_or(false, |e| {
                matches!(e.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_keeps_url() {
        let client = WebhookClient::with_url("https://hooks.example.com/contact");
        assert_eq!(client.url(), "https://hooks.example.com/contact");
    }

    #[test]
    fn test_with_metrics_shares_counters() {
        let shared = Metrics::new();
        let client = WebhookClient::with_url("http://127.0.0.1:9").with_metrics(shared.clone());
        client.metrics().record_webhook_error();
        assert_eq!(shared.summary().webhook_errors_total, 1);
    }
}
