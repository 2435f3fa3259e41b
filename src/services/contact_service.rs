//! Contact submission service.
//!
//! Validates a raw payload and relays the result: one webhook POST when a
//! webhook is configured, one diagnostic log record otherwise.

use crate::client::{AsyncWebhookClient, AsyncWebhookClientImpl, WebhookClient};
use crate::config::Config;
use crate::error::SubmissionResult;
use crate::metrics::Metrics;
use crate::models::ContactSubmission;
use async_trait::async_trait;
use std::sync::Arc;

/// What happened to an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Posted to the webhook, which answered with `status` (not necessarily 2xx).
    Forwarded { status: u16 },

    /// No webhook configured; the submission was written to the log.
    Logged(ContactSubmission),
}

/// Contact service trait for submission handling.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Validate `body` and forward or log it.
    ///
    /// Makes at most one outbound call and never retries.
    async fn submit(&self, body: &[u8]) -> SubmissionResult<Delivery>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    webhook: Option<Arc<dyn AsyncWebhookClient>>,
    metrics: Metrics,
}

impl ContactServiceImpl {
    /// Create a service that forwards through `webhook`, or logs when `None`.
    pub fn new(webhook: Option<Arc<dyn AsyncWebhookClient>>, metrics: Metrics) -> Self {
        Self { webhook, metrics }
    }

    /// Build the service from startup configuration.
    ///
    /// A missing, blank, or placeholder webhook URL yields a log-only service.
    pub fn from_config(config: &Config, metrics: Metrics) -> Self {
        let webhook = config.webhook_url().map(|url| {
            let client = WebhookClient::new(url, config).with_metrics(metrics.clone());
            Arc::new(AsyncWebhookClientImpl::new(client)) as Arc<dyn AsyncWebhookClient>
        });
        Self::new(webhook, metrics)
    }

    /// Whether submissions will be forwarded rather than logged.
    pub fn is_forwarding(&self) -> bool {
        self.webhook.is_some()
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn submit(&self, body: &[u8]) -> SubmissionResult<Delivery> {
        self.metrics.record_received();

        let submission = match ContactSubmission::from_json(body) {
            Ok(submission) => submission,
            Err(e) => {
                self.metrics.record_rejected();
                return Err(e);
            }
        };

        match &self.webhook {
            Some(webhook) => {
                let status = webhook.forward(&submission).await?;
                self.metrics.record_forwarded();
                Ok(Delivery::Forwarded { status })
            }
            None => {
                let record = serde_json::to_string(&submission)
                    .unwrap_or_else(|_| format!("{:?}", submission));
                tracing::info!(
                    submission = %record,
                    "Contact form submission received (no webhook configured)"
                );
                self.metrics.record_logged();
                Ok(Delivery::Logged(submission))
            }
        }
    }
}
