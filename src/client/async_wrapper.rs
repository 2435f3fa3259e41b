//! Async wrapper around the synchronous WebhookClient.
//!
//! Runs the blocking `ureq` call on tokio's blocking thread pool so a slow
//! webhook only stalls the request that is waiting on it.

use crate::client::WebhookClient;
use crate::error::{WebhookError, WebhookResult};
use crate::models::ContactSubmission;
use async_trait::async_trait;
use std::sync::Arc;

/// Async interface for delivering submissions to the CRM webhook.
///
/// Implemented by [`AsyncWebhookClientImpl`] for real traffic and by test
/// doubles that record what they were asked to send.
#[async_trait]
pub trait AsyncWebhookClient: Send + Sync {
    /// Deliver one submission, returning the webhook's HTTP status.
    async fn forward(&self, submission: &ContactSubmission) -> WebhookResult<u16>;
}

/// Async wrapper around synchronous WebhookClient.
#[derive(Clone)]
pub struct AsyncWebhookClientImpl {
    client: Arc<WebhookClient>,
}

impl AsyncWebhookClientImpl {
    pub fn new(client: WebhookClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncWebhookClient for AsyncWebhookClientImpl {
    async fn forward(&self, submission: &ContactSubmission) -> WebhookResult<u16> {
        let client = self.client.clone();
        let submission = submission.clone();

        tokio::task::spawn_blocking(move || client.post_submission(&submission))
            .await
            .map_err(|e| WebhookError::TaskJoin(e.to_string()))?
    }
}
