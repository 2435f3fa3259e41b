use async_trait::async_trait;
use sealcoat_contact::error::{WebhookError, WebhookResult};
use sealcoat_contact::{AsyncWebhookClient, ContactSubmission};
use std::sync::{Arc, Mutex};

/// Mock webhook for testing.
///
/// Records every submission it is asked to forward and answers with a
/// configurable status or transport failure.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockWebhook {
    sent: Arc<Mutex<Vec<ContactSubmission>>>,
    status: Arc<Mutex<u16>>,
    fail: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockWebhook {
    /// Create a mock that answers 200.
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            status: Arc::new(Mutex::new(200)),
            fail: Arc::new(Mutex::new(false)),
        }
    }

    /// Answer subsequent calls with `status`.
    pub fn respond_with(&self, status: u16) {
        *self.status.lock().unwrap() = status;
    }

    /// Make subsequent calls fail as if the network were down.
    pub fn fail_transport(&self) {
        *self.fail.lock().unwrap() = true;
    }

    /// Submissions forwarded so far.
    pub fn sent(&self) -> Vec<ContactSubmission> {
        self.sent.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl Default for MockWebhook {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AsyncWebhookClient for MockWebhook {
    async fn forward(&self, submission: &ContactSubmission) -> WebhookResult<u16> {
        self.sent.lock().unwrap().push(submission.clone());

        if *self.fail.lock().unwrap() {
            return Err(WebhookError::HttpError("Connection failed".to_string()));
        }
        Ok(*self.status.lock().unwrap())
    }
}
