//! Basic metrics instrumentation for the contact relay.
//!
//! Counts submissions by outcome and tracks webhook call durations.
//! Clones share the same counters.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Metrics collector for tracking submission outcomes.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of submissions received
    submissions_received: Arc<AtomicU64>,

    /// Submissions rejected as malformed or invalid
    submissions_rejected: Arc<AtomicU64>,

    /// Submissions handed to the webhook
    submissions_forwarded: Arc<AtomicU64>,

    /// Submissions written to the log because no webhook is configured
    submissions_logged: Arc<AtomicU64>,

    /// Webhook calls that failed at the transport level
    webhook_errors_total: Arc<AtomicU64>,

    /// Webhook calls that completed with a non-2xx status
    webhook_non_success_total: Arc<AtomicU64>,

    /// Total duration of all webhook calls in milliseconds
    webhook_duration_total_ms: Arc<AtomicU64>,

    /// Total number of webhook calls attempted
    webhook_requests_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            submissions_received: Arc::new(AtomicU64::new(0)),
            submissions_rejected: Arc::new(AtomicU64::new(0)),
            submissions_forwarded: Arc::new(AtomicU64::new(0)),
            submissions_logged: Arc::new(AtomicU64::new(0)),
            webhook_errors_total: Arc::new(AtomicU64::new(0)),
            webhook_non_success_total: Arc::new(AtomicU64::new(0)),
            webhook_duration_total_ms: Arc::new(AtomicU64::new(0)),
            webhook_requests_total: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn record_received(&self) {
        self.submissions_received.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected(&self) {
        self.submissions_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_forwarded(&self) {
        self.submissions_forwarded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_logged(&self) {
        self.submissions_logged.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a webhook call with duration.
    pub fn record_webhook_request(&self, duration: Duration) {
        self.webhook_requests_total.fetch_add(1, Ordering::Relaxed);
        self.webhook_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record a webhook transport failure.
    pub fn record_webhook_error(&self) {
        self.webhook_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a webhook response outside the 2xx range.
    pub fn record_webhook_non_success(&self) {
        self.webhook_non_success_total
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Get average webhook call duration in milliseconds.
    pub fn webhook_duration_avg_ms(&self) -> f64 {
        let total = self.webhook_duration_total_ms.load(Ordering::Relaxed);
        let count = self.webhook_requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            submissions_received: self.submissions_received.load(Ordering::Relaxed),
            submissions_rejected: self.submissions_rejected.load(Ordering::Relaxed),
            submissions_forwarded: self.submissions_forwarded.load(Ordering::Relaxed),
            submissions_logged: self.submissions_logged.load(Ordering::Relaxed),
            webhook_requests_total: self.webhook_requests_total.load(Ordering::Relaxed),
            webhook_errors_total: self.webhook_errors_total.load(Ordering::Relaxed),
            webhook_non_success_total: self.webhook_non_success_total.load(Ordering::Relaxed),
            webhook_duration_avg_ms: self.webhook_duration_avg_ms(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricsSummary {
    pub submissions_received: u64,
    pub submissions_rejected: u64,
    pub submissions_forwarded: u64,
    pub submissions_logged: u64,
    pub webhook_requests_total: u64,
    pub webhook_errors_total: u64,
    pub webhook_non_success_total: u64,
    pub webhook_duration_avg_ms: f64,
}
