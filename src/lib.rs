//! Sealcoat Contact - contact form relay for a parking-lot sealcoating website.
//!
//! The website posts inquiries from churches and other organizations to
//! `POST /api/contact`. Each submission is validated against a fixed schema
//! and then either forwarded to a CRM webhook or, when no webhook is
//! configured, written to the log for manual follow-up.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (email, phone) and validation errors
//! - **models**: The `ContactSubmission` record and its schema rules
//! - **error**: Error types for submission, webhook and configuration failures
//! - **config**: Startup configuration from environment variables
//! - **client**: Blocking webhook client and its async wrapper
//! - **services**: Validate-then-forward-or-log pipeline
//! - **server**: axum router and HTTP handlers
//! - **metrics**: Submission and webhook counters

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod server;
pub mod services;

pub use client::{AsyncWebhookClient, AsyncWebhookClientImpl, WebhookClient};
pub use config::Config;
pub use error::{ConfigError, SubmissionError, WebhookError};
pub use metrics::{Metrics, MetricsSummary};
pub use models::ContactSubmission;
pub use server::{build_router, AppState};
pub use services::{ContactService, ContactServiceImpl, Delivery};
