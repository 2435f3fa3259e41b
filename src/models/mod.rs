//! Data models for contact-form traffic.
//!
//! A `ContactSubmission` is the only entity: it is built from a request
//! body, validated, relayed, and dropped.

pub mod submission;

pub use submission::{ContactSubmission, DEFAULT_SOURCE};
