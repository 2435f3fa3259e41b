//! Service layer: business logic between the HTTP handlers and the webhook client.

pub mod contact_service;

pub use contact_service::{ContactService, ContactServiceImpl, Delivery};
