//! Domain value objects and types.
//!
//! Type-safe wrappers for the contact fields that carry a format rule.
//! Each is validated at construction so an invalid address or number can
//! never be represented in a `ContactSubmission`.

pub mod email;
pub mod errors;
pub mod phone;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
