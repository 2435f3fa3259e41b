//! Domain validation errors.

use std::fmt;

/// Errors that can occur while validating a contact submission.
///
/// Validation stops at the first violation, so a single error describes
/// exactly one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The payload parsed as JSON but is not an object.
    NotAnObject,

    /// A required field is absent.
    Missing { field: &'static str },

    /// A field is present but is not a string.
    NotAString { field: &'static str },

    /// A string field is shorter than its minimum length.
    TooShort { field: &'static str, min: usize },

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),
}

impl ValidationError {
    /// Name of the offending field, if the error concerns one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::NotAnObject => None,
            Self::Missing { field } | Self::NotAString { field } | Self::TooShort { field, .. } => {
                Some(*field)
            }
            Self::InvalidEmail(_) => Some("email"),
            Self::InvalidPhone(_) => Some("phone"),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "Submission must be a JSON object"),
            Self::Missing { field } => write!(f, "{}: required", field),
            Self::NotAString { field } => write!(f, "{}: expected a string", field),
            Self::TooShort { field, min } => {
                write!(f, "{}: must contain at least {} character(s)", field, min)
            }
            Self::InvalidEmail(email) => write!(f, "email: invalid email address: {}", email),
            Self::InvalidPhone(phone) => write!(f, "phone: invalid phone number: {}", phone),
        }
    }
}

impl std::error::Error for ValidationError {}
