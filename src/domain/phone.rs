//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

/// Ten-digit North American number: optional parentheses around the area
/// code, optional `-`, `.` or space between groups.
static NANP_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(?([0-9]{3})\)?[-. ]?([0-9]{3})[-. ]?([0-9]{4})$")
        .expect("phone pattern is a valid regex")
});

/// A type-safe wrapper for North American phone numbers.
///
/// The original formatting is preserved; only the shape is validated.
///
/// # Example
///
/// ```
/// use sealcoat_contact::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("(416) 555-0100").unwrap();
/// assert_eq!(phone.as_str(), "(416) 555-0100");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the number does not match
    /// the North American pattern.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !NANP_PATTERN.is_match(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_validates_format() {
        assert!(PhoneNumber::new("416-555-0100").is_ok());
        assert!(PhoneNumber::new("(416) 555-0100").is_ok());
        assert!(PhoneNumber::new("(416)555-0100").is_ok());
        assert!(PhoneNumber::new("416.555.0100").is_ok());
        assert!(PhoneNumber::new("416 555 0100").is_ok());
        assert!(PhoneNumber::new("4165550100").is_ok());

        assert!(PhoneNumber::new("").is_err());
        assert!(PhoneNumber::new("555-0100").is_err());
        assert!(PhoneNumber::new("+1 416 555 0100").is_err());
        assert!(PhoneNumber::new("416--555-0100").is_err());
        assert!(PhoneNumber::new("416-555-01000").is_err());
        assert!(PhoneNumber::new("call me").is_err());
    }

    #[test]
    fn test_phone_preserves_formatting() {
        let phone = PhoneNumber::new("416.555.0100").unwrap();
        assert_eq!(phone.as_str(), "416.555.0100");
        assert_eq!(format!("{}", phone), "416.555.0100");
    }
}
