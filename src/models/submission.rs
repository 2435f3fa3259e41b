//! Contact submission model and its schema validation.

use crate::domain::{EmailAddress, PhoneNumber, ValidationError};
use crate::error::{SubmissionError, SubmissionResult};
use serde::Serialize;
use serde_json::{Map, Value};

/// Value used for `source` when the form does not send one.
pub const DEFAULT_SOURCE: &str = "website";

/// A validated contact-form inquiry from a prospective customer.
///
/// Instances only come out of [`ContactSubmission::from_value`] (or its
/// byte-level wrapper), so every field already satisfies its constraint.
/// Serializes with the camelCase field names the website posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    /// Church or organization name
    pub org_name: String,

    /// Contact person
    pub name: String,

    pub email: EmailAddress,

    pub phone: PhoneNumber,

    pub city: String,

    /// Free-form inquiry text
    pub message: String,

    /// Service program the visitor picked, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,

    /// Where the submission came from
    pub source: String,

    /// Page the form was submitted from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

impl ContactSubmission {
    /// Parse raw request bytes and validate them.
    ///
    /// # Errors
    ///
    /// - `SubmissionError::MalformedPayload` if the bytes are not JSON
    /// - `SubmissionError::Validation` on the first field violation
    pub fn from_json(bytes: &[u8]) -> SubmissionResult<Self> {
        let value: Value =
            serde_json::from_slice(bytes).map_err(SubmissionError::MalformedPayload)?;
        Ok(Self::from_value(value)?)
    }

    /// Validate an untyped JSON value against the submission schema.
    ///
    /// Fields are checked in declaration order and the first violation is
    /// returned. Unknown keys are ignored.
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        let Value::Object(mut fields) = value else {
            return Err(ValidationError::NotAnObject);
        };

        let org_name = min_len(&mut fields, "orgName", 2)?;
        let name = min_len(&mut fields, "name", 2)?;
        let email = EmailAddress::new(required(&mut fields, "email")?)?;
        let phone = PhoneNumber::new(required(&mut fields, "phone")?)?;
        let city = min_len(&mut fields, "city", 1)?;
        let message = min_len(&mut fields, "message", 10)?;
        let program = optional(&mut fields, "program")?;
        let source =
            optional(&mut fields, "source")?.unwrap_or_else(|| DEFAULT_SOURCE.to_string());
        let page = optional(&mut fields, "page")?;

        Ok(Self {
            org_name,
            name,
            email,
            phone,
            city,
            message,
            program,
            source,
            page,
        })
    }

    /// Serialize to the JSON body sent to the webhook.
    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

fn optional(
    fields: &mut Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, ValidationError> {
    match fields.remove(field) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(ValidationError::NotAString { field }),
    }
}

fn required(
    fields: &mut Map<String, Value>,
    field: &'static str,
) -> Result<String, ValidationError> {
    optional(fields, field)?.ok_or(ValidationError::Missing { field })
}

fn min_len(
    fields: &mut Map<String, Value>,
    field: &'static str,
    min: usize,
) -> Result<String, ValidationError> {
    let value = required(fields, field)?;
    // Counted in UTF-16 code units, as the browser form counts them
    if value.encode_utf16().count() < min {
        return Err(ValidationError::TooShort { field, min });
    }
    Ok(value)
}
