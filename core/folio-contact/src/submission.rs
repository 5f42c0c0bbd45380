//! Visitor submissions.

use serde::{Deserialize, Serialize};

use crate::error::{ContactError, ContactResult};

/// Request body as posted by the contact form.
///
/// Every field is optional on the wire so that a missing field is reported
/// as a validation failure rather than a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub body: String,
}

impl ContactPayload {
    /// Checks that `name`, `email` and `body` are present and non-empty.
    ///
    /// The error lists every missing field, in form order. Whitespace is
    /// significant: a single space counts as present.
    pub fn validate(self) -> ContactResult<ContactSubmission> {
        let mut missing = Vec::new();
        let name = required(self.name, "name", &mut missing);
        let email = required(self.email, "email", &mut missing);
        let body = required(self.body, "body", &mut missing);

        match (name, email, body) {
            (Some(name), Some(email), Some(body)) => Ok(ContactSubmission {
                name,
                email,
                subject: self.subject.filter(|s| !s.is_empty()),
                body,
            }),
            _ => Err(ContactError::Validation { missing }),
        }
    }
}

fn required(
    value: Option<String>,
    field: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    match value {
        Some(v) if !v.is_empty() => Some(v),
        _ => {
            missing.push(field);
            None
        }
    }
}
