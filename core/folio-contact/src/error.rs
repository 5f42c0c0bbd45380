//! Error types for the contact relay.

use std::fmt;

use thiserror::Error;

/// Result type for relay operations.
pub type ContactResult<T> = Result<T, ContactError>;

/// Result type for a single outbound send.
pub type MailResult<T> = Result<T, MailError>;

/// Which of the two outbound emails a delivery failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStage {
    /// The message to the site operator.
    Notification,
    /// The confirmation sent back to the visitor.
    Acknowledgement,
}

impl DeliveryStage {
    /// Whether the operator notification had already gone out when this stage failed.
    pub fn operator_notified(self) -> bool {
        matches!(self, DeliveryStage::Acknowledgement)
    }
}

impl fmt::Display for DeliveryStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryStage::Notification => f.write_str("notification"),
            DeliveryStage::Acknowledgement => f.write_str("acknowledgement"),
        }
    }
}

/// Errors surfaced by [`crate::ContactRelay::submit`].
#[derive(Debug, Error)]
pub enum ContactError {
    /// One or more required fields were missing or empty. Nothing was sent.
    #[error("missing required fields: {}", .missing.join(", "))]
    Validation { missing: Vec<&'static str> },

    /// An outbound send failed.
    #[error("{stage} email failed: {source}")]
    Delivery {
        stage: DeliveryStage,
        #[source]
        source: MailError,
    },
}

impl ContactError {
    /// Returns true if this error was raised before any side effect.
    pub fn is_validation(&self) -> bool {
        matches!(self, ContactError::Validation { .. })
    }
}

/// Errors from a [`crate::Mailer`] implementation.
#[derive(Debug, Error)]
pub enum MailError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider rejected message ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("invalid configuration: {0}")]
    Config(String),
}
