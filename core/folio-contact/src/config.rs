//! Relay configuration.

use serde::{Deserialize, Serialize};

/// Addresses and wording used when rendering outbound emails.
///
/// Built once at process start and handed to [`crate::ContactRelay`];
/// nothing in this crate reads the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Where notifications are delivered.
    pub operator_address: String,
    /// `From` header for both emails.
    pub sender_address: String,
    /// Prepended to every notification subject.
    pub subject_prefix: String,
    /// Used when the visitor leaves the subject blank.
    pub default_subject: String,
    /// Name signed at the bottom of the acknowledgement.
    pub signoff: String,
}

impl ContactConfig {
    /// Default sender used when none is configured.
    pub const DEFAULT_SENDER: &'static str = "Nidhi Portfolio <onboarding@resend.dev>";

    /// Creates a configuration delivering to `operator_address` with default wording.
    pub fn new(operator_address: impl Into<String>) -> Self {
        Self {
            operator_address: operator_address.into(),
            ..Default::default()
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            operator_address: String::new(),
            sender_address: Self::DEFAULT_SENDER.to_string(),
            subject_prefix: "[Portfolio]".to_string(),
            default_subject: "New message".to_string(),
            signoff: "Nidhi".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ContactConfig;

    #[test]
    fn new_keeps_default_wording() {
        let cfg = ContactConfig::new("ops@example.com");
        assert_eq!(cfg.operator_address, "ops@example.com");
        assert_eq!(cfg.sender_address, ContactConfig::DEFAULT_SENDER);
        assert_eq!(cfg.subject_prefix, "[Portfolio]");
        assert_eq!(cfg.default_subject, "New message");
    }

    #[test]
    fn serde_roundtrip_preserves_overrides() {
        let cfg = ContactConfig {
            signoff: "Sam".to_string(),
            ..ContactConfig::new("ops@example.com")
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: ContactConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.signoff, "Sam");
        assert_eq!(back.operator_address, "ops@example.com");
    }
}
