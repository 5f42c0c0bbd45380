//! Outbound email delivery.
//!
//! The relay only depends on the [`Mailer`] trait, so tests can substitute
//! a recording stub for the hosted provider.

mod dry_run;
mod resend;

pub use dry_run::LogMailer;
pub use resend::{ResendConfig, ResendMailer};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::MailResult;
use crate::message::OutboundEmail;

/// Provider acknowledgement for one accepted message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentEmail {
    /// Provider-assigned message id.
    pub id: String,
}

/// Capability to deliver a single email.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Returns the name of the delivery provider, for logs.
    fn provider_name(&self) -> &'static str;

    /// Sends one message. A returned error means the provider did not accept it.
    async fn send(&self, email: &OutboundEmail) -> MailResult<SentEmail>;
}
