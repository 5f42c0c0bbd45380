//! Contact form relay for the folio site.
//!
//! A visitor submission is validated, rendered into two outbound emails
//! and handed to a [`Mailer`]:
//!
//! 1. **Notification**: sent to the site operator, reply-to set to the visitor
//! 2. **Acknowledgement**: sent back to the visitor as plain text
//!
//! The relay holds no state between submissions. Nothing is retried or
//! deduplicated; resubmitting the same payload sends the same emails again.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use folio_contact::{ContactConfig, ContactPayload, ContactRelay, LogMailer};
//!
//! # async fn run() -> folio_contact::ContactResult<()> {
//! let config = ContactConfig::new("me@example.com");
//! let relay = ContactRelay::new(config, Arc::new(LogMailer::default()));
//!
//! let payload = ContactPayload {
//!     name: Some("Ada".to_string()),
//!     email: Some("ada@example.com".to_string()),
//!     subject: None,
//!     body: Some("Hello!".to_string()),
//! };
//! relay.submit(payload).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod escape;
pub mod mailer;
mod message;
mod relay;
mod submission;

pub use config::ContactConfig;
pub use error::{ContactError, ContactResult, DeliveryStage, MailError, MailResult};
pub use escape::escape_html;
pub use mailer::{LogMailer, Mailer, ResendConfig, ResendMailer, SentEmail};
pub use message::{render_acknowledgement, render_notification, OutboundEmail};
pub use relay::{ContactRelay, Receipt};
pub use submission::{ContactPayload, ContactSubmission};
