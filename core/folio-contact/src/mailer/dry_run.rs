use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tracing::info;

use super::{Mailer, SentEmail};
use crate::error::MailResult;
use crate::message::OutboundEmail;

/// Dry-run [`Mailer`]: logs each envelope and reports success without sending.
#[derive(Debug, Default)]
pub struct LogMailer {
    sent: AtomicU64,
}

impl LogMailer {
    /// Number of messages "sent" so far.
    pub fn sent_count(&self) -> u64 {
        self.sent.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl Mailer for LogMailer {
    fn provider_name(&self) -> &'static str {
        "dry-run"
    }

    async fn send(&self, email: &OutboundEmail) -> MailResult<SentEmail> {
        let n = self.sent.fetch_add(1, Ordering::Relaxed) + 1;
        info!(
            "[dry-run] email #{} from={:?} to={:?} reply_to={:?} subject={:?}",
            n, email.from, email.to, email.reply_to, email.subject
        );
        Ok(SentEmail {
            id: format!("dry-run-{n}"),
        })
    }
}
