//! Shared test helpers for relay tests.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use folio_contact::{MailError, MailResult, Mailer, OutboundEmail, SentEmail};

/// Mailer that records every message and can be told to fail a given call.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutboundEmail>>,
    /// 1-based index of the call that should fail, if any.
    fail_on: Option<usize>,
}

impl RecordingMailer {
    pub fn failing_on(call: usize) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_on: Some(call),
        }
    }

    /// Messages the mailer was asked to send, including the failed one.
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    fn provider_name(&self) -> &'static str {
        "recording"
    }

    async fn send(&self, email: &OutboundEmail) -> MailResult<SentEmail> {
        let call = {
            let mut sent = self.sent.lock().unwrap();
            sent.push(email.clone());
            sent.len()
        };
        if self.fail_on == Some(call) {
            return Err(MailError::Api {
                status: 500,
                message: "provider unavailable".to_string(),
            });
        }
        Ok(SentEmail {
            id: format!("msg-{call}"),
        })
    }
}
