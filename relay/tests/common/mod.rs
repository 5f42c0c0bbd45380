//! Shared helpers for HTTP API tests.

#![allow(dead_code)]

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use folio_contact::{
    ContactConfig, ContactRelay, MailError, MailResult, Mailer, OutboundEmail, SentEmail,
};
use folio_content::CaseStudyStore;
use folio_relay::{build_router, AppState};

/// Mailer that records every message and can be told to fail a given call.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutboundEmail>>,
    fail_on: Option<usize>,
}

impl RecordingMailer {
    pub fn failing_on(call: usize) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_on: Some(call),
        }
    }

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
                status: 503,
                message: "provider down".to_string(),
            });
        }
        Ok(SentEmail {
            id: format!("msg-{call}"),
        })
    }
}

/// Spin up the HTTP server on an OS-assigned port, returning the base URL.
pub async fn spawn_test_server(mailer: Arc<RecordingMailer>, content_dir: &Path) -> String {
    let relay = ContactRelay::new(ContactConfig::new("ops@example.com"), mailer);
    let state = AppState::new(relay, CaseStudyStore::new(content_dir));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}
