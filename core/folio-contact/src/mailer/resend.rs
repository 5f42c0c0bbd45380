//! Resend REST API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Mailer, SentEmail};
use crate::error::{MailError, MailResult};
use crate::message::OutboundEmail;

/// Resend specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResendConfig {
    /// API key, sent as a bearer token.
    pub api_key: String,
    /// Base URL for the Resend API (e.g. `https://api.resend.com`).
    pub api_base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ResendConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base_url: "https://api.resend.com".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: Option<String>,
}

/// [`Mailer`] backed by the Resend HTTP API.
#[derive(Debug)]
pub struct ResendMailer {
    config: ResendConfig,
    client: Client,
}

impl ResendMailer {
    /// Creates a new client. Fails if the API key is empty.
    pub fn new(config: ResendConfig) -> MailResult<Self> {
        if config.api_key.is_empty() {
            return Err(MailError::Config("Resend API key is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.config.api_base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    fn provider_name(&self) -> &'static str {
        "Resend"
    }

    async fn send(&self, email: &OutboundEmail) -> MailResult<SentEmail> {
        debug!("Sending email via Resend: {:?} -> {:?}", email.subject, email.to);

        let response = self
            .client
            .post(self.emails_url())
            .bearer_auth(&self.config.api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&raw)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or(raw);
            return Err(MailError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let sent: SendResponse = response.json().await?;
        Ok(SentEmail { id: sent.id })
    }
}
