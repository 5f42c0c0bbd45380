//! HTTP surface for the folio site: the contact relay endpoint and the
//! case-study pages.

mod api;
mod config;
mod pages;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use folio_contact::{ContactRelay, LogMailer, Mailer, ResendMailer};
use folio_content::CaseStudyStore;

pub use api::ApiResponse;
pub use config::{Args, RelayConfig};

/// Shared handler state. Both halves are read-only and cheap to clone.
#[derive(Clone, Debug)]
pub struct AppState {
    pub relay: ContactRelay,
    pub content: CaseStudyStore,
}

impl AppState {
    pub fn new(relay: ContactRelay, content: CaseStudyStore) -> Self {
        Self { relay, content }
    }

    /// Wires the relay and content store from a validated configuration.
    pub fn from_config(config: &RelayConfig) -> Result<Self> {
        let mailer: Arc<dyn Mailer> = if config.dry_run {
            Arc::new(LogMailer::default())
        } else {
            Arc::new(
                ResendMailer::new(config.resend.clone())
                    .context("Failed to create Resend client")?,
            )
        };

        Ok(Self::new(
            ContactRelay::new(config.contact.clone(), mailer),
            CaseStudyStore::new(&config.content_dir),
        ))
    }
}

/// Build the HTTP router with the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/contact", post(api::contact_handler))
        .route("/api/case-studies", get(api::list_case_studies))
        .route("/api/case-studies/{slug}", get(api::get_case_study))
        .route("/case-studies", get(pages::index_page))
        .route("/case-studies/{slug}", get(pages::case_study_page))
        .route("/healthz", get(api::health))
        .with_state(state)
}
