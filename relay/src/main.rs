//! Folio relay server
//!
//! Serves the contact form endpoint and the case-study pages for the
//! portfolio site.
//!
//! Usage:
//!   CONTACT_TO=me@example.com RESEND_API_KEY=re_... folio-relay --port 3000
//!   folio-relay --contact-to me@example.com --dry-run
//!
//! The server is stateless; submissions are relayed and forgotten.

use anyhow::{Context, Result};
use clap::Parser;
use folio_relay::{build_router, AppState, Args, RelayConfig};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .compact()
        .init();

    info!("Folio relay starting...");
    let config = RelayConfig::from_args(args)?;
    if config.dry_run {
        warn!("Dry-run mode: contact emails will be logged, not sent");
    }
    if !config.content_dir.is_dir() {
        warn!(
            "Case study directory {:?} does not exist; content routes will fail",
            config.content_dir
        );
    }

    let state = AppState::from_config(&config)?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.addr))?;
    info!("HTTP server listening on {}", config.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Folio relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
