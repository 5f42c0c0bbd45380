//! Startup configuration.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use folio_contact::{ContactConfig, ResendConfig};

#[derive(Parser, Debug, Clone)]
#[command(name = "folio-relay")]
#[command(about = "Folio contact relay and case-study server")]
pub struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, env = "FOLIO_BIND", default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// HTTP port
    #[arg(short, long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Directory holding the case-study files
    #[arg(long, env = "CASE_STUDIES_PATH", default_value = "src/case-studies")]
    pub content_dir: PathBuf,

    /// Address that receives contact notifications
    #[arg(long, env = "CONTACT_TO")]
    pub contact_to: Option<String>,

    /// Sender used for outgoing emails
    #[arg(long, env = "CONTACT_FROM", default_value = ContactConfig::DEFAULT_SENDER)]
    pub contact_from: String,

    /// Resend API key
    #[arg(long, env = "RESEND_API_KEY", hide_env_values = true)]
    pub resend_api_key: Option<String>,

    /// Resend API base URL
    #[arg(long, env = "RESEND_API_URL", default_value = "https://api.resend.com")]
    pub resend_api_url: String,

    /// Timeout for each outbound email request, in seconds
    #[arg(long, default_value = "30")]
    pub send_timeout: u64,

    /// Log emails instead of sending them
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Validated process configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub addr: SocketAddr,
    pub content_dir: PathBuf,
    pub contact: ContactConfig,
    pub resend: ResendConfig,
    pub dry_run: bool,
}

impl RelayConfig {
    pub fn from_args(args: Args) -> Result<Self> {
        let operator_address = match args.contact_to {
            Some(to) if !to.trim().is_empty() => to,
            _ => bail!("CONTACT_TO (--contact-to) must be set"),
        };

        let api_key = args.resend_api_key.unwrap_or_default();
        if api_key.is_empty() && !args.dry_run {
            bail!("RESEND_API_KEY (--resend-api-key) must be set unless --dry-run is given");
        }

        Ok(Self {
            addr: SocketAddr::new(args.bind, args.port),
            content_dir: args.content_dir,
            contact: ContactConfig {
                operator_address,
                sender_address: args.contact_from,
                ..Default::default()
            },
            resend: ResendConfig {
                api_key,
                api_base_url: args.resend_api_url,
                timeout_secs: args.send_timeout,
            },
            dry_run: args.dry_run,
        })
    }
}
