//! Terminal front end for the customer-retention backend.
//!
//! ```bash
//! retain overview
//! retain customers --search sarah --risk high --page 2
//! retain campaigns launch --limit 5 --risk high
//! retain --format json analytics
//! retain health --wait 30
//! ```

use std::sync::Arc;

use clap::{Parser, Subcommand};
use client::ApiClient;
use model::{ChurnRisk, LoyaltyTier, Settings};
use tracing_subscriber::EnvFilter;

mod commands;
mod components;
mod output;
mod screens;

use output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "retain")]
#[command(about = "Customer retention dashboard", version)]
struct Cli {
    /// Backend base URL; overrides RETAIN_API_BASE_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[arg(long, short, global = true, value_enum, default_value = "table")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Headline metrics and revenue trend
    Overview,
    /// Segment and revenue charts
    Analytics,
    /// Browse customers
    Customers {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        risk: Option<ChurnRisk>,
        #[arg(long)]
        tier: Option<LoyaltyTier>,
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,
        /// Open the detail view for one customer ID
        #[arg(long)]
        show: Option<String>,
    },
    /// Retention campaigns
    Campaigns {
        #[command(subcommand)]
        action: CampaignCommand,
    },
    /// Effective configuration and connection test
    Settings,
    /// Check backend health
    Health {
        /// Keep retrying with backoff for up to this many seconds
        #[arg(long)]
        wait: Option<u64>,
    },
}

#[derive(Debug, Subcommand)]
enum CampaignCommand {
    /// Service readiness
    Status,
    /// Past campaigns
    History,
    /// Send retention messages to at-risk customers
    Launch {
        #[arg(long, default_value_t = 10)]
        limit: u32,
        #[arg(long, default_value = "High")]
        risk: ChurnRisk,
    },
    /// Exercise the SMS test endpoint
    Test,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = load_settings(cli.base_url.as_deref())?;
    let client = Arc::new(ApiClient::from_settings(&settings)?);

    commands::run(cli.command, client, settings, cli.format).await
}

fn load_settings(base_url: Option<&str>) -> anyhow::Result<Settings> {
    let settings = Settings::from_env()?;
    Ok(match base_url {
        Some(url) => settings.with_base_url(url)?,
        None => settings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customers_args() {
        let cli = Cli::try_parse_from([
            "retain",
            "customers",
            "--search", "sarah",
            "--risk", "high",
            "--tier", "Gold",
            "--page", "2",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Table);
        match cli.command {
            Command::Customers { search, risk, tier, page, show } => {
                assert_eq!(search, "sarah");
                assert_eq!(risk, Some(ChurnRisk::High));
                assert_eq!(tier, Some(LoyaltyTier::Gold));
                assert_eq!(page, 2);
                assert!(show.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "retain",
            "overview",
            "--format", "json",
            "--base-url", "http://backend:9000",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.base_url.as_deref(), Some("http://backend:9000"));
    }

    #[test]
    fn test_launch_defaults() {
        let cli = Cli::try_parse_from(["retain", "campaigns", "launch"]).unwrap();
        match cli.command {
            Command::Campaigns {
                action: CampaignCommand::Launch { limit, risk },
            } => {
                assert_eq!(limit, 10);
                assert_eq!(risk, ChurnRisk::High);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_unknown_risk_fails() {
        let result = Cli::try_parse_from(["retain", "customers", "--risk", "extreme"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_subcommand_fails() {
        assert!(Cli::try_parse_from(["retain"]).is_err());
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(load_settings(Some("ftp://backend")).is_err());
    }
}
