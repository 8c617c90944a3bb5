//! Kanadia CLI - Border screening from the command line
//!
//! Usage:
//! ```bash
//! kanadia decide --travellers entries.json --watchlist watchlist.json --countries countries.json
//! kanadia decide --travellers entries.json --watchlist watchlist.json --countries countries.json \
//!     --today 2014-06-01 --format json --explain
//! kanadia check-passport 6P294-42HR2-95PSF-93NFF-2TEWF
//! kanadia check-visa CFR6X-XSMVA 2013-09-22 --today 2014-06-01
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::{decide, validate};

/// Kanadia - Border screening of traveller entry records
#[derive(Parser)]
#[command(name = "kanadia")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decide a disposition for every traveller in a file
    Decide {
        /// Traveller entry records (JSON array)
        #[arg(long)]
        travellers: PathBuf,
        /// Watchlist (JSON array)
        #[arg(long)]
        watchlist: PathBuf,
        /// Country policies (JSON object keyed by country code)
        #[arg(long)]
        countries: PathBuf,
        /// Screening configuration (JSON)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Screen as of this date (YYYY-MM-DD) instead of the system date
        #[arg(long)]
        today: Option<String>,
        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
        /// Include the findings behind each disposition
        #[arg(long)]
        explain: bool,
    },

    /// Check a passport number's format
    CheckPassport {
        /// Passport number (e.g., 6P294-42HR2-95PSF-93NFF-2TEWF)
        passport: String,
    },

    /// Check a visa's format and recency
    CheckVisa {
        /// Visa code (e.g., CFR6X-XSMVA)
        code: String,
        /// Issue date (YYYY-MM-DD)
        date: String,
        /// Check as of this date (YYYY-MM-DD) instead of the system date
        #[arg(long)]
        today: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decide {
            travellers,
            watchlist,
            countries,
            config,
            today,
            format,
            explain,
        } => {
            let args = decide::DecideArgs {
                travellers,
                watchlist,
                countries,
                config,
                today,
                format,
                explain,
            };
            decide::run(&args)?;
        }

        Commands::CheckPassport { passport } => {
            validate::check_passport(&passport)?;
        }

        Commands::CheckVisa { code, date, today } => {
            validate::check_visa(&code, &date, today.as_deref())?;
        }
    }

    Ok(())
}
