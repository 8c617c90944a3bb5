//! Decide command

use anyhow::{Context, Result};
use kanadia_loader::{ReferenceData, ReferencePaths};
use kanadia_screening::{ScreeningConfig, ScreeningReport};
use serde::Serialize;
use std::path::PathBuf;

use super::clock_for;
use crate::OutputFormat;

pub struct DecideArgs {
    pub travellers: PathBuf,
    pub watchlist: PathBuf,
    pub countries: PathBuf,
    pub config: Option<PathBuf>,
    pub today: Option<String>,
    pub format: OutputFormat,
    pub explain: bool,
}

/// Load reference files, screen every traveller, print the dispositions
pub fn run(args: &DecideArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            let config = ScreeningConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?;
            tracing::debug!(path = %path.display(), ?config, "Loaded screening config");
            config
        }
        None => ScreeningConfig::default(),
    };
    let clock = clock_for(args.today.as_deref())?;

    let paths = ReferencePaths::new(&args.travellers, &args.watchlist, &args.countries);
    let data = ReferenceData::load(&paths).context("Failed to load reference data")?;

    let engine = data
        .engine(clock.as_ref())
        .with_config(config)
        .context("Invalid screening configuration")?;
    let reports = engine
        .screen_batch(&data.travellers)
        .context("Screening aborted")?;

    print!("{}", render(&reports, args.format, args.explain)?);
    Ok(())
}

#[derive(Serialize)]
struct ExplainedReport {
    index: usize,
    disposition: String,
    findings: Vec<String>,
}

/// Render reports as text lines or a JSON document
pub fn render(reports: &[ScreeningReport], format: OutputFormat, explain: bool) -> Result<String> {
    match (format, explain) {
        (OutputFormat::Text, false) => Ok(reports
            .iter()
            .map(|r| format!("{}\n", r.disposition))
            .collect()),
        (OutputFormat::Text, true) => Ok(reports
            .iter()
            .map(|r| match r.deciding_finding() {
                Some(finding) => format!("{}\t{}\t{}\n", r.index, r.disposition, finding),
                None => format!("{}\t{}\n", r.index, r.disposition),
            })
            .collect()),
        (OutputFormat::Json, false) => {
            let dispositions: Vec<_> = reports.iter().map(|r| r.disposition).collect();
            Ok(serde_json::to_string_pretty(&dispositions)? + "\n")
        }
        (OutputFormat::Json, true) => {
            let explained: Vec<ExplainedReport> = reports
                .iter()
                .map(|r| ExplainedReport {
                    index: r.index,
                    disposition: r.disposition.to_string(),
                    findings: r.findings().iter().map(|f| f.to_string()).collect(),
                })
                .collect();
            Ok(serde_json::to_string_pretty(&explained)? + "\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kanadia_core::Disposition;
    use kanadia_screening::{CheckOutcome, CheckResults, Finding, WatchlistRule};

    fn reports() -> Vec<ScreeningReport> {
        let mut flagged = CheckResults::clear();
        flagged.watchlist = CheckOutcome::Flagged(Finding::WatchlistMatch {
            rule: WatchlistRule::LastName,
        });

        vec![
            ScreeningReport {
                index: 0,
                disposition: Disposition::Accept,
                checks: CheckResults::clear(),
            },
            ScreeningReport {
                index: 1,
                disposition: Disposition::Secondary,
                checks: flagged,
            },
        ]
    }

    #[test]
    fn test_text_output() {
        let text = render(&reports(), OutputFormat::Text, false).unwrap();
        assert_eq!(text, "Accept\nSecondary\n");
    }

    #[test]
    fn test_text_explain() {
        let text = render(&reports(), OutputFormat::Text, true).unwrap();
        assert_eq!(text, "0\tAccept\n1\tSecondary\twatchlist match on LastName\n");
    }

    #[test]
    fn test_json_output() {
        let json = render(&reports(), OutputFormat::Json, false).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, vec!["Accept", "Secondary"]);
    }

    #[test]
    fn test_json_explain() {
        let json = render(&reports(), OutputFormat::Json, true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[1]["disposition"], "Secondary");
        assert_eq!(parsed[1]["findings"][0], "watchlist match on LastName");
        assert!(parsed[0]["findings"].as_array().unwrap().is_empty());
    }
}
