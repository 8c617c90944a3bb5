//! Screening Engine - Batch driver
//!
//! Runs the four checks for each traveller, combines them, and assembles the
//! dispositions in input order.

use chrono::NaiveDate;
use kanadia_core::{CountryTable, Disposition, TravellerRecord, WatchlistEntry};
use serde::Serialize;

use crate::checks::{
    check_completeness, check_entry_reason, check_medical_advisory, check_watchlist, Finding,
};
use crate::clock::Clock;
use crate::config::ScreeningConfig;
use crate::decision::{combine, CheckResults};
use crate::error::ScreeningResult;

/// Result of screening one traveller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreeningReport {
    /// Position of the traveller in the input batch
    pub index: usize,
    /// The combined decision
    pub disposition: Disposition,
    /// Every check outcome, flagged or not
    pub checks: CheckResults,
}

impl ScreeningReport {
    /// Finding of the check that decided the disposition
    pub fn deciding_finding(&self) -> Option<&Finding> {
        self.checks.deciding().map(|(_, finding)| finding)
    }

    /// All findings, highest priority first
    pub fn findings(&self) -> Vec<&Finding> {
        self.checks.flagged().map(|(_, finding)| finding).collect()
    }
}

/// Main Screening Engine
///
/// Borrows the reference data for the duration of a run and never mutates it.
pub struct ScreeningEngine<'a> {
    config: ScreeningConfig,
    clock: &'a dyn Clock,
    countries: &'a CountryTable,
    watchlist: &'a [WatchlistEntry],
}

impl<'a> ScreeningEngine<'a> {
    /// Create an engine with the default configuration
    pub fn new(
        countries: &'a CountryTable,
        watchlist: &'a [WatchlistEntry],
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            config: ScreeningConfig::default(),
            clock,
            countries,
            watchlist,
        }
    }

    /// Replace the configuration after validating it
    pub fn with_config(mut self, config: ScreeningConfig) -> ScreeningResult<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Get the current configuration
    pub fn config(&self) -> &ScreeningConfig {
        &self.config
    }

    /// Run all four checks against one traveller
    ///
    /// Every check runs, so a reference-data fault in any of them fails the
    /// traveller even when another check would already reject it.
    pub fn evaluate(
        &self,
        traveller: &TravellerRecord,
        today: NaiveDate,
    ) -> ScreeningResult<CheckResults> {
        Ok(CheckResults {
            medical: check_medical_advisory(traveller, self.countries)?,
            completeness: check_completeness(traveller),
            entry_reason: check_entry_reason(traveller, self.countries, &self.config, today)?,
            watchlist: check_watchlist(traveller, self.watchlist),
        })
    }

    fn screen_at(
        &self,
        index: usize,
        traveller: &TravellerRecord,
        today: NaiveDate,
    ) -> ScreeningResult<ScreeningReport> {
        let checks = match self.evaluate(traveller, today) {
            Ok(checks) => checks,
            Err(e) => {
                tracing::error!(
                    index,
                    traveller = %traveller.display_name(),
                    error = %e,
                    "Traveller could not be screened"
                );
                return Err(e);
            }
        };
        let disposition = combine(&checks);

        match checks.deciding() {
            Some((kind, finding)) if disposition.is_blocking() => {
                tracing::warn!(
                    index,
                    traveller = %traveller.display_name(),
                    %disposition,
                    check = ?kind,
                    finding = %finding,
                    "Traveller not admitted"
                );
            }
            Some((kind, finding)) => {
                tracing::info!(
                    index,
                    traveller = %traveller.display_name(),
                    %disposition,
                    check = ?kind,
                    finding = %finding,
                    "Traveller referred"
                );
            }
            None => {
                tracing::debug!(
                    index,
                    traveller = %traveller.display_name(),
                    "Traveller accepted"
                );
            }
        }

        Ok(ScreeningReport {
            index,
            disposition,
            checks,
        })
    }

    /// Screen a single traveller against today's date
    pub fn screen(&self, traveller: &TravellerRecord) -> ScreeningResult<ScreeningReport> {
        self.screen_at(0, traveller, self.clock.today())
    }

    /// Screen a batch; the first reference-data fault aborts the whole batch
    ///
    /// "Today" is read once, so every traveller in the batch is judged
    /// against the same date.
    pub fn screen_batch(
        &self,
        travellers: &[TravellerRecord],
    ) -> ScreeningResult<Vec<ScreeningReport>> {
        let today = self.clock.today();
        tracing::info!(travellers = travellers.len(), %today, "Screening batch");

        let reports = travellers
            .iter()
            .enumerate()
            .map(|(index, traveller)| self.screen_at(index, traveller, today))
            .collect::<ScreeningResult<Vec<_>>>()?;

        tracing::info!(travellers = reports.len(), "Batch screened");
        Ok(reports)
    }

    /// Screen a batch, isolating reference-data faults to the traveller that hit them
    pub fn screen_each(
        &self,
        travellers: &[TravellerRecord],
    ) -> Vec<ScreeningResult<ScreeningReport>> {
        let today = self.clock.today();
        travellers
            .iter()
            .enumerate()
            .map(|(index, traveller)| self.screen_at(index, traveller, today))
            .collect()
    }
}

/// Decide one disposition per traveller, in input order
///
/// Fails the whole batch, with no partial results, if any traveller refers
/// to a country missing from the policy table.
pub fn decide(
    travellers: &[TravellerRecord],
    watchlist: &[WatchlistEntry],
    countries: &CountryTable,
    clock: &dyn Clock,
) -> ScreeningResult<Vec<Disposition>> {
    let engine = ScreeningEngine::new(countries, watchlist, clock);
    let reports = engine.screen_batch(travellers)?;
    Ok(reports.into_iter().map(|r| r.disposition).collect())
}
