//! Decision combinator
//!
//! Reduces the four check outcomes to one disposition in strict priority:
//!
//! 1. Medical flagged      → Quarantine
//! 2. Completeness flagged → Reject
//! 3. Entry reason flagged → Reject
//! 4. Watchlist flagged    → Secondary
//! 5. otherwise            → Accept
//!
//! Because each check maps to a fixed disposition and the priority follows
//! the disposition lattice, the result always equals
//! `Disposition::aggregate` over the flagged checks.

use kanadia_core::Disposition;
use serde::Serialize;

use crate::checks::{CheckKind, CheckOutcome, Finding};

/// Outcomes of the four checks for one traveller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResults {
    pub medical: CheckOutcome,
    pub completeness: CheckOutcome,
    pub entry_reason: CheckOutcome,
    pub watchlist: CheckOutcome,
}

impl CheckResults {
    /// All outcomes clear
    pub fn clear() -> Self {
        Self {
            medical: CheckOutcome::Clear,
            completeness: CheckOutcome::Clear,
            entry_reason: CheckOutcome::Clear,
            watchlist: CheckOutcome::Clear,
        }
    }

    pub fn outcome(&self, kind: CheckKind) -> &CheckOutcome {
        match kind {
            CheckKind::Medical => &self.medical,
            CheckKind::Completeness => &self.completeness,
            CheckKind::EntryReason => &self.entry_reason,
            CheckKind::Watchlist => &self.watchlist,
        }
    }

    /// Flagged checks with their findings, highest priority first
    pub fn flagged(&self) -> impl Iterator<Item = (CheckKind, &Finding)> + '_ {
        CheckKind::PRIORITY
            .into_iter()
            .filter_map(|kind| self.outcome(kind).finding().map(|finding| (kind, finding)))
    }

    /// The check that decides the disposition, if any was flagged
    pub fn deciding(&self) -> Option<(CheckKind, &Finding)> {
        self.flagged().next()
    }
}

/// Reduce check outcomes to a disposition; first flagged check in priority order wins
pub fn combine(results: &CheckResults) -> Disposition {
    results
        .deciding()
        .map(|(kind, _)| kind.disposition())
        .unwrap_or(Disposition::Accept)
}
