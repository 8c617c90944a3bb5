//! Kanadia Screening Engine
//!
//! Decides, for each traveller, one of Accept / Reject / Secondary / Quarantine.
//!
//! ## Pipeline
//!
//! ```text
//! TravellerRecord ──┬── check_medical_advisory ──┐
//!                   ├── check_completeness ──────┤
//!                   ├── check_entry_reason ──────┼──► combine ──► Disposition
//!                   └── check_watchlist ─────────┘
//! ```
//!
//! ## Key Components
//!
//! - [`validators`] - Date, passport and visa format checks
//! - [`checks`] - The four independent checks, each returning a [`CheckOutcome`]
//! - [`decision::combine`] - Fixed-priority reduction to a [`Disposition`](kanadia_core::Disposition)
//! - [`engine::ScreeningEngine`] - Batch driver over borrowed reference data
//! - [`clock::Clock`] - Injected source of "today" for visa recency

pub mod checks;
pub mod clock;
pub mod config;
pub mod decision;
pub mod engine;
pub mod error;
pub mod validators;

pub use checks::{CheckKind, CheckOutcome, Finding, LocationField, WatchlistRule};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::ScreeningConfig;
pub use decision::{combine, CheckResults};
pub use engine::{decide, ScreeningEngine, ScreeningReport};
pub use error::{ScreeningError, ScreeningResult};
