//! Kanadia Loader - reference data files
//!
//! Reads the three JSON reference files the screening engine needs:
//! - countries: object keyed by country code → [`CountryPolicy`](kanadia_core::CountryPolicy)
//! - travellers: array of [`TravellerRecord`](kanadia_core::TravellerRecord)
//! - watchlist: array of [`WatchlistEntry`](kanadia_core::WatchlistEntry)
//!
//! A file that cannot be found or does not parse aborts the run before any
//! traveller is screened.

pub mod error;
pub mod reader;

pub use error::{LoadError, LoadResult, ReferenceKind};
pub use reader::{
    decide_files, load_countries, load_travellers, load_watchlist, ReferenceData, ReferencePaths,
};
