//! Kanadia Core - Domain types
//!
//! This crate contains the reference data shared by every Kanadia crate:
//! - `TravellerRecord`: one parsed entry record, every field optional
//! - `CountryPolicy` / `CountryTable`: per-country visa and medical policy
//! - `WatchlistEntry`: a person flagged for secondary screening
//! - `Disposition`: the final classification of a traveller

pub mod country;
pub mod disposition;
pub mod traveller;
pub mod watchlist;

pub use country::{CountryPolicy, CountryTable};
pub use disposition::Disposition;
pub use traveller::{EntryReason, Location, TravellerRecord, Visa};
pub use watchlist::WatchlistEntry;
