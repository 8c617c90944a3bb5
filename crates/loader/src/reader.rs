//! JSON reference file reader

use kanadia_core::{CountryTable, Disposition, TravellerRecord, WatchlistEntry};
use kanadia_screening::{Clock, ScreeningEngine};
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{LoadError, LoadResult, ReferenceKind};

fn read_reference<T: DeserializeOwned>(kind: ReferenceKind, path: &Path) -> LoadResult<T> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            LoadError::ResourceNotFound {
                kind,
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                kind,
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    serde_json::from_str(&content).map_err(|source| LoadError::MalformedReferenceData {
        kind,
        path: path.to_path_buf(),
        source,
    })
}

/// Load the country policy table
pub fn load_countries(path: impl AsRef<Path>) -> LoadResult<CountryTable> {
    let countries: CountryTable = read_reference(ReferenceKind::Countries, path.as_ref())?;
    tracing::debug!(countries = countries.len(), path = %path.as_ref().display(), "Loaded countries");
    Ok(countries)
}

/// Load the traveller entry records, in file order
pub fn load_travellers(path: impl AsRef<Path>) -> LoadResult<Vec<TravellerRecord>> {
    let travellers: Vec<TravellerRecord> =
        read_reference(ReferenceKind::Travellers, path.as_ref())?;
    tracing::debug!(travellers = travellers.len(), path = %path.as_ref().display(), "Loaded travellers");
    Ok(travellers)
}

/// Load the watchlist
pub fn load_watchlist(path: impl AsRef<Path>) -> LoadResult<Vec<WatchlistEntry>> {
    let watchlist: Vec<WatchlistEntry> = read_reference(ReferenceKind::Watchlist, path.as_ref())?;
    tracing::debug!(entries = watchlist.len(), path = %path.as_ref().display(), "Loaded watchlist");
    Ok(watchlist)
}

/// Locations of the three reference files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferencePaths {
    pub travellers: PathBuf,
    pub watchlist: PathBuf,
    pub countries: PathBuf,
}

impl ReferencePaths {
    pub fn new(
        travellers: impl Into<PathBuf>,
        watchlist: impl Into<PathBuf>,
        countries: impl Into<PathBuf>,
    ) -> Self {
        Self {
            travellers: travellers.into(),
            watchlist: watchlist.into(),
            countries: countries.into(),
        }
    }
}

/// All reference data for one run
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub travellers: Vec<TravellerRecord>,
    pub watchlist: Vec<WatchlistEntry>,
    pub countries: CountryTable,
}

impl ReferenceData {
    /// Load countries, then travellers, then the watchlist; the first failure wins
    pub fn load(paths: &ReferencePaths) -> LoadResult<Self> {
        let countries = load_countries(&paths.countries)?;
        let travellers = load_travellers(&paths.travellers)?;
        let watchlist = load_watchlist(&paths.watchlist)?;

        Ok(Self {
            travellers,
            watchlist,
            countries,
        })
    }

    /// Engine over this data with the default configuration
    pub fn engine<'a>(&'a self, clock: &'a dyn Clock) -> ScreeningEngine<'a> {
        ScreeningEngine::new(&self.countries, &self.watchlist, clock)
    }
}

/// Load the three files and decide every traveller
pub fn decide_files(
    travellers: impl Into<PathBuf>,
    watchlist: impl Into<PathBuf>,
    countries: impl Into<PathBuf>,
    clock: &dyn Clock,
) -> LoadResult<Vec<Disposition>> {
    let paths = ReferencePaths::new(travellers, watchlist, countries);
    let data = ReferenceData::load(&paths)?;

    Ok(kanadia_screening::decide(
        &data.travellers,
        &data.watchlist,
        &data.countries,
        clock,
    )?)
}
