//! Loader errors

use kanadia_screening::ScreeningError;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which reference file an error concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    Countries,
    Travellers,
    Watchlist,
}

impl ReferenceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceKind::Countries => "countries",
            ReferenceKind::Travellers => "travellers",
            ReferenceKind::Watchlist => "watchlist",
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors from loading reference data
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{kind} file could not be found: {}", .path.display())]
    ResourceNotFound { kind: ReferenceKind, path: PathBuf },

    #[error("Error in the {kind} JSON file {}: {source}", .path.display())]
    MalformedReferenceData {
        kind: ReferenceKind,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read {kind} file {}: {source}", .path.display())]
    Io {
        kind: ReferenceKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Screening(#[from] ScreeningError),
}

impl LoadError {
    /// The reference file this error concerns, if any
    pub fn kind(&self) -> Option<ReferenceKind> {
        match self {
            LoadError::ResourceNotFound { kind, .. }
            | LoadError::MalformedReferenceData { kind, .. }
            | LoadError::Io { kind, .. } => Some(*kind),
            LoadError::Screening(_) => None,
        }
    }
}

/// Result type for loader operations
pub type LoadResult<T> = Result<T, LoadError>;
