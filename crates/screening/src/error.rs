//! Screening errors

use thiserror::Error;

use crate::checks::LocationField;

/// Errors from the Screening Engine
///
/// Bad field values inside a traveller record are never errors; they turn
/// into dispositions. Only reference-data faults surface here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScreeningError {
    #[error("Unknown country code {code:?} in traveller {field} location")]
    UnknownCountryCode { code: String, field: LocationField },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for screening operations
pub type ScreeningResult<T> = Result<T, ScreeningError>;
