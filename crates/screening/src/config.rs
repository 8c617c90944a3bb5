//! Screening configuration
//!
//! The home nation and the visa validity window are configurable via a JSON
//! file; missing fields fall back to the defaults below.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::{ScreeningError, ScreeningResult};

/// Designated home nation for "returning" travellers
pub const DEFAULT_HOME_NATION: &str = "KAN";

/// A visa is valid while fewer than this many days separate its issue date from today
pub const DEFAULT_VISA_VALIDITY_DAYS: i64 = 730;

/// Configuration for the Screening Engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningConfig {
    /// Country code travellers must hold to enter as "returning"
    #[serde(default = "default_home_nation_code")]
    pub home_nation_code: String,

    /// Visa recency window (in days, exclusive)
    #[serde(default = "default_visa_validity_days")]
    pub visa_validity_days: i64,
}

fn default_home_nation_code() -> String {
    DEFAULT_HOME_NATION.to_string()
}

fn default_visa_validity_days() -> i64 {
    DEFAULT_VISA_VALIDITY_DAYS
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            home_nation_code: default_home_nation_code(),
            visa_validity_days: default_visa_validity_days(),
        }
    }
}

impl ScreeningConfig {
    /// Load configuration from JSON file
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Reject settings the engine cannot work with
    pub fn validate(&self) -> ScreeningResult<()> {
        if self.home_nation_code.trim().is_empty() {
            return Err(ScreeningError::ConfigError(
                "home_nation_code must not be empty".to_string(),
            ));
        }
        if self.visa_validity_days <= 0 {
            return Err(ScreeningError::ConfigError(format!(
                "visa_validity_days must be positive, got {}",
                self.visa_validity_days
            )));
        }
        if Duration::try_days(self.visa_validity_days).is_none() {
            return Err(ScreeningError::ConfigError(format!(
                "visa_validity_days is out of range, got {}",
                self.visa_validity_days
            )));
        }
        Ok(())
    }

    /// Get the visa validity window as chrono Duration
    ///
    /// Saturates at `Duration::MAX` for windows too large to represent.
    pub fn visa_validity(&self) -> Duration {
        Duration::try_days(self.visa_validity_days).unwrap_or(Duration::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ScreeningConfig::default();

        assert_eq!(config.home_nation_code, "KAN");
        assert_eq!(config.visa_validity_days, 730);
        assert_eq!(config.visa_validity(), Duration::days(730));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_partial_json() {
        let json = r#"{ "visa_validity_days": 365 }"#;
        let config: ScreeningConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.visa_validity_days, 365);
        assert_eq!(config.home_nation_code, "KAN"); // default
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = ScreeningConfig {
            visa_validity_days: 0,
            ..ScreeningConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ScreeningError::ConfigError(_))
        ));

        let config = ScreeningConfig {
            home_nation_code: "  ".to_string(),
            ..ScreeningConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_validity_window() {
        let json = r#"{ "visa_validity_days": 9000000000000000 }"#;
        let config: ScreeningConfig = serde_json::from_str(json).unwrap();

        assert!(matches!(
            config.validate(),
            Err(ScreeningError::ConfigError(_))
        ));
        assert_eq!(config.visa_validity(), Duration::MAX);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "home_nation_code": "ELE" }}"#).unwrap();

        let config = ScreeningConfig::from_file(file.path()).unwrap();
        assert_eq!(config.home_nation_code, "ELE");
        assert_eq!(config.visa_validity_days, 730);
    }

    #[test]
    fn test_from_file_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = ScreeningConfig::from_file(file.path()).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
