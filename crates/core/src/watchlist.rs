//! Watchlist entries

use serde::{Deserialize, Serialize};

/// A person requiring secondary screening when matched by name or passport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchlistEntry {
    pub first_name: String,
    pub last_name: String,
    pub passport: String,
}

impl WatchlistEntry {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        passport: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            passport: passport.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_watchlist() {
        let json = r#"[
            { "last_name": "Smith", "first_name": "Jane", "passport": "9J8SF-2G5RZ-7QBDE-3MFRW-4J2SF" },
            { "last_name": "Ojo", "first_name": "Ken", "passport": "3LD3S-BA8XA-C0FT6-DD2HG-P1HYY" }
        ]"#;
        let entries: Vec<WatchlistEntry> = serde_json::from_str(json).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1], WatchlistEntry::new("Ken", "Ojo", "3LD3S-BA8XA-C0FT6-DD2HG-P1HYY"));
    }

    #[test]
    fn test_entry_requires_all_fields() {
        let json = r#"[{ "last_name": "Smith", "first_name": "Jane" }]"#;
        assert!(serde_json::from_str::<Vec<WatchlistEntry>>(json).is_err());
    }
}
