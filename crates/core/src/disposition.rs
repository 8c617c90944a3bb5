//! Disposition - the outcome for one traveller
//!
//! Dispositions form a lattice ordered by restrictiveness:
//! `Accept < Secondary < Reject < Quarantine`
//!
//! Aggregation: `max(all_dispositions)` - most restrictive wins

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum_macros::{AsRefStr, Display, EnumString};

/// Final classification of a traveller at the border
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, AsRefStr,
)]
pub enum Disposition {
    /// Admitted without further checks (lowest in lattice)
    Accept = 0,
    /// Sent to additional screening
    Secondary = 1,
    /// Refused entry
    Reject = 2,
    /// Held for medical assessment (highest in lattice)
    Quarantine = 3,
}

impl Disposition {
    /// All dispositions, least restrictive first
    pub const ALL: [Disposition; 4] = [
        Disposition::Accept,
        Disposition::Secondary,
        Disposition::Reject,
        Disposition::Quarantine,
    ];

    /// Check if the traveller is admitted
    pub fn is_accepted(&self) -> bool {
        matches!(self, Disposition::Accept)
    }

    /// Check if the traveller is turned away or held (Reject / Quarantine)
    pub fn is_blocking(&self) -> bool {
        matches!(self, Disposition::Reject | Disposition::Quarantine)
    }

    /// Aggregate multiple dispositions: take the most restrictive
    pub fn aggregate(dispositions: impl IntoIterator<Item = Disposition>) -> Disposition {
        dispositions
            .into_iter()
            .max()
            .unwrap_or(Disposition::Accept)
    }
}

impl PartialOrd for Disposition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Disposition {
    fn cmp(&self, other: &Self) -> Ordering {
        (*self as u8).cmp(&(*other as u8))
    }
}

impl Default for Disposition {
    fn default() -> Self {
        Disposition::Accept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disposition_ordering() {
        assert!(Disposition::Accept < Disposition::Secondary);
        assert!(Disposition::Secondary < Disposition::Reject);
        assert!(Disposition::Reject < Disposition::Quarantine);
    }

    #[test]
    fn test_blocking_dispositions() {
        assert!(!Disposition::Accept.is_blocking());
        assert!(!Disposition::Secondary.is_blocking());
        assert!(Disposition::Reject.is_blocking());
        assert!(Disposition::Quarantine.is_blocking());
    }

    #[test]
    fn test_aggregate_empty_is_accept() {
        assert_eq!(Disposition::aggregate(vec![]), Disposition::Accept);
    }

    #[test]
    fn test_aggregate_quarantine_wins() {
        let result = Disposition::aggregate(vec![
            Disposition::Secondary,
            Disposition::Quarantine,
            Disposition::Reject,
        ]);
        assert_eq!(result, Disposition::Quarantine);
    }

    #[test]
    fn test_display_and_parse() {
        for disposition in Disposition::ALL {
            let text = disposition.to_string();
            assert_eq!(text.parse::<Disposition>().unwrap(), disposition);
        }
        assert_eq!(Disposition::Secondary.as_ref(), "Secondary");
        assert!("accept".parse::<Disposition>().is_err());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&vec![Disposition::Accept, Disposition::Quarantine])
            .unwrap();
        assert_eq!(json, r#"["Accept","Quarantine"]"#);
    }
}
