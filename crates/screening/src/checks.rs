//! The four independent traveller checks
//!
//! Every check uses the same polarity: [`CheckOutcome::Flagged`] means a
//! problem was found, [`CheckOutcome::Clear`] means none was. The checks do
//! not know about each other; ordering between them lives in
//! [`crate::decision`].

use chrono::NaiveDate;
use kanadia_core::{
    CountryPolicy, CountryTable, Disposition, EntryReason, Location, TravellerRecord,
    WatchlistEntry,
};
use serde::Serialize;
use std::fmt;

use crate::config::ScreeningConfig;
use crate::error::{ScreeningError, ScreeningResult};
use crate::validators::{valid_date_format, valid_passport_format, valid_visa};

/// Which location of a traveller record a country code came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationField {
    Home,
    Origin,
    Via,
}

impl LocationField {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationField::Home => "home",
            LocationField::Origin => "from",
            LocationField::Via => "via",
        }
    }
}

impl fmt::Display for LocationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which watchlist rule produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WatchlistRule {
    FullName,
    LastName,
    Passport,
}

/// The four checks, in decision priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    Medical,
    Completeness,
    EntryReason,
    Watchlist,
}

impl CheckKind {
    /// Highest priority first
    pub const PRIORITY: [CheckKind; 4] = [
        CheckKind::Medical,
        CheckKind::Completeness,
        CheckKind::EntryReason,
        CheckKind::Watchlist,
    ];

    /// Disposition a flagged outcome of this check leads to
    pub fn disposition(&self) -> Disposition {
        match self {
            CheckKind::Medical => Disposition::Quarantine,
            CheckKind::Completeness | CheckKind::EntryReason => Disposition::Reject,
            CheckKind::Watchlist => Disposition::Secondary,
        }
    }
}

/// Why a check flagged a traveller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "finding", rename_all = "snake_case")]
pub enum Finding {
    /// Origin or transit country has an active medical advisory
    MedicalAdvisory {
        field: LocationField,
        country: String,
        advisory: String,
    },

    /// A required field is absent or empty
    MissingField { field: String },

    /// Passport number does not match the expected pattern
    InvalidPassport,

    /// Birth date is not a `YYYY-MM-DD` calendar date
    InvalidBirthDate,

    /// Entry reason is absent or not one of the known literals
    UnknownEntryReason { reason: Option<String> },

    /// Visa required but not presented
    MissingVisa { reason: String, country: String },

    /// Home country code differs from the policy table's canonical code
    CanonicalCodeMismatch { home: String, canonical: String },

    /// Visa presented but malformed or outside the recency window
    InvalidVisa { reason: String },

    /// "Returning" traveller whose home is not the home nation
    NotHomeNation { home: String },

    /// Traveller matches a watchlist entry
    WatchlistMatch { rule: WatchlistRule },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::MedicalAdvisory {
                field,
                country,
                advisory,
            } => write!(f, "medical advisory {advisory} for {field} country {country}"),
            Finding::MissingField { field } => write!(f, "missing required field {field}"),
            Finding::InvalidPassport => write!(f, "invalid passport number"),
            Finding::InvalidBirthDate => write!(f, "invalid birth date"),
            Finding::UnknownEntryReason { reason: Some(reason) } => {
                write!(f, "unknown entry reason {reason:?}")
            }
            Finding::UnknownEntryReason { reason: None } => write!(f, "no entry reason"),
            Finding::MissingVisa { reason, country } => {
                write!(f, "{reason} from {country} requires a visa")
            }
            Finding::CanonicalCodeMismatch { home, canonical } => {
                write!(f, "home country {home} does not match policy code {canonical}")
            }
            Finding::InvalidVisa { reason } => write!(f, "invalid or expired {reason} visa"),
            Finding::NotHomeNation { home } => write!(f, "returning traveller from {home}"),
            Finding::WatchlistMatch { rule } => write!(f, "watchlist match on {rule:?}"),
        }
    }
}

/// Outcome of a single check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "finding", rename_all = "snake_case")]
pub enum CheckOutcome {
    Clear,
    Flagged(Finding),
}

impl CheckOutcome {
    pub fn is_flagged(&self) -> bool {
        matches!(self, CheckOutcome::Flagged(_))
    }

    pub fn finding(&self) -> Option<&Finding> {
        match self {
            CheckOutcome::Flagged(finding) => Some(finding),
            CheckOutcome::Clear => None,
        }
    }
}

fn lookup<'a>(
    countries: &'a CountryTable,
    code: &str,
    field: LocationField,
) -> ScreeningResult<&'a CountryPolicy> {
    countries
        .get(code)
        .ok_or_else(|| ScreeningError::UnknownCountryCode {
            code: code.to_string(),
            field,
        })
}

/// Medical risk: the origin or transit country has an active advisory
///
/// Absent or empty country codes are skipped. The transit country is only
/// looked up when the origin is clear.
pub fn check_medical_advisory(
    traveller: &TravellerRecord,
    countries: &CountryTable,
) -> ScreeningResult<CheckOutcome> {
    let legs = [
        (LocationField::Origin, traveller.origin.as_ref()),
        (LocationField::Via, traveller.via.as_ref()),
    ];

    for (field, location) in legs {
        let Some(code) = location.and_then(Location::country_code) else {
            continue;
        };
        let policy = lookup(countries, &code, field)?;
        if policy.has_medical_advisory() {
            return Ok(CheckOutcome::Flagged(Finding::MedicalAdvisory {
                field,
                country: code,
                advisory: policy.medical_advisory.clone(),
            }));
        }
    }

    Ok(CheckOutcome::Clear)
}

/// Completeness: every required field is present, non-empty and well-formed
///
/// Fields are checked in a fixed order and the first problem is reported.
pub fn check_completeness(traveller: &TravellerRecord) -> CheckOutcome {
    let missing = |field: &str| {
        CheckOutcome::Flagged(Finding::MissingField {
            field: field.to_string(),
        })
    };

    for (name, location) in [
        (LocationField::Origin, &traveller.origin),
        (LocationField::Home, &traveller.home),
    ] {
        let Some(location) = location else {
            return missing(name.as_str());
        };
        if let Some(sub) = location.first_missing_field() {
            return missing(&format!("{}.{}", name.as_str(), sub));
        }
    }

    match traveller.birth_date.as_deref() {
        None | Some("") => return missing("birth_date"),
        Some(date) if !valid_date_format(date) => {
            return CheckOutcome::Flagged(Finding::InvalidBirthDate)
        }
        Some(_) => {}
    }

    for (name, value) in [
        ("first_name", &traveller.first_name),
        ("last_name", &traveller.last_name),
    ] {
        if value.as_deref().map_or(true, str::is_empty) {
            return missing(name);
        }
    }

    match traveller.passport.as_deref() {
        None | Some("") => return missing("passport"),
        Some(passport) if !valid_passport_format(passport) => {
            return CheckOutcome::Flagged(Finding::InvalidPassport)
        }
        Some(_) => {}
    }

    if traveller.entry_reason.as_deref().map_or(true, str::is_empty) {
        return missing("entry_reason");
    }

    CheckOutcome::Clear
}

/// Watchlist: a case-insensitive match on full name, last name, or passport
///
/// A traveller without first name, last name and passport cannot be matched.
pub fn check_watchlist(traveller: &TravellerRecord, watchlist: &[WatchlistEntry]) -> CheckOutcome {
    let (Some(first), Some(last), Some(passport)) = (
        traveller.first_name.as_deref(),
        traveller.last_name.as_deref(),
        traveller.passport.as_deref(),
    ) else {
        return CheckOutcome::Clear;
    };

    let first = first.to_uppercase();
    let last = last.to_uppercase();
    let passport = passport.to_uppercase();

    for entry in watchlist {
        let last_matches = entry.last_name.to_uppercase() == last;

        let rule = if last_matches && entry.first_name.to_uppercase() == first {
            Some(WatchlistRule::FullName)
        } else if last_matches {
            Some(WatchlistRule::LastName)
        } else if entry.passport.to_uppercase() == passport {
            Some(WatchlistRule::Passport)
        } else {
            None
        };

        if let Some(rule) = rule {
            return CheckOutcome::Flagged(Finding::WatchlistMatch { rule });
        }
    }

    CheckOutcome::Clear
}

/// Entry reason: the traveller is entitled to enter for the stated reason
///
/// Records without a home country are left to the completeness check and
/// come back `Clear`.
pub fn check_entry_reason(
    traveller: &TravellerRecord,
    countries: &CountryTable,
    config: &ScreeningConfig,
    today: NaiveDate,
) -> ScreeningResult<CheckOutcome> {
    let Some(home) = traveller.home_country_code() else {
        return Ok(CheckOutcome::Clear);
    };

    let reason = match traveller.entry_reason() {
        Some(reason) => reason,
        None => {
            return Ok(CheckOutcome::Flagged(Finding::UnknownEntryReason {
                reason: None,
            }))
        }
    };

    match reason {
        EntryReason::Visit | EntryReason::Transit => {
            let policy = lookup(countries, &home, LocationField::Home)?;
            let required = match reason {
                EntryReason::Visit => policy.visitor_visa_required,
                _ => policy.transit_visa_required,
            };
            if !required {
                return Ok(CheckOutcome::Clear);
            }
            Ok(check_visa(traveller, &home, policy, &reason, config, today))
        }
        EntryReason::Returning => {
            if home == config.home_nation_code.to_uppercase() {
                Ok(CheckOutcome::Clear)
            } else {
                Ok(CheckOutcome::Flagged(Finding::NotHomeNation { home }))
            }
        }
        EntryReason::Other(other) => Ok(CheckOutcome::Flagged(Finding::UnknownEntryReason {
            reason: Some(other),
        })),
    }
}

fn check_visa(
    traveller: &TravellerRecord,
    home: &str,
    policy: &CountryPolicy,
    reason: &EntryReason,
    config: &ScreeningConfig,
    today: NaiveDate,
) -> CheckOutcome {
    let Some(visa) = traveller.visa.as_ref() else {
        return CheckOutcome::Flagged(Finding::MissingVisa {
            reason: reason.to_string(),
            country: home.to_string(),
        });
    };

    if !policy.code.eq_ignore_ascii_case(home) {
        return CheckOutcome::Flagged(Finding::CanonicalCodeMismatch {
            home: home.to_string(),
            canonical: policy.code.clone(),
        });
    }

    let code = visa.code.as_deref().unwrap_or_default();
    let issued = visa.issued.as_deref().unwrap_or_default();
    if valid_visa(code, issued, today, config.visa_validity()) {
        CheckOutcome::Clear
    } else {
        CheckOutcome::Flagged(Finding::InvalidVisa {
            reason: reason.to_string(),
        })
    }
}
