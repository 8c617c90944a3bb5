//! Traveller entry records
//!
//! Every field is optional: a record missing a key and a record holding an
//! empty value are both representable, so the completeness check (not the
//! parser) decides what an absent field means.
//!
//! A value of the wrong JSON type (`"first_name": 42`, `"home": "KAN"`) is
//! read as empty rather than failing the whole file, so the record is
//! rejected as incomplete and the rest of the batch is still decided.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Valid(T),
    Invalid(IgnoredAny),
}

/// `null` and absent read as `None`; a mistyped value reads as `T::default()`
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(
        Option::<Lenient<T>>::deserialize(deserializer)?.map(|value| match value {
            Lenient::Valid(value) => value,
            Lenient::Invalid(_) => T::default(),
        }),
    )
}

/// A place identified by country, region and city
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub country: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub region: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub city: Option<String>,
}

impl Location {
    pub fn new(
        country: impl Into<String>,
        region: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            country: Some(country.into()),
            region: Some(region.into()),
            city: Some(city.into()),
        }
    }

    /// Upper-cased country code, or `None` when absent or empty
    pub fn country_code(&self) -> Option<String> {
        self.country
            .as_deref()
            .filter(|code| !code.is_empty())
            .map(str::to_uppercase)
    }

    /// Name of the first required field that is absent or empty
    pub fn first_missing_field(&self) -> Option<&'static str> {
        [
            ("country", &self.country),
            ("region", &self.region),
            ("city", &self.city),
        ]
        .into_iter()
        .find(|(_, value)| value.as_deref().map_or(true, str::is_empty))
        .map(|(name, _)| name)
    }
}

/// Visa held by a traveller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visa {
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub code: Option<String>,
    /// Issue date, `YYYY-MM-DD`
    #[serde(
        default,
        rename = "date",
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub issued: Option<String>,
}

impl Visa {
    pub fn new(code: impl Into<String>, issued: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            issued: Some(issued.into()),
        }
    }
}

/// Declared reason for crossing the border
///
/// Parsed case-sensitively: only the exact literals `visit`, `transit` and
/// `returning` are known, anything else is `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntryReason {
    Visit,
    Transit,
    Returning,
    Other(String),
}

impl EntryReason {
    pub fn as_str(&self) -> &str {
        match self {
            EntryReason::Visit => "visit",
            EntryReason::Transit => "transit",
            EntryReason::Returning => "returning",
            EntryReason::Other(s) => s.as_str(),
        }
    }
}

impl From<&str> for EntryReason {
    fn from(s: &str) -> Self {
        match s {
            "visit" => EntryReason::Visit,
            "transit" => EntryReason::Transit,
            "returning" => EntryReason::Returning,
            other => EntryReason::Other(other.to_string()),
        }
    }
}

impl fmt::Display for EntryReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One traveller's entry record, as read from the entries file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravellerRecord {
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub birth_date: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub passport: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub entry_reason: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub home: Option<Location>,
    /// Where the traveller is arriving from
    #[serde(
        default,
        rename = "from",
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub origin: Option<Location>,
    /// Transit location, if the traveller came through a third country
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub via: Option<Location>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub visa: Option<Visa>,
}

impl TravellerRecord {
    /// Parsed entry reason, `None` when the field is absent
    pub fn entry_reason(&self) -> Option<EntryReason> {
        self.entry_reason.as_deref().map(EntryReason::from)
    }

    /// Upper-cased home country code, `None` when absent or empty
    pub fn home_country_code(&self) -> Option<String> {
        self.home.as_ref().and_then(Location::country_code)
    }

    /// "First Last" for log output; missing parts are skipped
    pub fn display_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
