//! Country policy - visa requirements and medical advisories
//!
//! The policy table is keyed by country code. Keys are upper-cased when the
//! table is built and lookups upper-case the requested code, so matching is
//! case-insensitive on both sides.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Policy for a single country
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryPolicy {
    /// Canonical country code
    pub code: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Visitors from this country need a visa
    #[serde(deserialize_with = "deserialize_flag")]
    pub visitor_visa_required: bool,

    /// Travellers transiting from this country need a visa
    #[serde(deserialize_with = "deserialize_flag")]
    pub transit_visa_required: bool,

    /// Active medical advisory; empty means none
    #[serde(default)]
    pub medical_advisory: String,
}

impl CountryPolicy {
    /// Create a policy with no visa requirements and no advisory
    pub fn new(code: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            name: code.clone(),
            code,
            visitor_visa_required: false,
            transit_visa_required: false,
            medical_advisory: String::new(),
        }
    }

    pub fn with_visitor_visa(mut self) -> Self {
        self.visitor_visa_required = true;
        self
    }

    pub fn with_transit_visa(mut self) -> Self {
        self.transit_visa_required = true;
        self
    }

    pub fn with_medical_advisory(mut self, advisory: impl Into<String>) -> Self {
        self.medical_advisory = advisory.into();
        self
    }

    /// Returns true if the country has an active medical advisory
    pub fn has_medical_advisory(&self) -> bool {
        !self.medical_advisory.is_empty()
    }
}

/// Visa flags appear as `"0"`/`"1"` strings in the reference files, but
/// integers and booleans are accepted too.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Bool(bool),
    Int(i64),
    Text(String),
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match RawFlag::deserialize(deserializer)? {
        RawFlag::Bool(flag) => Ok(flag),
        RawFlag::Int(0) => Ok(false),
        RawFlag::Int(1) => Ok(true),
        RawFlag::Int(n) => Err(de::Error::custom(format!(
            "visa flag must be 0 or 1, got {n}"
        ))),
        RawFlag::Text(text) => match text.trim() {
            "0" => Ok(false),
            "1" => Ok(true),
            other => Err(de::Error::custom(format!(
                "visa flag must be \"0\" or \"1\", got {other:?}"
            ))),
        },
    }
}

/// Read-only lookup table of country policies
///
/// Building from a keyed map fails when two keys differ only by case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "HashMap<String, CountryPolicy>")]
pub struct CountryTable {
    policies: HashMap<String, CountryPolicy>,
}

impl CountryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a policy under its own canonical code
    pub fn insert(&mut self, policy: CountryPolicy) {
        self.policies.insert(policy.code.to_uppercase(), policy);
    }

    /// Look up a policy; the code is upper-cased first
    pub fn get(&self, code: &str) -> Option<&CountryPolicy> {
        self.policies.get(&code.to_uppercase())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// Codes of all countries with an active medical advisory, sorted
    pub fn advisory_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self
            .policies
            .iter()
            .filter(|(_, policy)| policy.has_medical_advisory())
            .map(|(code, _)| code.as_str())
            .collect();
        codes.sort_unstable();
        codes
    }
}

impl TryFrom<HashMap<String, CountryPolicy>> for CountryTable {
    type Error = String;

    fn try_from(raw: HashMap<String, CountryPolicy>) -> Result<Self, Self::Error> {
        let mut policies = HashMap::with_capacity(raw.len());
        for (code, policy) in raw {
            let key = code.to_uppercase();
            if policies.contains_key(&key) {
                return Err(format!("country code {key:?} is listed more than once"));
            }
            policies.insert(key, policy);
        }
        Ok(Self { policies })
    }
}

impl FromIterator<CountryPolicy> for CountryTable {
    fn from_iter<I: IntoIterator<Item = CountryPolicy>>(iter: I) -> Self {
        let mut table = CountryTable::new();
        for policy in iter {
            table.insert(policy);
        }
        table
    }
}
