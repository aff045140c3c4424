// crates/govdb-core/src/model.rs

//! Record model for the governance dataset.
//!
//! JSON field names are camelCase (`regulatoryReadiness`), which is also the
//! naming used by dotted field paths.

use crate::common::DbStats;
use crate::error::{GovError, Result};
use crate::path::FieldValue;
use crate::traits::{Field, NameMatch, Record};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// Geographic region of a country.
///
/// The set is closed; any other label is kept verbatim in [`Region::Other`]
/// so it survives a round-trip, but it never matches a region filter.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Region {
    Europe,
    Americas,
    Asia,
    MiddleEast,
    Africa,
    Oceania,
    Other(String),
}

impl Region {
    pub const KNOWN: [Region; 6] = [
        Region::Europe,
        Region::Americas,
        Region::Asia,
        Region::MiddleEast,
        Region::Africa,
        Region::Oceania,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Region::Europe => "Europe",
            Region::Americas => "Americas",
            Region::Asia => "Asia",
            Region::MiddleEast => "Middle East",
            Region::Africa => "Africa",
            Region::Oceania => "Oceania",
            Region::Other(s) => s,
        }
    }

    /// Returns the member of the closed set labelled exactly `label`.
    pub fn parse_known(label: &str) -> Option<Region> {
        Self::KNOWN.into_iter().find(|r| r.as_str() == label)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Region::Other(_))
    }
}

impl From<String> for Region {
    fn from(s: String) -> Self {
        Region::parse_known(&s).unwrap_or(Region::Other(s))
    }
}

impl From<Region> for String {
    fn from(r: Region) -> Self {
        match r {
            Region::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall regulatory philosophy of a country.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Approach {
    Comprehensive,
    InnovationFirst,
    StateLed,
    Balanced,
    Other(String),
}

impl Approach {
    pub const KNOWN: [Approach; 4] = [
        Approach::Comprehensive,
        Approach::InnovationFirst,
        Approach::StateLed,
        Approach::Balanced,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Approach::Comprehensive => "comprehensive",
            Approach::InnovationFirst => "innovation-first",
            Approach::StateLed => "state-led",
            Approach::Balanced => "balanced",
            Approach::Other(s) => s,
        }
    }

    pub fn parse_known(label: &str) -> Option<Approach> {
        Self::KNOWN.into_iter().find(|a| a.as_str() == label)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Approach::Other(_))
    }
}

impl From<String> for Approach {
    fn from(s: String) -> Self {
        Approach::parse_known(&s).unwrap_or(Approach::Other(s))
    }
}

impl From<Approach> for String {
    fn from(a: Approach) -> Self {
        match a {
            Approach::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Approach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Enforcement {
    pub penalties: String,
    pub active: bool,
}

/// Headline policy of a country.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    /// Name of the headline policy instrument (e.g. "EU AI Act").
    pub key: String,
    pub status: String,
    pub philosophy: String,
    pub enforcement: Enforcement,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    /// Public AI investment in base currency units.
    pub total: u64,
    pub infrastructure: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub overall: f64,
    pub regulatory_readiness: f64,
    pub innovation: f64,
}

/// A country's AI-governance profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub flag: String,
    pub region: Region,
    pub approach: Approach,
    pub policy: Policy,
    pub investment: Investment,
    pub score: Score,
}

impl Country {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn approach(&self) -> &Approach {
        &self.approach
    }

    pub fn overall_score(&self) -> f64 {
        self.score.overall
    }
}

impl NameMatch for Country {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl Record for Country {
    fn field(&self, name: &str) -> Option<Field<'_>> {
        match name {
            "id" => Some(Field::Value(FieldValue::Text(&self.id))),
            "name" => Some(Field::Value(FieldValue::Text(&self.name))),
            "flag" => Some(Field::Value(FieldValue::Text(&self.flag))),
            "region" => Some(Field::Value(FieldValue::Text(self.region.as_str()))),
            "approach" => Some(Field::Value(FieldValue::Text(self.approach.as_str()))),
            "policy" => Some(Field::Record(&self.policy)),
            "investment" => Some(Field::Record(&self.investment)),
            "score" => Some(Field::Record(&self.score)),
            _ => None,
        }
    }
}

impl Record for Policy {
    fn field(&self, name: &str) -> Option<Field<'_>> {
        match name {
            "key" => Some(Field::Value(FieldValue::Text(&self.key))),
            "status" => Some(Field::Value(FieldValue::Text(&self.status))),
            "philosophy" => Some(Field::Value(FieldValue::Text(&self.philosophy))),
            "enforcement" => Some(Field::Record(&self.enforcement)),
            _ => None,
        }
    }
}

impl Record for Enforcement {
    fn field(&self, name: &str) -> Option<Field<'_>> {
        match name {
            "penalties" => Some(Field::Value(FieldValue::Text(&self.penalties))),
            "active" => Some(Field::Value(FieldValue::Bool(self.active))),
            _ => None,
        }
    }
}

impl Record for Investment {
    fn field(&self, name: &str) -> Option<Field<'_>> {
        match name {
            "total" => Some(Field::Value(FieldValue::Number(self.total as f64))),
            "infrastructure" => Some(Field::Value(FieldValue::Text(&self.infrastructure))),
            _ => None,
        }
    }
}

impl Record for Score {
    fn field(&self, name: &str) -> Option<Field<'_>> {
        let value = match name {
            "overall" => self.overall,
            "regulatoryReadiness" => self.regulatory_readiness,
            "innovation" => self.innovation,
            _ => return None,
        };
        Some(Field::Value(FieldValue::Number(value)))
    }
}

/// Top-level dataset document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GovDb {
    pub countries: Vec<Country>,
}

impl GovDb {
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    /// All countries in the dataset, in load order.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    /// Find a country by id, ASCII case-insensitive (e.g. "eu", "US").
    pub fn find_country_by_id(&self, id: &str) -> Option<&Country> {
        let id = id.trim();
        self.countries
            .iter()
            .find(|c| c.id.eq_ignore_ascii_case(id))
    }

    pub fn stats(&self) -> DbStats {
        let regions: BTreeSet<&str> = self.countries.iter().map(|c| c.region.as_str()).collect();
        let approaches: BTreeSet<&str> =
            self.countries.iter().map(|c| c.approach.as_str()).collect();
        DbStats {
            countries: self.countries.len(),
            regions: regions.len(),
            approaches: approaches.len(),
            active_enforcement: self
                .countries
                .iter()
                .filter(|c| c.policy.enforcement.active)
                .count(),
        }
    }

    /// Checks the record invariants the pipeline relies on.
    pub fn validate(&self) -> Result<()> {
        validate_countries(&self.countries)
    }
}

/// Checks that ids are unique and every numeric field is finite and
/// non-negative.
pub fn validate_countries(countries: &[Country]) -> Result<()> {
    let mut seen = HashSet::with_capacity(countries.len());
    for c in countries {
        if !seen.insert(c.id.as_str()) {
            return Err(GovError::Validation(format!("duplicate id '{}'", c.id)));
        }
        let scores = [
            ("score.overall", c.score.overall),
            ("score.regulatoryReadiness", c.score.regulatory_readiness),
            ("score.innovation", c.score.innovation),
        ];
        for (path, value) in scores {
            if !value.is_finite() || value < 0.0 {
                return Err(GovError::Validation(format!(
                    "{path} of '{}' must be a non-negative number, got {value}",
                    c.id
                )));
            }
        }
    }
    Ok(())
}
