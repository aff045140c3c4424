// crates/govdb-core/src/filter.rs

//! # Predicate Engine
//!
//! [`Criteria`] collects every constraint of one query. Unset, empty and
//! `"all"` values impose no constraint; everything that is set is combined
//! with logical AND. A region or approach that is set must equal the
//! record's label exactly, so an unknown label matches nothing.

use crate::error::{GovError, Result};
use crate::model::{Approach, Country, Region};
use crate::path::{resolve, FieldPath, FieldValue};
use crate::sort::SortSpec;
use crate::text::contains_folded;
use crate::traits::NameMatch;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Sentinel filter value meaning "no constraint on this dimension".
pub const ALL: &str = "all";

/// Everything that drives one pipeline invocation.
///
/// # Examples
///
/// ```rust
/// use govdb_core::filter::Criteria;
/// use govdb_core::sort::SortSpec;
///
/// let criteria = Criteria::new()
///     .search("king")
///     .region("Europe")
///     .approach("all")
///     .sort_by(SortSpec::default());
/// assert!(criteria.approach.is_some());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Criteria {
    /// Case-insensitive substring of the country name.
    pub search_text: Option<String>,
    /// Exact id or name substring, as accepted by the data route.
    pub country: Option<String>,
    pub region: Option<String>,
    pub approach: Option<String>,
    pub extra_filters: Vec<FieldFilter>,
    pub sort: Option<SortSpec>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    pub fn country(mut self, id_or_name: impl Into<String>) -> Self {
        self.country = Some(id_or_name.into());
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn approach(mut self, approach: impl Into<String>) -> Self {
        self.approach = Some(approach.into());
        self
    }

    pub fn filter(mut self, filter: FieldFilter) -> Self {
        self.extra_filters.push(filter);
        self
    }

    pub fn sort_by(mut self, spec: SortSpec) -> Self {
        self.sort = Some(spec);
        self
    }
}

/// Comparison operator of a [`FieldFilter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    /// Folded substring match on the textual form.
    Contains,
}

impl FilterOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOp::Eq => "=",
            FilterOp::Ne => "!=",
            FilterOp::Lt => "<",
            FilterOp::Le => "<=",
            FilterOp::Gt => ">",
            FilterOp::Ge => ">=",
            FilterOp::Contains => "~",
        }
    }

    fn holds(self, field: &FieldValue<'_>, target: &FieldValue<'_>) -> bool {
        let ord = field.compare(target);
        match self {
            FilterOp::Eq => ord == Ordering::Equal,
            FilterOp::Ne => ord != Ordering::Equal,
            FilterOp::Lt => ord == Ordering::Less,
            FilterOp::Le => ord != Ordering::Greater,
            FilterOp::Gt => ord == Ordering::Greater,
            FilterOp::Ge => ord != Ordering::Less,
            FilterOp::Contains => contains_folded(&field.to_text(), &target.to_text()),
        }
    }
}

/// Right-hand side of a [`FieldFilter`].
#[derive(Clone, Debug, PartialEq)]
pub enum FilterValue {
    Number(f64),
    Text(String),
    Bool(bool),
}

impl FilterValue {
    /// Reads `true`/`false` as booleans, anything numeric as a number and
    /// the rest as text.
    pub fn infer(raw: &str) -> Self {
        match raw {
            "true" => FilterValue::Bool(true),
            "false" => FilterValue::Bool(false),
            _ => match raw.parse::<f64>() {
                Ok(n) if n.is_finite() => FilterValue::Number(n),
                _ => FilterValue::Text(raw.to_string()),
            },
        }
    }

    pub fn as_field_value(&self) -> FieldValue<'_> {
        match self {
            FilterValue::Number(n) => FieldValue::Number(*n),
            FilterValue::Text(s) => FieldValue::Text(s),
            FilterValue::Bool(b) => FieldValue::Bool(*b),
        }
    }
}

/// A `(field path, operator, value)` constraint, e.g. `score.overall>=80`.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldFilter {
    pub path: FieldPath,
    pub op: FilterOp,
    pub value: FilterValue,
}

impl FieldFilter {
    pub fn new(path: &str, op: FilterOp, value: FilterValue) -> Result<Self> {
        Ok(Self {
            path: FieldPath::parse(path)?,
            op,
            value,
        })
    }

    /// Evaluates the filter against one record.
    ///
    /// # Errors
    ///
    /// [`GovError::FieldNotFound`] if the path does not resolve.
    pub fn matches(&self, country: &Country) -> Result<bool> {
        let field = resolve(country, &self.path)?;
        Ok(self.op.holds(&field, &self.value.as_field_value()))
    }
}

// Two-character operators must be tried before their one-character prefixes.
const OPERATORS: [(&str, FilterOp); 8] = [
    ("==", FilterOp::Eq),
    ("!=", FilterOp::Ne),
    ("<=", FilterOp::Le),
    (">=", FilterOp::Ge),
    ("=", FilterOp::Eq),
    ("<", FilterOp::Lt),
    (">", FilterOp::Gt),
    ("~", FilterOp::Contains),
];

impl FromStr for FieldFilter {
    type Err = GovError;

    /// Parses `path<op>value`, where `<op>` is one of `= == != < <= > >= ~`.
    fn from_str(s: &str) -> Result<Self> {
        let start = s
            .find(['=', '!', '<', '>', '~'])
            .ok_or_else(|| GovError::InvalidFilter(format!("no operator in '{s}'")))?;
        let (path, rest) = s.split_at(start);
        let (token, op) = OPERATORS
            .iter()
            .find(|(token, _)| rest.starts_with(token))
            .ok_or_else(|| GovError::InvalidFilter(format!("bad operator in '{s}'")))?;
        let path = FieldPath::parse(path)
            .map_err(|_| GovError::InvalidFilter(format!("missing field path in '{s}'")))?;
        let value = FilterValue::infer(rest[token.len()..].trim());
        Ok(Self {
            path,
            op: *op,
            value,
        })
    }
}

impl fmt::Display for FieldFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.path,
            self.op.as_str(),
            self.value.as_field_value()
        )
    }
}

/// Criteria borrowed for repeated evaluation, with inactive dimensions
/// already dropped.
#[derive(Debug)]
pub struct Predicate<'c> {
    search: Option<&'c str>,
    country: Option<&'c str>,
    region: Option<&'c str>,
    approach: Option<&'c str>,
    filters: &'c [FieldFilter],
}

impl<'c> Predicate<'c> {
    pub fn new(criteria: &'c Criteria) -> Self {
        Self {
            search: non_empty(criteria.search_text.as_deref()),
            country: non_empty(criteria.country.as_deref()),
            region: categorical(criteria.region.as_deref(), "region", Region::parse_known),
            approach: categorical(
                criteria.approach.as_deref(),
                "approach",
                Approach::parse_known,
            ),
            filters: &criteria.extra_filters,
        }
    }

    /// `true` if `country` satisfies every active constraint.
    ///
    /// Field filters are evaluated first so that a bad field path surfaces
    /// on every non-empty collection rather than only when the cheaper
    /// constraints happen to pass.
    pub fn matches(&self, country: &Country) -> Result<bool> {
        for f in self.filters {
            if !f.matches(country)? {
                return Ok(false);
            }
        }
        if let Some(region) = self.region {
            if country.region.as_str() != region {
                return Ok(false);
            }
        }
        if let Some(approach) = self.approach {
            if country.approach.as_str() != approach {
                return Ok(false);
            }
        }
        if let Some(q) = self.search {
            if !country.name_contains(q) {
                return Ok(false);
            }
        }
        if let Some(wanted) = self.country {
            if country.id != wanted && !country.name_contains(wanted) {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

// Search text is used verbatim, surrounding whitespace included.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

// Blank and the exact sentinel "all" leave the dimension open. Any other
// value, including a wrong-case or unknown label, must match exactly.
fn categorical<'v, T>(
    value: Option<&'v str>,
    dimension: &str,
    parse: fn(&str) -> Option<T>,
) -> Option<&'v str> {
    let value = value.filter(|v| !v.trim().is_empty() && *v != ALL)?;
    if parse(value).is_none() {
        debug!(dimension, value, "filter value outside the known labels");
    }
    Some(value)
}

/// Returns the records matching `criteria`, in their original order.
///
/// The sort spec of `criteria` is ignored here; see [`crate::query::query`].
pub fn filter<'a>(records: &'a [Country], criteria: &Criteria) -> Result<Vec<&'a Country>> {
    let predicate = Predicate::new(criteria);
    let mut out = Vec::new();
    for c in records {
        if predicate.matches(c)? {
            out.push(c);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_character_operators() {
        let f: FieldFilter = "score.overall>=80".parse().unwrap();
        assert_eq!(f.path.as_str(), "score.overall");
        assert_eq!(f.op, FilterOp::Ge);
        assert_eq!(f.value, FilterValue::Number(80.0));

        let f: FieldFilter = "policy.status != Proposed".parse().unwrap();
        assert_eq!(f.op, FilterOp::Ne);
        assert_eq!(f.value, FilterValue::Text("Proposed".into()));
    }

    #[test]
    fn parses_booleans_and_contains() {
        let f: FieldFilter = "policy.enforcement.active=true".parse().unwrap();
        assert_eq!(f.value, FilterValue::Bool(true));
        let f: FieldFilter = "policy.key~act".parse().unwrap();
        assert_eq!(f.op, FilterOp::Contains);
    }

    #[test]
    fn rejects_filters_without_operator_or_path() {
        assert!(matches!(
            "score.overall".parse::<FieldFilter>(),
            Err(GovError::InvalidFilter(_))
        ));
        assert!(matches!(
            ">=80".parse::<FieldFilter>(),
            Err(GovError::InvalidFilter(_))
        ));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let f: FieldFilter = "score.innovation<70.5".parse().unwrap();
        assert_eq!(f.to_string(), "score.innovation<70.5");
        assert_eq!(f.to_string().parse::<FieldFilter>().unwrap(), f);
    }

    #[test]
    fn only_blank_and_the_sentinel_leave_a_dimension_open() {
        assert_eq!(categorical(None, "region", Region::parse_known), None);
        assert_eq!(categorical(Some(""), "region", Region::parse_known), None);
        assert_eq!(categorical(Some("  "), "region", Region::parse_known), None);
        assert_eq!(categorical(Some("all"), "region", Region::parse_known), None);
        assert_eq!(categorical(Some("ALL"), "region", Region::parse_known), Some("ALL"));
        assert_eq!(categorical(Some("asia"), "region", Region::parse_known), Some("asia"));
        assert_eq!(
            categorical(Some("Atlantis"), "region", Region::parse_known),
            Some("Atlantis")
        );
    }

    #[test]
    fn search_text_is_not_trimmed() {
        assert_eq!(non_empty(Some(" ")), Some(" "));
        assert_eq!(non_empty(Some("")), None);
    }
}
