// crates/govdb-core/src/sort.rs

//! # Sort Engine
//!
//! Stable ordering of records by the value at a field path. Keys are resolved
//! up front, so a path that does not exist fails the whole sort before any
//! reordering happens.

use crate::error::{GovError, Result};
use crate::path::{resolve, FieldPath};
use crate::traits::Record;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Field the comparison table is ordered by before the user picks one.
pub const DEFAULT_SORT_FIELD: &str = "score.overall";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Applies the direction to an ascending comparison result.
    #[inline]
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = GovError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(GovError::InvalidFilter(format!(
                "unknown sort direction '{other}' (expected asc or desc)"
            ))),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field path plus direction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SortSpec {
    pub path: FieldPath,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(path: &str, direction: SortDirection) -> Result<Self> {
        Ok(Self {
            path: FieldPath::parse(path)?,
            direction,
        })
    }

    pub fn ascending(path: &str) -> Result<Self> {
        Self::new(path, SortDirection::Ascending)
    }

    pub fn descending(path: &str) -> Result<Self> {
        Self::new(path, SortDirection::Descending)
    }

    pub fn toggle_direction(&mut self) {
        self.direction = self.direction.toggled();
    }
}

impl Default for SortSpec {
    /// `score.overall`, highest first.
    fn default() -> Self {
        Self {
            path: FieldPath::from_trusted(DEFAULT_SORT_FIELD),
            direction: SortDirection::Descending,
        }
    }
}

/// Orders `records` by the value at `spec.path`.
///
/// Numbers compare numerically; any pair involving a non-number compares
/// textually (see [`FieldValue::compare`](crate::path::FieldValue::compare)).
/// The sort is stable in both directions: records with equal keys keep their
/// input order.
///
/// # Errors
///
/// [`GovError::FieldNotFound`] if the path does not resolve on any record.
pub fn sort<'a, T: Record>(records: Vec<&'a T>, spec: &SortSpec) -> Result<Vec<&'a T>> {
    let mut keyed = records
        .into_iter()
        .map(|r| resolve(r, &spec.path).map(|key| (key, r)))
        .collect::<Result<Vec<_>>>()?;

    keyed.sort_by(|(a, _), (b, _)| spec.direction.apply(a.compare(b)));

    Ok(keyed.into_iter().map(|(_, r)| r).collect())
}

/// Borrowing variant of [`sort`] over a slice.
pub fn sort_slice<'a, T: Record>(records: &'a [T], spec: &SortSpec) -> Result<Vec<&'a T>> {
    sort(records.iter().collect(), spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_parses_short_and_long_forms() {
        assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Ascending);
        assert_eq!("DESC".parse::<SortDirection>().unwrap(), SortDirection::Descending);
        assert_eq!(
            " ascending ".parse::<SortDirection>().unwrap(),
            SortDirection::Ascending
        );
        assert!("up".parse::<SortDirection>().is_err());
    }

    #[test]
    fn apply_reverses_only_descending() {
        assert_eq!(SortDirection::Ascending.apply(Ordering::Less), Ordering::Less);
        assert_eq!(SortDirection::Descending.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortDirection::Descending.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn default_spec_is_overall_score_descending() {
        let spec = SortSpec::default();
        assert_eq!(spec.path.as_str(), "score.overall");
        assert_eq!(spec.direction, SortDirection::Descending);
    }

    #[test]
    fn toggle_flips_direction() {
        let mut spec = SortSpec::ascending("name").unwrap();
        spec.toggle_direction();
        assert_eq!(spec.direction, SortDirection::Descending);
    }
}
