// crates/govdb-core/src/path.rs

//! # Field Accessor
//!
//! Resolves dotted field paths (`score.overall`, `policy.enforcement.active`)
//! against any [`Record`]. A path is parsed once into segments and then
//! interpreted level by level, so there are no per-path special cases and no
//! limit on nesting depth.

use crate::error::{GovError, Result};
use crate::text::collate;
use crate::traits::{Field, Record};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A parsed dotted field path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldPath {
    raw: String,
    segments: Vec<String>,
}

impl FieldPath {
    /// Parses `path`, rejecting empty paths and empty segments (`a..b`).
    pub fn parse(path: &str) -> Result<Self> {
        let raw = path.trim();
        let segments: Vec<String> = raw.split('.').map(str::to_owned).collect();
        if raw.is_empty() || segments.iter().any(|s| s.is_empty()) {
            return Err(GovError::FieldNotFound {
                path: path.to_string(),
            });
        }
        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// Builds a path from a literal known to be well-formed.
    pub(crate) fn from_trusted(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            segments: raw.split('.').map(str::to_owned).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    fn not_found(&self) -> GovError {
        GovError::FieldNotFound {
            path: self.raw.clone(),
        }
    }
}

impl FromStr for FieldPath {
    type Err = GovError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// A terminal field value: the tagged union the comparator works on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldValue<'a> {
    Number(f64),
    Text(&'a str),
    Bool(bool),
}

impl<'a> FieldValue<'a> {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Textual form of the value, as used for collation and export cells.
    ///
    /// Numbers use the shortest form that parses back to the same value
    /// (`80`, `82.5`), booleans render as `true`/`false`.
    pub fn to_text(&self) -> Cow<'a, str> {
        match *self {
            FieldValue::Text(s) => Cow::Borrowed(s),
            FieldValue::Number(n) => Cow::Owned(n.to_string()),
            FieldValue::Bool(b) => Cow::Borrowed(if b { "true" } else { "false" }),
        }
    }

    /// Orders two values.
    ///
    /// Two numbers compare numerically. Any other pairing, including a number
    /// against text, compares the textual forms by [`collate`].
    pub fn compare(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
            _ => collate(&self.to_text(), &other.to_text()),
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// Resolves `path` against `record`.
///
/// Fails with [`GovError::FieldNotFound`] when a segment is missing, when a
/// segment tries to index into a terminal value, or when the path stops on a
/// nested record instead of a value.
pub fn resolve<'a>(record: &'a dyn Record, path: &FieldPath) -> Result<FieldValue<'a>> {
    let mut current = Field::Record(record);
    for segment in path.segments() {
        current = match current {
            Field::Record(r) => r.field(segment),
            Field::Value(_) => None,
        }
        .ok_or_else(|| path.not_found())?;
    }
    match current {
        Field::Value(v) => Ok(v),
        Field::Record(_) => Err(path.not_found()),
    }
}

/// Parses `path` and resolves it in one step.
pub fn resolve_str<'a>(record: &'a dyn Record, path: &str) -> Result<FieldValue<'a>> {
    resolve(record, &FieldPath::parse(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Leaf;
    impl Record for Leaf {
        fn field(&self, name: &str) -> Option<Field<'_>> {
            match name {
                "depth" => Some(Field::Value(FieldValue::Number(3.0))),
                _ => None,
            }
        }
    }

    struct Middle(Leaf);
    impl Record for Middle {
        fn field(&self, name: &str) -> Option<Field<'_>> {
            match name {
                "leaf" => Some(Field::Record(&self.0)),
                "label" => Some(Field::Value(FieldValue::Text("mid"))),
                _ => None,
            }
        }
    }

    struct Root(Middle);
    impl Record for Root {
        fn field(&self, name: &str) -> Option<Field<'_>> {
            match name {
                "middle" => Some(Field::Record(&self.0)),
                _ => None,
            }
        }
    }

    fn root() -> Root {
        Root(Middle(Leaf))
    }

    #[test]
    fn resolves_arbitrary_depth() {
        let r = root();
        assert_eq!(
            resolve_str(&r, "middle.leaf.depth").unwrap(),
            FieldValue::Number(3.0)
        );
        assert_eq!(
            resolve_str(&r, "middle.label").unwrap(),
            FieldValue::Text("mid")
        );
    }

    #[test]
    fn missing_segment_is_field_not_found() {
        let r = root();
        let err = resolve_str(&r, "middle.nope").unwrap_err();
        assert!(matches!(err, GovError::FieldNotFound { ref path } if path == "middle.nope"));
    }

    #[test]
    fn indexing_into_a_value_fails() {
        let r = root();
        assert!(resolve_str(&r, "middle.label.length").is_err());
    }

    #[test]
    fn stopping_on_a_record_fails() {
        let r = root();
        assert!(resolve_str(&r, "middle.leaf").is_err());
    }

    #[test]
    fn empty_paths_are_rejected() {
        assert!(FieldPath::parse("").is_err());
        assert!(FieldPath::parse("score..overall").is_err());
        assert!(FieldPath::parse(".score").is_err());
    }

    #[test]
    fn mixed_values_compare_as_text() {
        // "80" < "N/A" textually, although a numeric reading is impossible.
        let n = FieldValue::Number(80.0);
        let t = FieldValue::Text("N/A");
        assert_eq!(n.compare(&t), Ordering::Less);
        assert_eq!(t.compare(&n), Ordering::Greater);
        // Textual fallback: "100" sorts before "95" when one side is text.
        assert_eq!(
            FieldValue::Text("100").compare(&FieldValue::Number(95.0)),
            Ordering::Less
        );
        assert_eq!(
            FieldValue::Number(100.0).compare(&FieldValue::Number(95.0)),
            Ordering::Greater
        );
    }

    #[test]
    fn numbers_render_in_shortest_form() {
        assert_eq!(FieldValue::Number(80.0).to_text(), "80");
        assert_eq!(FieldValue::Number(82.5).to_text(), "82.5");
        assert_eq!(FieldValue::Bool(true).to_text(), "true");
    }
}
