// crates/govdb-core/src/export.rs

//! # Export
//!
//! Delimited text and JSON renderings of a record collection.
//!
//! Delimited export is best-effort per cell: a column whose path does not
//! resolve yields empty cells instead of failing the export. JSON export is
//! lossless and [`parse_json`] is its inverse.

use crate::error::{GovError, Result};
use crate::model::Country;
use crate::path::{resolve, FieldPath};
use crate::traits::Record;
use serde::Serialize;
use std::borrow::Cow;
use tracing::debug;

/// One output column: header label plus the field path feeding it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub label: Cow<'static, str>,
    pub path: Cow<'static, str>,
}

impl Column {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: Cow::Owned(label.into()),
            path: Cow::Owned(path.into()),
        }
    }

    pub const fn fixed(label: &'static str, path: &'static str) -> Self {
        Self {
            label: Cow::Borrowed(label),
            path: Cow::Borrowed(path),
        }
    }
}

/// Columns of the comparison table.
pub const COMPARISON_COLUMNS: &[Column] = &[
    Column::fixed("Country", "name"),
    Column::fixed("Key Policy", "policy.key"),
    Column::fixed("Philosophy", "policy.philosophy"),
    Column::fixed("Investment", "investment.total"),
    Column::fixed("Infrastructure", "investment.infrastructure"),
    Column::fixed("Penalties", "policy.enforcement.penalties"),
    Column::fixed("Overall Score", "score.overall"),
];

/// Every scalar field of a [`Country`], headed by its field path.
pub const FULL_COLUMNS: &[Column] = &[
    Column::fixed("id", "id"),
    Column::fixed("name", "name"),
    Column::fixed("flag", "flag"),
    Column::fixed("region", "region"),
    Column::fixed("approach", "approach"),
    Column::fixed("policy.key", "policy.key"),
    Column::fixed("policy.status", "policy.status"),
    Column::fixed("policy.philosophy", "policy.philosophy"),
    Column::fixed("policy.enforcement.penalties", "policy.enforcement.penalties"),
    Column::fixed("policy.enforcement.active", "policy.enforcement.active"),
    Column::fixed("investment.total", "investment.total"),
    Column::fixed("investment.infrastructure", "investment.infrastructure"),
    Column::fixed("score.overall", "score.overall"),
    Column::fixed("score.regulatoryReadiness", "score.regulatoryReadiness"),
    Column::fixed("score.innovation", "score.innovation"),
];

pub const DEFAULT_DELIMITER: u8 = b',';

/// Renders `records` as comma-separated text with a header row.
///
/// Cells containing the delimiter, a quote or a line break are quoted and
/// inner quotes doubled.
///
/// # Examples
///
/// ```rust
/// use govdb_core::export::{to_delimited_text, Column};
/// use govdb_core::GovDb;
///
/// let db = GovDb::load().unwrap();
/// let columns = [Column::new("Name", "name"), Column::new("Score", "score.overall")];
/// let csv = to_delimited_text(db.countries(), &columns).unwrap();
/// assert!(csv.starts_with("Name,Score\n"));
/// ```
pub fn to_delimited_text<R: Record>(records: &[R], columns: &[Column]) -> Result<String> {
    to_delimited_text_with(records, columns, DEFAULT_DELIMITER)
}

/// [`to_delimited_text`] with a caller-chosen single-byte delimiter.
pub fn to_delimited_text_with<R: Record>(
    records: &[R],
    columns: &[Column],
    delimiter: u8,
) -> Result<String> {
    let paths: Vec<Option<FieldPath>> = columns
        .iter()
        .map(|c| FieldPath::parse(&c.path).ok())
        .collect();

    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(columns.iter().map(|c| c.label.as_bytes()))?;

    let mut skipped = 0usize;
    for record in records {
        let row: Vec<Cow<'_, str>> = paths
            .iter()
            .map(|path| match path.as_ref().map(|p| resolve(record, p)) {
                Some(Ok(value)) => value.to_text(),
                _ => {
                    skipped += 1;
                    Cow::Borrowed("")
                }
            })
            .collect();
        wtr.write_record(row.iter().map(|c| c.as_bytes()))?;
    }
    if skipped > 0 {
        debug!(skipped, "export rendered unresolved cells as empty");
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| GovError::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| GovError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Serializes `records` as a JSON array, every field included.
pub fn to_json<T: Serialize>(records: &[T]) -> Result<String> {
    Ok(serde_json::to_string(records)?)
}

/// Pretty-printed variant of [`to_json`].
pub fn to_json_pretty<T: Serialize>(records: &[T]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Parses a JSON array of records.
///
/// # Errors
///
/// [`GovError::Deserialization`] naming the position and surrounding text of
/// the first problem. No records are returned in that case.
pub fn parse_json(text: &str) -> Result<Vec<Country>> {
    serde_json::from_str(text).map_err(|e| GovError::from_json(e, text))
}
