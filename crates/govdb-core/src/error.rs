// crates/govdb-core/src/error.rs

//! Error type shared by every stage of the pipeline.

use thiserror::Error;

/// Errors produced while loading, querying or exporting a dataset.
#[derive(Debug, Error)]
pub enum GovError {
    /// The dataset file could not be located.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A dotted field path did not resolve against a record.
    ///
    /// This signals that the record schema and the requested path have
    /// diverged, so it is fatal for the query that hit it.
    #[error("field not found: '{path}'")]
    FieldNotFound { path: String },

    /// Malformed JSON input. No records are returned when this occurs.
    #[error("deserialization error at line {line}, column {column}: {message} (near `{fragment}`)")]
    Deserialization {
        line: usize,
        column: usize,
        fragment: String,
        message: String,
    },

    /// JSON output could not be produced.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A filter expression or sort direction could not be parsed.
    #[error("invalid filter: {0}")]
    InvalidFilter(String),

    /// The dataset parsed but violates a record invariant.
    #[error("validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, GovError>;

/// Number of characters shown on each side of a JSON error position.
const FRAGMENT_RADIUS: usize = 24;

impl GovError {
    /// Builds a [`GovError::Deserialization`] from a `serde_json` error,
    /// capturing the text surrounding the offending position.
    pub(crate) fn from_json(err: serde_json::Error, input: &str) -> Self {
        let line = err.line();
        let column = err.column();
        GovError::Deserialization {
            line,
            column,
            fragment: fragment_at(input, line, column),
            message: err.to_string(),
        }
    }
}

fn fragment_at(input: &str, line: usize, column: usize) -> String {
    let Some(text) = input.lines().nth(line.saturating_sub(1)) else {
        return String::new();
    };
    let chars: Vec<char> = text.chars().collect();
    let pos = column.saturating_sub(1).min(chars.len());
    let start = pos.saturating_sub(FRAGMENT_RADIUS);
    let end = (pos + FRAGMENT_RADIUS).min(chars.len());
    chars[start..end].iter().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_points_at_the_failing_line() {
        let input = "[\n  {\"id\": \"fr\",, }\n]";
        let err = serde_json::from_str::<serde_json::Value>(input).unwrap_err();
        match GovError::from_json(err, input) {
            GovError::Deserialization { line, fragment, .. } => {
                assert_eq!(line, 2);
                assert!(fragment.contains("\"fr\""), "fragment was {fragment:?}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn fragment_of_missing_line_is_empty() {
        assert_eq!(fragment_at("abc", 5, 1), "");
    }
}
