// crates/govdb-core/src/loader.rs

//! # Data Loader
//!
//! Handles the physical layer (file I/O, optional gzip) and parses the
//! dataset document. Every load path validates the record invariants before
//! handing the dataset out.

use crate::error::{GovError, Result};
use crate::model::{Country, GovDb};
use once_cell::sync::OnceCell;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

// Single in-process cache so the bundled dataset is parsed once per process.
static GOV_DB_CACHE: OnceCell<GovDb> = OnceCell::new();

impl GovDb {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "governance.json"
    }

    /// Load the bundled dataset.
    ///
    /// The file is resolved relative to the crate root (`CARGO_MANIFEST_DIR`)
    /// and parsed only on the first call; later calls clone the cached copy.
    pub fn load() -> Result<Self> {
        GOV_DB_CACHE
            .get_or_try_init(|| {
                let dir = Self::default_data_dir();
                let file = Self::default_dataset_filename();
                Self::load_from_path(dir.join(file), None)
            })
            .cloned()
    }

    /// Load a dataset from `path`, optionally keeping only the given ids
    /// (ASCII case-insensitive).
    ///
    /// With the `compact` feature, paths ending in `.gz` are decompressed.
    /// The file may hold either the dataset document (`{"countries": [...]}`)
    /// or a bare array of records.
    pub fn load_from_path(path: impl AsRef<Path>, filter: Option<&[&str]>) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = open_stream(path)?;
        let mut text = String::new();
        reader.read_to_string(&mut text)?;

        let mut db = Self::from_json_str(&text)?;
        if let Some(ids) = filter.filter(|ids| !ids.is_empty()) {
            db.countries
                .retain(|c| ids.iter().any(|id| c.id.eq_ignore_ascii_case(id.trim())));
            debug!(kept = db.countries.len(), "applied id filter");
        }

        info!(
            path = %path.display(),
            countries = db.countries.len(),
            "loaded governance dataset"
        );
        Ok(db)
    }

    /// Load the bundled dataset restricted to `ids`.
    pub fn load_filtered_by_id(ids: &[&str]) -> Result<Self> {
        let dir = Self::default_data_dir();
        let file = Self::default_dataset_filename();
        Self::load_from_path(dir.join(file), Some(ids))
    }

    /// Parse and validate a dataset from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let db = if text.trim_start().starts_with('[') {
            let countries: Vec<Country> =
                serde_json::from_str(text).map_err(|e| GovError::from_json(e, text))?;
            GovDb::new(countries)
        } else {
            serde_json::from_str(text).map_err(|e| GovError::from_json(e, text))?
        };
        db.validate()?;
        Ok(db)
    }

    /// Serialize the dataset document (`{"countries": [...]}`).
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Opens a file, buffers it, and wraps it in a gzip decoder when the
/// extension asks for one.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        GovError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);
    let gzipped = path.extension().is_some_and(|ext| ext == "gz");

    #[cfg(feature = "compact")]
    if gzipped {
        use flate2::read::GzDecoder;
        return Ok(Box::new(GzDecoder::new(reader)));
    }

    #[cfg(not(feature = "compact"))]
    if gzipped {
        return Err(GovError::NotFound(format!(
            "{} is gzip-compressed; enable the `compact` feature to read it",
            path.display()
        )));
    }

    Ok(Box::new(reader))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dataset_loads_and_validates() {
        let db = GovDb::load().unwrap();
        assert!(db.country_count() >= 10);
        db.validate().unwrap();
    }

    #[test]
    fn id_filter_is_case_insensitive() {
        let db = GovDb::load_filtered_by_id(&["EU", " us "]).unwrap();
        let ids: Vec<&str> = db.countries().iter().map(|c| c.id()).collect();
        assert_eq!(ids, ["us", "eu"]);
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = GovDb::load_from_path("/definitely/not/here.json", None).unwrap_err();
        assert!(matches!(err, GovError::NotFound(_)));
    }
}
