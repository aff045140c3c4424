//! # Application State
//!
//! The dataset is loaded once at startup and shared read-only by every
//! handler through the `State` extractor. Queries only borrow it, so no lock
//! is needed.

use std::path::Path;
use std::sync::Arc;

use govdb_core::GovDb;

/// Shared state for the Axum application.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Arc<GovDb>,
}

impl AppState {
    pub fn new(db: GovDb) -> Self {
        Self { db: Arc::new(db) }
    }

    /// State over the dataset bundled with `govdb-core`.
    pub fn bundled() -> govdb_core::Result<Self> {
        Ok(Self::new(GovDb::load()?))
    }

    /// State over a dataset file (`.json`, or `.json.gz` with `compact`).
    pub fn from_path(path: impl AsRef<Path>) -> govdb_core::Result<Self> {
        Ok(Self::new(GovDb::load_from_path(path, None)?))
    }
}
