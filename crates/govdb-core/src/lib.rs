// crates/govdb-core/src/lib.rs

//! govdb-core
//! ==========
//!
//! In-memory dataset of national AI-governance policies and the pipeline the
//! comparison table and the data route share: filter by search text and
//! categorical fields, sort by any dotted field path, export to delimited
//! text or JSON.
//!
//! ```rust
//! use govdb_core::prelude::*;
//!
//! let db = GovDb::load().unwrap();
//! let criteria = Criteria::new()
//!     .approach("comprehensive")
//!     .sort_by(SortSpec::default());
//! let rows = db.query(&criteria).unwrap();
//! let csv = to_delimited_text(&rows, COMPARISON_COLUMNS).unwrap();
//! assert!(csv.starts_with("Country,Key Policy"));
//! ```

pub mod common;
pub mod error;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod path;
pub mod prelude;
pub mod query;
pub mod sort;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::DbStats;
pub use crate::error::{GovError, Result};
pub use crate::model::{
    Approach, Country, Enforcement, GovDb, Investment, Policy, Region, Score,
};
