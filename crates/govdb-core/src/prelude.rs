//! govdb-rs prelude: bring common types and traits into scope for demos.

#![allow(unused_imports)]

pub use crate::common::DbStats;
pub use crate::error::{GovError, Result};
pub use crate::export::{
    parse_json, to_delimited_text, to_delimited_text_with, to_json, to_json_pretty, Column,
    COMPARISON_COLUMNS, FULL_COLUMNS,
};
pub use crate::filter::{filter, Criteria, FieldFilter, FilterOp, FilterValue, ALL};
pub use crate::model::{
    Approach, Country, Enforcement, GovDb, Investment, Policy, Region, Score,
};
pub use crate::path::{resolve, resolve_str, FieldPath, FieldValue};
pub use crate::query::{query, query_owned};
pub use crate::sort::{sort, sort_slice, SortDirection, SortSpec};
pub use crate::text::fold_key;
pub use crate::traits::{NameMatch, Record};
