// crates/govdb-core/src/query.rs

//! # Pipeline
//!
//! `query = sort(filter(records))`. Filtering always runs first: the sort is
//! stable relative to the filtered order, and the filtered order is the
//! original order of the matching records.

use crate::error::Result;
use crate::filter::{filter, Criteria};
use crate::model::{Country, GovDb};
use crate::sort::sort;
use tracing::debug;

/// Filters `records` by `criteria` and, when the criteria carry a sort spec,
/// orders the matches.
///
/// The input is only borrowed; the result holds references into it.
///
/// # Examples
///
/// ```rust
/// use govdb_core::filter::Criteria;
/// use govdb_core::query::query;
/// use govdb_core::sort::SortSpec;
/// use govdb_core::GovDb;
///
/// let db = GovDb::load().unwrap();
/// let top = query(
///     db.countries(),
///     &Criteria::new().region("Europe").sort_by(SortSpec::default()),
/// )
/// .unwrap();
/// assert!(top.windows(2).all(|w| w[0].score.overall >= w[1].score.overall));
/// ```
pub fn query<'a>(records: &'a [Country], criteria: &Criteria) -> Result<Vec<&'a Country>> {
    let matched = filter(records, criteria)?;
    let matched_len = matched.len();
    let out = match &criteria.sort {
        Some(spec) => sort(matched, spec)?,
        None => matched,
    };
    debug!(
        total = records.len(),
        matched = matched_len,
        sort = criteria.sort.as_ref().map(|s| s.path.as_str()),
        "query complete"
    );
    Ok(out)
}

/// Like [`query`], but returns owned copies of the matching records.
pub fn query_owned(records: &[Country], criteria: &Criteria) -> Result<Vec<Country>> {
    Ok(query(records, criteria)?.into_iter().cloned().collect())
}

impl GovDb {
    /// Runs [`query`] over this dataset.
    pub fn query(&self, criteria: &Criteria) -> Result<Vec<&Country>> {
        query(&self.countries, criteria)
    }

    /// A new dataset holding only the query result, in result order.
    pub fn filtered(&self, criteria: &Criteria) -> Result<GovDb> {
        Ok(GovDb::new(query_owned(&self.countries, criteria)?))
    }
}
