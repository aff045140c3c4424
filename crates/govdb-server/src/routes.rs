//! # Governance data route
//!
//! `GET /api/governance` (aliased as `/data`) runs the shared pipeline over
//! the loaded dataset and answers with either the filtered dataset document
//! or a CSV download of every scalar field.

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use govdb_core::prelude::{
    to_delimited_text, Criteria, GovDb, SortDirection, SortSpec, FULL_COLUMNS,
};
use govdb_core::sort::DEFAULT_SORT_FIELD;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";
pub const CSV_DISPOSITION: &str = "attachment; filename=\"ai-governance-data.csv\"";
/// Responses may be reused for an hour.
pub const CACHE_CONTROL: &str = "public, max-age=3600";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/governance", get(governance))
        .route("/data", get(governance))
}

/// Query parameters of the governance route. Absent, empty or `all`
/// categorical values leave that dimension unconstrained; any other value
/// must equal the record's label exactly.
#[derive(Debug, Deserialize, Default)]
pub struct GovernanceParams {
    /// Exact country id or part of its name.
    pub country: Option<String>,
    pub region: Option<String>,
    pub approach: Option<String>,
    /// `json` (default) or `csv`. Anything else falls back to JSON.
    pub format: Option<String>,
    /// Dotted field path to sort by.
    pub sort: Option<String>,
    /// `asc` or `desc` (default).
    pub order: Option<String>,
}

impl GovernanceParams {
    pub fn criteria(&self) -> govdb_core::Result<Criteria> {
        let mut criteria = Criteria::new();
        criteria.country = self.country.clone();
        criteria.region = self.region.clone();
        criteria.approach = self.approach.clone();

        let sort = self.sort.as_deref().filter(|s| !s.trim().is_empty());
        let order = self.order.as_deref().filter(|s| !s.trim().is_empty());
        if sort.is_some() || order.is_some() {
            let direction = order
                .map(str::parse::<SortDirection>)
                .transpose()?
                .unwrap_or_default();
            criteria.sort = Some(SortSpec::new(
                sort.unwrap_or(DEFAULT_SORT_FIELD).trim(),
                direction,
            )?);
        }
        Ok(criteria)
    }

    pub fn wants_csv(&self) -> bool {
        self.format.as_deref() == Some("csv")
    }
}

/// GET /api/governance — filtered dataset as JSON or CSV.
async fn governance(
    State(state): State<AppState>,
    Query(params): Query<GovernanceParams>,
) -> Result<Response, AppError> {
    let criteria = params.criteria()?;
    let rows = state.db.query(&criteria)?;
    tracing::debug!(
        matched = rows.len(),
        csv = params.wants_csv(),
        "governance request"
    );

    if params.wants_csv() {
        let body = to_delimited_text(&rows, FULL_COLUMNS)?;
        return Ok((
            [
                (header::CONTENT_TYPE, CSV_CONTENT_TYPE),
                (header::CONTENT_DISPOSITION, CSV_DISPOSITION),
                (header::CACHE_CONTROL, CACHE_CONTROL),
            ],
            body,
        )
            .into_response());
    }

    let document = GovDb::new(rows.into_iter().cloned().collect());
    Ok(([(header::CACHE_CONTROL, CACHE_CONTROL)], Json(document)).into_response())
}
