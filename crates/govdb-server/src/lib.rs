//! # govdb-server — HTTP surface for the AI-governance dataset
//!
//! | Route                 | Handler               |
//! |-----------------------|-----------------------|
//! | `GET /api/governance` | [`routes::router`]    |
//! | `GET /data`           | alias of the above    |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → CorsLayer → Handler
//! ```
//!
//! CORS allows any origin, methods `GET` and `OPTIONS`, and the
//! `Content-Type` request header.

pub mod error;
pub mod routes;
pub mod state;

use axum::http::{header, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .merge(routes::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
