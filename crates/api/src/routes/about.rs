//! Route definitions for the singleton `/about` record.

use axum::routing::get;
use axum::Router;

use crate::handlers::about;
use crate::state::AppState;

/// Routes mounted at `/about`.
///
/// ```text
/// GET /  -> get
/// PUT /  -> upsert
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(about::get).put(about::upsert))
}
