//! Route definitions for the `/history` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::history;
use crate::state::AppState;

/// Routes mounted at `/history`.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> create
/// GET    /active      -> list_active
/// GET    /{id}        -> get_by_id
/// PUT    /{id}        -> update
/// DELETE /{id}        -> delete
/// PUT    /{id}/toggle -> toggle
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(history::list).post(history::create))
        .route("/active", get(history::list_active))
        .route(
            "/{id}",
            get(history::get_by_id)
                .put(history::update)
                .delete(history::delete),
        )
        .route("/{id}/toggle", put(history::toggle))
}
