//! Route definitions for the `/leadership` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::leadership;
use crate::state::AppState;

/// Routes mounted at `/leadership`.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> create
/// GET    /active      -> list_active
/// GET    /{id}        -> get_by_id
/// PUT    /{id}        -> update
/// DELETE /{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(leadership::list).post(leadership::create))
        .route("/active", get(leadership::list_active))
        .route(
            "/{id}",
            get(leadership::get_by_id)
                .put(leadership::update)
                .delete(leadership::delete),
        )
}
