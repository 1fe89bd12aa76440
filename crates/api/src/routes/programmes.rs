//! Route definitions for the `/programmes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::programmes;
use crate::state::AppState;

/// Routes mounted at `/programmes`.
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
        .route("/", get(programmes::list).post(programmes::create))
        .route("/active", get(programmes::list_active))
        .route(
            "/{id}",
            get(programmes::get_by_id)
                .put(programmes::update)
                .delete(programmes::delete),
        )
}
