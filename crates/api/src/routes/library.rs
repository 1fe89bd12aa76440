//! Route definitions for the `/library` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::library;
use crate::state::AppState;

/// Routes mounted at `/library`.
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
        .route("/", get(library::list).post(library::create))
        .route("/active", get(library::list_active))
        .route(
            "/{id}",
            get(library::get_by_id)
                .put(library::update)
                .delete(library::delete),
        )
}
