//! Route definitions for the `/faculties` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::faculties;
use crate::state::AppState;

/// Routes mounted at `/faculties`.
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
        .route("/", get(faculties::list).post(faculties::create))
        .route("/active", get(faculties::list_active))
        .route(
            "/{id}",
            get(faculties::get_by_id)
                .put(faculties::update)
                .delete(faculties::delete),
        )
}
