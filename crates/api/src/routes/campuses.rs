//! Route definitions for the `/campuses` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::campuses;
use crate::state::AppState;

/// Routes mounted at `/campuses`.
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
        .route("/", get(campuses::list).post(campuses::create))
        .route("/active", get(campuses::list_active))
        .route(
            "/{id}",
            get(campuses::get_by_id)
                .put(campuses::update)
                .delete(campuses::delete),
        )
}
