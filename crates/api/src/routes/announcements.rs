//! Route definitions for the `/announcements` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::announcements;
use crate::state::AppState;

/// Routes mounted at `/announcements`.
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
        .route("/", get(announcements::list).post(announcements::create))
        .route("/active", get(announcements::list_active))
        .route(
            "/{id}",
            get(announcements::get_by_id)
                .put(announcements::update)
                .delete(announcements::delete),
        )
}
