//! Route definitions for the `/affiliates` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::affiliates;
use crate::state::AppState;

/// Routes mounted at `/affiliates`.
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
        .route("/", get(affiliates::list).post(affiliates::create))
        .route("/active", get(affiliates::list_active))
        .route(
            "/{id}",
            get(affiliates::get_by_id)
                .put(affiliates::update)
                .delete(affiliates::delete),
        )
}
