//! Route definitions for the `/policies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::policies;
use crate::state::AppState;

/// Routes mounted at `/policies`.
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
        .route("/", get(policies::list).post(policies::create))
        .route("/active", get(policies::list_active))
        .route(
            "/{id}",
            get(policies::get_by_id)
                .put(policies::update)
                .delete(policies::delete),
        )
}
