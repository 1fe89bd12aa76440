//! Route definitions for the `/strategic-plan` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::strategic_plan;
use crate::state::AppState;

/// Routes mounted at `/strategic-plan`.
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
        .route("/", get(strategic_plan::list).post(strategic_plan::create))
        .route("/active", get(strategic_plan::list_active))
        .route(
            "/{id}",
            get(strategic_plan::get_by_id)
                .put(strategic_plan::update)
                .delete(strategic_plan::delete),
        )
}
