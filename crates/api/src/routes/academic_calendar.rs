//! Route definitions for the `/academic-calendar` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::academic_calendar;
use crate::state::AppState;

/// Routes mounted at `/academic-calendar`.
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
        .route("/", get(academic_calendar::list).post(academic_calendar::create))
        .route("/active", get(academic_calendar::list_active))
        .route(
            "/{id}",
            get(academic_calendar::get_by_id)
                .put(academic_calendar::update)
                .delete(academic_calendar::delete),
        )
}
