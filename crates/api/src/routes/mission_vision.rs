//! Route definitions for the `/mission-vision` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::mission_vision;
use crate::state::AppState;

/// Routes mounted at `/mission-vision`.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> create
/// GET    /active      -> list_active
/// GET    /{id}        -> get_by_id
/// PUT    /{id}        -> update
/// DELETE /{id}        -> delete
/// PUT    /{id}/toggle -> toggle
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(mission_vision::list).post(mission_vision::create))
        .route("/active", get(mission_vision::list_active))
        .route(
            "/{id}",
            get(mission_vision::get_by_id)
                .put(mission_vision::update)
                .delete(mission_vision::delete),
        )
        .route("/{id}/toggle", put(mission_vision::toggle))
}
