//! Route definitions for the `/staff` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::staff;
use crate::state::AppState;

/// Routes mounted at `/staff`.
///
/// ```text
/// GET    /                       -> list
/// POST   /                       -> create
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> update
/// DELETE /{id}                   -> delete
/// POST   /{id}/upload-photo      -> upload_photo
/// POST   /{id}/change-password   -> change_password
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(staff::list).post(staff::create))
        .route(
            "/{id}",
            get(staff::get_by_id)
                .put(staff::update)
                .delete(staff::delete),
        )
        .route("/{id}/upload-photo", post(staff::upload_photo))
        .route("/{id}/change-password", post(staff::change_password))
}
