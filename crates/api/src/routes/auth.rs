//! Route definitions for the `/auth` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /staff-login          -> staff_login
/// GET  /staff/{staff_id}     -> get_by_staff_id
/// GET  /me                   -> me (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/staff-login", post(auth::staff_login))
        .route("/staff/{staff_id}", get(auth::get_by_staff_id))
        .route("/me", get(auth::me))
}
