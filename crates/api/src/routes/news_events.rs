//! Route definitions for the `/news-events` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::news_events;
use crate::state::AppState;

/// Routes mounted at `/news-events`.
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
        .route("/", get(news_events::list).post(news_events::create))
        .route("/active", get(news_events::list_active))
        .route(
            "/{id}",
            get(news_events::get_by_id)
                .put(news_events::update)
                .delete(news_events::delete),
        )
}
