pub mod about;
pub mod academic_calendar;
pub mod affiliates;
pub mod announcements;
pub mod auth;
pub mod campuses;
pub mod faculties;
pub mod health;
pub mod history;
pub mod leadership;
pub mod library;
pub mod mission_vision;
pub mod news_events;
pub mod policies;
pub mod programmes;
pub mod staff;
pub mod strategic_plan;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Every content resource shares the same shape: `GET /`, `POST /`,
/// `GET /active`, and `GET|PUT|DELETE /{id}`. Extras are listed below.
///
/// ```text
/// /auth/staff-login                    login (public)
/// /auth/staff/{staff_id}               profile by login ID
/// /auth/me                             caller's profile (Bearer token)
///
/// /staff                               list, create
/// /staff/{id}                          get, update, delete
/// /staff/{id}/upload-photo             replace profile photo (multipart)
/// /staff/{id}/change-password          change password
///
/// /announcements                       JSON
/// /news-events                         multipart, `image`
/// /faculties                           multipart, `image`
/// /campuses                            multipart, `image`
/// /leadership                          multipart, `image`
/// /affiliates                          multipart, `image`
/// /library                             multipart, `file`
/// /policies                            JSON, slug derived from title
/// /strategic-plan                      JSON
/// /mission-vision                      JSON
/// /mission-vision/{id}/toggle          single active row per kind
/// /history                             JSON
/// /history/{id}/toggle                 plain status flip
/// /academic-calendar                   JSON
/// /programmes                          JSON
///
/// /about                               get, upsert (singleton)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/staff", staff::router())
        .nest("/announcements", announcements::router())
        .nest("/news-events", news_events::router())
        .nest("/faculties", faculties::router())
        .nest("/campuses", campuses::router())
        .nest("/leadership", leadership::router())
        .nest("/affiliates", affiliates::router())
        .nest("/library", library::router())
        .nest("/policies", policies::router())
        .nest("/strategic-plan", strategic_plan::router())
        .nest("/mission-vision", mission_vision::router())
        .nest("/history", history::router())
        .nest("/academic-calendar", academic_calendar::router())
        .nest("/programmes", programmes::router())
        .nest("/about", about::router())
}
