//! Handlers for the `/announcements` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cms_core::status::{ANNOUNCEMENT_STATUSES, STATUS_ACTIVE};
use cms_core::types::DbId;
use cms_core::validation::validate_input;
use cms_db::models::announcement::{CreateAnnouncement, UpdateAnnouncement};
use cms_db::repositories::AnnouncementRepo;

use super::{check_status, not_found};
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::query::StatusFilter;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Announcement";

/// GET /api/announcements
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<StatusFilter>,
) -> AppResult<impl IntoResponse> {
    let rows = AnnouncementRepo::list(&state.pool, filter.as_deref()).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/announcements/active
pub async fn list_active(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = AnnouncementRepo::list(&state.pool, Some(STATUS_ACTIVE)).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/announcements/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = AnnouncementRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;
    Ok(Json(DataResponse { data: row }))
}

/// POST /api/announcements
///
/// Requires headline, description and author_id. Status defaults to
/// `active` and category to `General`.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateAnnouncement>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    check_status(input.status.as_deref(), ANNOUNCEMENT_STATUSES)?;

    let row = AnnouncementRepo::create(&state.pool, &input).await?;

    tracing::info!(announcement_id = row.id, "Announcement created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: row })))
}

/// PUT /api/announcements/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateAnnouncement>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    check_status(input.status.as_deref(), ANNOUNCEMENT_STATUSES)?;

    let row = AnnouncementRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;

    tracing::info!(announcement_id = id, "Announcement updated");

    Ok(Json(DataResponse { data: row }))
}

/// DELETE /api/announcements/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !AnnouncementRepo::delete(&state.pool, id).await? {
        return Err(not_found(ENTITY, id));
    }

    tracing::info!(announcement_id = id, "Announcement deleted");

    Ok(StatusCode::NO_CONTENT)
}
