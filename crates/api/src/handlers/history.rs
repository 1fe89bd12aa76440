//! Handlers for the `/history` timeline.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cms_core::status::{toggle_target, BINARY_STATUSES, STATUS_ACTIVE};
use cms_core::types::DbId;
use cms_core::validation::validate_input;
use cms_db::models::history::{CreateHistoryEntry, UpdateHistoryEntry};
use cms_db::models::ToggleStatus;
use cms_db::repositories::HistoryRepo;

use super::{check_status, not_found};
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::query::StatusFilter;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "HistoryEntry";

/// GET /api/history
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<StatusFilter>,
) -> AppResult<impl IntoResponse> {
    let rows = HistoryRepo::list(&state.pool, filter.as_deref()).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/history/active
pub async fn list_active(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = HistoryRepo::list(&state.pool, Some(STATUS_ACTIVE)).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/history/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = HistoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;
    Ok(Json(DataResponse { data: row }))
}

/// POST /api/history
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateHistoryEntry>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    check_status(input.status.as_deref(), BINARY_STATUSES)?;

    let row = HistoryRepo::create(&state.pool, &input).await?;

    tracing::info!(history_id = row.id, year = %row.year, "History entry created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: row })))
}

/// PUT /api/history/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateHistoryEntry>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    check_status(input.status.as_deref(), BINARY_STATUSES)?;

    let row = HistoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;

    tracing::info!(history_id = id, "History entry updated");

    Ok(Json(DataResponse { data: row }))
}

/// PUT /api/history/{id}/toggle
///
/// Plain status flip; other entries are left alone.
pub async fn toggle(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<ToggleStatus>,
) -> AppResult<impl IntoResponse> {
    let row = HistoryRepo::set_status(&state.pool, id, toggle_target(input.make_active))
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;

    tracing::info!(history_id = id, status = %row.status, "History entry toggled");

    Ok(Json(DataResponse { data: row }))
}

/// DELETE /api/history/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !HistoryRepo::delete(&state.pool, id).await? {
        return Err(not_found(ENTITY, id));
    }

    tracing::info!(history_id = id, "History entry deleted");

    Ok(StatusCode::NO_CONTENT)
}
