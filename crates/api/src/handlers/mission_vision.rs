//! Handlers for the `/mission-vision` resource.
//!
//! At most one statement per kind is active. Every write that can activate a
//! row (create, update, toggle) runs the deactivate-others step inside one
//! transaction in [`MissionVisionRepo`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cms_core::status::{BINARY_STATUSES, STATUS_ACTIVE};
use cms_core::types::DbId;
use cms_core::validation::validate_input;
use cms_core::vocab::{validate_choice, MISSION_VISION_KINDS};
use cms_db::models::mission_vision::{CreateMissionVision, UpdateMissionVision};
use cms_db::models::ToggleStatus;
use cms_db::repositories::MissionVisionRepo;

use super::{check_choice, check_status, not_found};
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::query::StatusFilter;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "MissionVision";

/// GET /api/mission-vision
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<StatusFilter>,
) -> AppResult<impl IntoResponse> {
    let rows = MissionVisionRepo::list(&state.pool, filter.as_deref()).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/mission-vision/active
///
/// At most one entry per kind.
pub async fn list_active(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = MissionVisionRepo::list(&state.pool, Some(STATUS_ACTIVE)).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/mission-vision/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = MissionVisionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;
    Ok(Json(DataResponse { data: row }))
}

/// POST /api/mission-vision
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateMissionVision>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    validate_choice("kind", &input.kind, MISSION_VISION_KINDS)?;
    check_status(input.status.as_deref(), BINARY_STATUSES)?;

    let row = MissionVisionRepo::create(&state.pool, &input).await?;

    tracing::info!(
        mission_vision_id = row.id,
        kind = %row.kind,
        status = %row.status,
        "Mission/vision statement created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: row })))
}

/// PUT /api/mission-vision/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateMissionVision>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    check_choice("kind", input.kind.as_deref(), MISSION_VISION_KINDS)?;
    check_status(input.status.as_deref(), BINARY_STATUSES)?;

    let row = MissionVisionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;

    tracing::info!(mission_vision_id = id, status = %row.status, "Mission/vision statement updated");

    Ok(Json(DataResponse { data: row }))
}

/// PUT /api/mission-vision/{id}/toggle
pub async fn toggle(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<ToggleStatus>,
) -> AppResult<impl IntoResponse> {
    let row = MissionVisionRepo::toggle(&state.pool, id, input.make_active)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;

    tracing::info!(
        mission_vision_id = id,
        kind = %row.kind,
        make_active = input.make_active,
        "Mission/vision statement toggled",
    );

    Ok(Json(DataResponse { data: row }))
}

/// DELETE /api/mission-vision/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !MissionVisionRepo::delete(&state.pool, id).await? {
        return Err(not_found(ENTITY, id));
    }

    tracing::info!(mission_vision_id = id, "Mission/vision statement deleted");

    Ok(StatusCode::NO_CONTENT)
}
