//! Handlers for the `/programmes` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cms_core::status::{BINARY_STATUSES, STATUS_ACTIVE};
use cms_core::types::DbId;
use cms_core::validation::validate_input;
use cms_core::vocab::PROGRAMME_LEVELS;
use cms_db::models::programme::{CreateProgramme, UpdateProgramme};
use cms_db::repositories::ProgrammeRepo;

use super::{check_choice, check_status, not_found};
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::query::StatusFilter;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Programme";

/// GET /api/programmes
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<StatusFilter>,
) -> AppResult<impl IntoResponse> {
    let rows = ProgrammeRepo::list(&state.pool, filter.as_deref()).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/programmes/active
pub async fn list_active(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = ProgrammeRepo::list(&state.pool, Some(STATUS_ACTIVE)).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/programmes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = ProgrammeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;
    Ok(Json(DataResponse { data: row }))
}

/// POST /api/programmes
///
/// A `faculty_id` that does not exist is rejected with 400.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateProgramme>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    check_choice("level", input.level.as_deref(), PROGRAMME_LEVELS)?;
    check_status(input.status.as_deref(), BINARY_STATUSES)?;

    let row = ProgrammeRepo::create(&state.pool, &input).await?;

    tracing::info!(programme_id = row.id, code = %row.code, "Programme created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: row })))
}

/// PUT /api/programmes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateProgramme>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    check_choice("level", input.level.as_deref(), PROGRAMME_LEVELS)?;
    check_status(input.status.as_deref(), BINARY_STATUSES)?;

    let row = ProgrammeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;

    tracing::info!(programme_id = id, "Programme updated");

    Ok(Json(DataResponse { data: row }))
}

/// DELETE /api/programmes/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !ProgrammeRepo::delete(&state.pool, id).await? {
        return Err(not_found(ENTITY, id));
    }

    tracing::info!(programme_id = id, "Programme deleted");

    Ok(StatusCode::NO_CONTENT)
}
