//! Handlers for the `/academic-calendar` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cms_core::status::{BINARY_STATUSES, STATUS_ACTIVE};
use cms_core::types::DbId;
use cms_core::validation::{validate_date_range, validate_input};
use cms_db::models::academic_calendar::CalendarEntryInput;
use cms_db::repositories::AcademicCalendarRepo;

use super::{check_status, not_found};
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::query::StatusFilter;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "CalendarEntry";

fn check_input(input: &CalendarEntryInput) -> AppResult<()> {
    validate_input(input)?;
    validate_date_range(input.start_date, input.end_date)?;
    check_status(input.status.as_deref(), BINARY_STATUSES)?;
    Ok(())
}

/// GET /api/academic-calendar
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<StatusFilter>,
) -> AppResult<impl IntoResponse> {
    let rows = AcademicCalendarRepo::list(&state.pool, filter.as_deref()).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/academic-calendar/active
pub async fn list_active(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = AcademicCalendarRepo::list(&state.pool, Some(STATUS_ACTIVE)).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/academic-calendar/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = AcademicCalendarRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;
    Ok(Json(DataResponse { data: row }))
}

/// POST /api/academic-calendar
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CalendarEntryInput>,
) -> AppResult<impl IntoResponse> {
    check_input(&input)?;

    let row = AcademicCalendarRepo::create(&state.pool, &input).await?;

    tracing::info!(calendar_entry_id = row.id, kind = %row.kind, "Calendar entry created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: row })))
}

/// PUT /api/academic-calendar/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<CalendarEntryInput>,
) -> AppResult<impl IntoResponse> {
    check_input(&input)?;

    let row = AcademicCalendarRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;

    tracing::info!(calendar_entry_id = id, "Calendar entry updated");

    Ok(Json(DataResponse { data: row }))
}

/// DELETE /api/academic-calendar/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !AcademicCalendarRepo::delete(&state.pool, id).await? {
        return Err(not_found(ENTITY, id));
    }

    tracing::info!(calendar_entry_id = id, "Calendar entry deleted");

    Ok(StatusCode::NO_CONTENT)
}
