//! Handlers for the `/strategic-plan` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cms_core::slug::resolve_slug;
use cms_core::status::{BINARY_STATUSES, STATUS_ACTIVE};
use cms_core::types::DbId;
use cms_core::validation::validate_input;
use cms_db::models::strategic_plan::{CreateStrategicPlan, UpdateStrategicPlan};
use cms_db::repositories::StrategicPlanRepo;

use super::{check_status, not_found};
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::query::StatusFilter;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "StrategicPlan";

/// GET /api/strategic-plan
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<StatusFilter>,
) -> AppResult<impl IntoResponse> {
    let rows = StrategicPlanRepo::list(&state.pool, filter.as_deref()).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/strategic-plan/active
pub async fn list_active(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = StrategicPlanRepo::list(&state.pool, Some(STATUS_ACTIVE)).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/strategic-plan/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = StrategicPlanRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;
    Ok(Json(DataResponse { data: row }))
}

/// POST /api/strategic-plan
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateStrategicPlan>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    check_status(input.status.as_deref(), BINARY_STATUSES)?;
    let slug = resolve_slug(input.slug.as_deref(), &input.title);

    let row = StrategicPlanRepo::create(&state.pool, &input, slug.as_deref()).await?;

    tracing::info!(strategic_plan_id = row.id, "Strategic plan created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: row })))
}

/// PUT /api/strategic-plan/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateStrategicPlan>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    check_status(input.status.as_deref(), BINARY_STATUSES)?;
    let slug = resolve_slug(input.slug.as_deref(), &input.title);

    let row = StrategicPlanRepo::update(&state.pool, id, &input, slug.as_deref())
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;

    tracing::info!(strategic_plan_id = id, "Strategic plan updated");

    Ok(Json(DataResponse { data: row }))
}

/// DELETE /api/strategic-plan/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !StrategicPlanRepo::delete(&state.pool, id).await? {
        return Err(not_found(ENTITY, id));
    }

    tracing::info!(strategic_plan_id = id, "Strategic plan deleted");

    Ok(StatusCode::NO_CONTENT)
}
