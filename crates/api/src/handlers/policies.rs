//! Handlers for the `/policies` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cms_core::error::CoreError;
use cms_core::slug::resolve_slug;
use cms_core::status::{BINARY_STATUSES, STATUS_ACTIVE};
use cms_core::types::DbId;
use cms_core::validation::validate_input;
use cms_db::models::policy::{CreatePolicy, UpdatePolicy};
use cms_db::repositories::PolicyRepo;

use super::{check_status, not_found};
use crate::error::{unique_violation, AppError, AppResult};
use crate::extract::AppJson;
use crate::query::StatusFilter;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Policy";

/// Every policy needs a slug; a title with no usable characters is rejected.
fn policy_slug(slug: Option<&str>, title: &str) -> AppResult<String> {
    resolve_slug(slug, title).ok_or_else(|| {
        AppError::BadRequest("slug could not be derived from title; provide one".into())
    })
}

fn map_slug_conflict(slug: &str) -> impl FnOnce(sqlx::Error) -> AppError + '_ {
    move |err| match unique_violation(&err) {
        Some("uq_policies_slug") => {
            AppError::Core(CoreError::Conflict(format!("Policy slug '{slug}' is already in use")))
        }
        _ => AppError::Database(err),
    }
}

/// GET /api/policies
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<StatusFilter>,
) -> AppResult<impl IntoResponse> {
    let rows = PolicyRepo::list(&state.pool, filter.as_deref()).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/policies/active
pub async fn list_active(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = PolicyRepo::list(&state.pool, Some(STATUS_ACTIVE)).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/policies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = PolicyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;
    Ok(Json(DataResponse { data: row }))
}

/// POST /api/policies
///
/// A duplicate slug is a 409.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreatePolicy>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    check_status(input.status.as_deref(), BINARY_STATUSES)?;
    let slug = policy_slug(input.slug.as_deref(), &input.title)?;

    let row = PolicyRepo::create(&state.pool, &input, &slug)
        .await
        .map_err(map_slug_conflict(&slug))?;

    tracing::info!(policy_id = row.id, slug = %row.slug, "Policy created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: row })))
}

/// PUT /api/policies/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdatePolicy>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    check_status(input.status.as_deref(), BINARY_STATUSES)?;
    let slug = policy_slug(input.slug.as_deref(), &input.title)?;

    let row = PolicyRepo::update(&state.pool, id, &input, &slug)
        .await
        .map_err(map_slug_conflict(&slug))?
        .ok_or_else(|| not_found(ENTITY, id))?;

    tracing::info!(policy_id = id, slug = %row.slug, "Policy updated");

    Ok(Json(DataResponse { data: row }))
}

/// DELETE /api/policies/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !PolicyRepo::delete(&state.pool, id).await? {
        return Err(not_found(ENTITY, id));
    }

    tracing::info!(policy_id = id, "Policy deleted");

    Ok(StatusCode::NO_CONTENT)
}
