//! Handlers for the `/campuses` resource (multipart, optional `image`).

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cms_core::status::{BINARY_STATUSES, STATUS_ACTIVE};
use cms_core::types::DbId;
use cms_core::uploads::CAMPUS_IMAGE;
use cms_core::validation::validate_input;
use cms_db::models::campus::{CreateCampus, UpdateCampus};
use cms_db::repositories::CampusRepo;

use super::{check_status, not_found};
use crate::error::{AppError, AppResult};
use crate::query::StatusFilter;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::uploads::{accept, MultipartForm};

const ENTITY: &str = "Campus";
const IMAGE_FIELD: &str = "image";

/// GET /api/campuses
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<StatusFilter>,
) -> AppResult<impl IntoResponse> {
    let rows = CampusRepo::list(&state.pool, filter.as_deref()).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/campuses/active
pub async fn list_active(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = CampusRepo::list(&state.pool, Some(STATUS_ACTIVE)).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/campuses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = CampusRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;
    Ok(Json(DataResponse { data: row }))
}

/// POST /api/campuses
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let mut form = MultipartForm::parse(multipart, &[IMAGE_FIELD]).await?;
    let input = CreateCampus {
        name: form.required_text("name"),
        description: form.text("description"),
        location: form.text("location"),
        author_id: form.parse_field("author_id")?,
        author_name: form.text("author_name"),
        status: form.text("status"),
    };
    validate_input(&input)?;
    check_status(input.status.as_deref(), BINARY_STATUSES)?;
    let image = accept(&CAMPUS_IMAGE, form.take_file(IMAGE_FIELD))?;

    let stored = state.files.save(&CAMPUS_IMAGE, image).await?;
    let result = CampusRepo::create(&state.pool, &input, stored.as_deref())
        .await
        .map_err(AppError::from);
    let row = state.files.discard_on_error(result, stored.as_deref()).await?;

    tracing::info!(campus_id = row.id, name = %row.name, "Campus created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: row })))
}

/// PUT /api/campuses/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let mut form = MultipartForm::parse(multipart, &[IMAGE_FIELD]).await?;
    let input = UpdateCampus {
        name: form.required_text("name"),
        description: form.text("description"),
        location: form.text("location"),
        status: form.text("status"),
    };
    validate_input(&input)?;
    check_status(input.status.as_deref(), BINARY_STATUSES)?;
    let image = accept(&CAMPUS_IMAGE, form.take_file(IMAGE_FIELD))?;

    let previous = CampusRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;

    let stored = state.files.save(&CAMPUS_IMAGE, image).await?;
    let result = CampusRepo::update(&state.pool, id, &input, stored.as_deref())
        .await
        .map_err(AppError::from)
        .and_then(|row| row.ok_or_else(|| not_found(ENTITY, id)));
    let row = state.files.discard_on_error(result, stored.as_deref()).await?;

    state
        .files
        .remove_replaced(previous.image_path.as_deref(), stored.as_deref())
        .await;

    tracing::info!(campus_id = id, image_replaced = stored.is_some(), "Campus updated");

    Ok(Json(DataResponse { data: row }))
}

/// DELETE /api/campuses/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let image_path = CampusRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;

    if let Some(path) = image_path {
        state.files.remove_best_effort(&path).await;
    }

    tracing::info!(campus_id = id, "Campus deleted");

    Ok(StatusCode::NO_CONTENT)
}
