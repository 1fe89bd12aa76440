//! Handlers for the `/faculties` resource (multipart, optional `image`).

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cms_core::status::{BINARY_STATUSES, STATUS_ACTIVE};
use cms_core::types::DbId;
use cms_core::uploads::FACULTY_IMAGE;
use cms_core::validation::validate_input;
use cms_db::models::faculty::{CreateFaculty, UpdateFaculty};
use cms_db::repositories::FacultyRepo;

use super::{check_status, not_found};
use crate::error::{AppError, AppResult};
use crate::query::StatusFilter;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::uploads::{accept, MultipartForm};

const ENTITY: &str = "Faculty";
const IMAGE_FIELD: &str = "image";

/// GET /api/faculties
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<StatusFilter>,
) -> AppResult<impl IntoResponse> {
    let rows = FacultyRepo::list(&state.pool, filter.as_deref()).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/faculties/active
pub async fn list_active(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = FacultyRepo::list(&state.pool, Some(STATUS_ACTIVE)).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/faculties/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = FacultyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;
    Ok(Json(DataResponse { data: row }))
}

/// POST /api/faculties
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let mut form = MultipartForm::parse(multipart, &[IMAGE_FIELD]).await?;
    let input = CreateFaculty {
        name: form.required_text("name"),
        description: form.required_text("description"),
        dean_name: form.text("dean_name"),
        contact_email: form.text("contact_email"),
        phone: form.text("phone"),
        location: form.text("location"),
        established_year: form.parse_field("established_year")?,
        author_id: form.parse_field("author_id")?,
        author_name: form.text("author_name"),
        status: form.text("status"),
    };
    validate_input(&input)?;
    check_status(input.status.as_deref(), BINARY_STATUSES)?;
    let image = accept(&FACULTY_IMAGE, form.take_file(IMAGE_FIELD))?;

    let stored = state.files.save(&FACULTY_IMAGE, image).await?;
    let result = FacultyRepo::create(&state.pool, &input, stored.as_deref())
        .await
        .map_err(AppError::from);
    let row = state.files.discard_on_error(result, stored.as_deref()).await?;

    tracing::info!(faculty_id = row.id, name = %row.name, "Faculty created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: row })))
}

/// PUT /api/faculties/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let mut form = MultipartForm::parse(multipart, &[IMAGE_FIELD]).await?;
    let input = UpdateFaculty {
        name: form.required_text("name"),
        description: form.required_text("description"),
        dean_name: form.text("dean_name"),
        contact_email: form.text("contact_email"),
        phone: form.text("phone"),
        location: form.text("location"),
        established_year: form.parse_field("established_year")?,
        status: form.text("status"),
    };
    validate_input(&input)?;
    check_status(input.status.as_deref(), BINARY_STATUSES)?;
    let image = accept(&FACULTY_IMAGE, form.take_file(IMAGE_FIELD))?;

    let previous = FacultyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;

    let stored = state.files.save(&FACULTY_IMAGE, image).await?;
    let result = FacultyRepo::update(&state.pool, id, &input, stored.as_deref())
        .await
        .map_err(AppError::from)
        .and_then(|row| row.ok_or_else(|| not_found(ENTITY, id)));
    let row = state.files.discard_on_error(result, stored.as_deref()).await?;

    state
        .files
        .remove_replaced(previous.image_path.as_deref(), stored.as_deref())
        .await;

    tracing::info!(faculty_id = id, image_replaced = stored.is_some(), "Faculty updated");

    Ok(Json(DataResponse { data: row }))
}

/// DELETE /api/faculties/{id}
///
/// Library items and programmes linked to the faculty are kept with their
/// `faculty_id` cleared.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let image_path = FacultyRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;

    if let Some(path) = image_path {
        state.files.remove_best_effort(&path).await;
    }

    tracing::info!(faculty_id = id, "Faculty deleted");

    Ok(StatusCode::NO_CONTENT)
}
