//! Handlers for the `/library` resource (books and past papers).
//!
//! Create and update take `multipart/form-data` with an optional `file` part
//! holding a PDF or Word document.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cms_core::status::{BINARY_STATUSES, STATUS_ACTIVE};
use cms_core::types::DbId;
use cms_core::uploads::LIBRARY_DOCUMENT;
use cms_core::validation::validate_input;
use cms_core::vocab::{validate_choice, LIBRARY_KINDS, LIBRARY_LEVELS};
use cms_db::models::library::LibraryItemInput;
use cms_db::repositories::LibraryRepo;

use super::{check_choice, check_status, not_found};
use crate::error::{AppError, AppResult};
use crate::query::StatusFilter;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::uploads::{accept, MultipartForm};

const ENTITY: &str = "LibraryItem";
const FILE_FIELD: &str = "file";

/// Build and validate the shared create/update DTO from the text parts.
fn read_input(form: &MultipartForm) -> AppResult<LibraryItemInput> {
    let input = LibraryItemInput {
        title: form.required_text("title"),
        kind: form.text("kind"),
        author: form.text("author"),
        isbn: form.text("isbn"),
        year: form.parse_field("year")?,
        course: form.text("course"),
        subject: form.text("subject"),
        faculty_id: form.parse_field("faculty_id")?,
        faculty_name: form.text("faculty_name"),
        level: form.required_text("level"),
        description: form.text("description"),
        created_by: form.text("created_by"),
        status: form.text("status"),
    };
    validate_input(&input)?;
    validate_choice("level", &input.level, LIBRARY_LEVELS)?;
    check_choice("kind", input.kind.as_deref(), LIBRARY_KINDS)?;
    check_status(input.status.as_deref(), BINARY_STATUSES)?;
    Ok(input)
}

/// GET /api/library
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<StatusFilter>,
) -> AppResult<impl IntoResponse> {
    let rows = LibraryRepo::list(&state.pool, filter.as_deref()).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/library/active
pub async fn list_active(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = LibraryRepo::list(&state.pool, Some(STATUS_ACTIVE)).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/library/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = LibraryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;
    Ok(Json(DataResponse { data: row }))
}

/// POST /api/library
///
/// An unknown `faculty_id` is a 400 (foreign key violation); the stored
/// document is removed again in that case.
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let mut form = MultipartForm::parse(multipart, &[FILE_FIELD]).await?;
    let input = read_input(&form)?;
    let document = accept(&LIBRARY_DOCUMENT, form.take_file(FILE_FIELD))?;

    let stored = state.files.save(&LIBRARY_DOCUMENT, document).await?;
    let result = LibraryRepo::create(&state.pool, &input, stored.as_deref())
        .await
        .map_err(AppError::from);
    let row = state.files.discard_on_error(result, stored.as_deref()).await?;

    tracing::info!(library_item_id = row.id, kind = %row.kind, "Library item created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: row })))
}

/// PUT /api/library/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let mut form = MultipartForm::parse(multipart, &[FILE_FIELD]).await?;
    let input = read_input(&form)?;
    let document = accept(&LIBRARY_DOCUMENT, form.take_file(FILE_FIELD))?;

    let previous = LibraryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;

    let stored = state.files.save(&LIBRARY_DOCUMENT, document).await?;
    let result = LibraryRepo::update(&state.pool, id, &input, stored.as_deref())
        .await
        .map_err(AppError::from)
        .and_then(|row| row.ok_or_else(|| not_found(ENTITY, id)));
    let row = state.files.discard_on_error(result, stored.as_deref()).await?;

    state
        .files
        .remove_replaced(previous.file_path.as_deref(), stored.as_deref())
        .await;

    tracing::info!(library_item_id = id, file_replaced = stored.is_some(), "Library item updated");

    Ok(Json(DataResponse { data: row }))
}

/// DELETE /api/library/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let file_path = LibraryRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;

    if let Some(path) = file_path {
        state.files.remove_best_effort(&path).await;
    }

    tracing::info!(library_item_id = id, "Library item deleted");

    Ok(StatusCode::NO_CONTENT)
}
