//! Handlers for the `/leadership` resource (multipart, optional `image`).

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cms_core::status::{BINARY_STATUSES, STATUS_ACTIVE};
use cms_core::types::DbId;
use cms_core::uploads::LEADERSHIP_IMAGE;
use cms_core::validation::validate_input;
use cms_core::vocab::LEADERSHIP_KINDS;
use cms_db::models::leadership::{CreateLeader, UpdateLeader};
use cms_db::repositories::LeadershipRepo;

use super::{check_choice, check_status, not_found};
use crate::error::{AppError, AppResult};
use crate::query::StatusFilter;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::uploads::{accept, MultipartForm};

const ENTITY: &str = "Leader";
const IMAGE_FIELD: &str = "image";

/// GET /api/leadership
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<StatusFilter>,
) -> AppResult<impl IntoResponse> {
    let rows = LeadershipRepo::list(&state.pool, filter.as_deref()).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/leadership/active
pub async fn list_active(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = LeadershipRepo::list(&state.pool, Some(STATUS_ACTIVE)).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/leadership/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = LeadershipRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;
    Ok(Json(DataResponse { data: row }))
}

/// POST /api/leadership
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let mut form = MultipartForm::parse(multipart, &[IMAGE_FIELD]).await?;
    let input = CreateLeader {
        name: form.required_text("name"),
        title: form.text("title"),
        kind: form.text("kind"),
        description: form.text("description"),
        location: form.text("location"),
        author_id: form.parse_field("author_id")?,
        author_name: form.text("author_name"),
        status: form.text("status"),
    };
    validate_input(&input)?;
    check_choice("kind", input.kind.as_deref(), LEADERSHIP_KINDS)?;
    check_status(input.status.as_deref(), BINARY_STATUSES)?;
    let image = accept(&LEADERSHIP_IMAGE, form.take_file(IMAGE_FIELD))?;

    let stored = state.files.save(&LEADERSHIP_IMAGE, image).await?;
    let result = LeadershipRepo::create(&state.pool, &input, stored.as_deref())
        .await
        .map_err(AppError::from);
    let row = state.files.discard_on_error(result, stored.as_deref()).await?;

    tracing::info!(leader_id = row.id, kind = %row.kind, "Leadership entry created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: row })))
}

/// PUT /api/leadership/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let mut form = MultipartForm::parse(multipart, &[IMAGE_FIELD]).await?;
    let input = UpdateLeader {
        name: form.required_text("name"),
        title: form.text("title"),
        kind: form.text("kind"),
        description: form.text("description"),
        location: form.text("location"),
        status: form.text("status"),
    };
    validate_input(&input)?;
    check_choice("kind", input.kind.as_deref(), LEADERSHIP_KINDS)?;
    check_status(input.status.as_deref(), BINARY_STATUSES)?;
    let image = accept(&LEADERSHIP_IMAGE, form.take_file(IMAGE_FIELD))?;

    let previous = LeadershipRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;

    let stored = state.files.save(&LEADERSHIP_IMAGE, image).await?;
    let result = LeadershipRepo::update(&state.pool, id, &input, stored.as_deref())
        .await
        .map_err(AppError::from)
        .and_then(|row| row.ok_or_else(|| not_found(ENTITY, id)));
    let row = state.files.discard_on_error(result, stored.as_deref()).await?;

    state
        .files
        .remove_replaced(previous.image_path.as_deref(), stored.as_deref())
        .await;

    tracing::info!(leader_id = id, image_replaced = stored.is_some(), "Leadership entry updated");

    Ok(Json(DataResponse { data: row }))
}

/// DELETE /api/leadership/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let image_path = LeadershipRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;

    if let Some(path) = image_path {
        state.files.remove_best_effort(&path).await;
    }

    tracing::info!(leader_id = id, "Leadership entry deleted");

    Ok(StatusCode::NO_CONTENT)
}
