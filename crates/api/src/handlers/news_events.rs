//! Handlers for the `/news-events` resource.
//!
//! Create and update take `multipart/form-data` with an optional `image`
//! part; the remaining parts are text fields named after the columns.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cms_core::status::{NEWS_EVENT_STATUSES, STATUS_ACTIVE};
use cms_core::types::DbId;
use cms_core::uploads::NEWS_EVENT_IMAGE;
use cms_core::validation::validate_input;
use cms_core::vocab::NEWS_EVENT_KINDS;
use cms_db::models::news_event::{CreateNewsEvent, UpdateNewsEvent};
use cms_db::repositories::NewsEventRepo;

use super::{check_choice, check_status, not_found};
use crate::error::{AppError, AppResult};
use crate::query::StatusFilter;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::uploads::{accept, MultipartForm};

const ENTITY: &str = "NewsEvent";
const IMAGE_FIELD: &str = "image";

/// GET /api/news-events
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<StatusFilter>,
) -> AppResult<impl IntoResponse> {
    let rows = NewsEventRepo::list(&state.pool, filter.as_deref()).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/news-events/active
pub async fn list_active(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = NewsEventRepo::list(&state.pool, Some(STATUS_ACTIVE)).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/news-events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = NewsEventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;
    Ok(Json(DataResponse { data: row }))
}

/// POST /api/news-events
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let mut form = MultipartForm::parse(multipart, &[IMAGE_FIELD]).await?;
    let input = CreateNewsEvent {
        headline: form.required_text("headline"),
        description: form.required_text("description"),
        event_time: form.timestamp("event_time")?,
        location: form.text("location"),
        kind: form.text("kind"),
        author_id: form.parse_field("author_id")?,
        author_name: form.text("author_name"),
        status: form.text("status"),
    };
    validate_input(&input)?;
    check_choice("kind", input.kind.as_deref(), NEWS_EVENT_KINDS)?;
    check_status(input.status.as_deref(), NEWS_EVENT_STATUSES)?;
    let image = accept(&NEWS_EVENT_IMAGE, form.take_file(IMAGE_FIELD))?;

    let stored = state.files.save(&NEWS_EVENT_IMAGE, image).await?;
    let result = NewsEventRepo::create(&state.pool, &input, stored.as_deref())
        .await
        .map_err(AppError::from);
    let row = state.files.discard_on_error(result, stored.as_deref()).await?;

    tracing::info!(news_event_id = row.id, has_image = stored.is_some(), "News/event created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: row })))
}

/// PUT /api/news-events/{id}
///
/// A new `image` replaces the stored one, which is then removed from disk.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let mut form = MultipartForm::parse(multipart, &[IMAGE_FIELD]).await?;
    let input = UpdateNewsEvent {
        headline: form.required_text("headline"),
        description: form.required_text("description"),
        event_time: form.timestamp("event_time")?,
        location: form.text("location"),
        kind: form.text("kind"),
        status: form.text("status"),
    };
    validate_input(&input)?;
    check_choice("kind", input.kind.as_deref(), NEWS_EVENT_KINDS)?;
    check_status(input.status.as_deref(), NEWS_EVENT_STATUSES)?;
    let image = accept(&NEWS_EVENT_IMAGE, form.take_file(IMAGE_FIELD))?;

    let previous = NewsEventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;

    let stored = state.files.save(&NEWS_EVENT_IMAGE, image).await?;
    let result = NewsEventRepo::update(&state.pool, id, &input, stored.as_deref())
        .await
        .map_err(AppError::from)
        .and_then(|row| row.ok_or_else(|| not_found(ENTITY, id)));
    let row = state.files.discard_on_error(result, stored.as_deref()).await?;

    state
        .files
        .remove_replaced(previous.image_path.as_deref(), stored.as_deref())
        .await;

    tracing::info!(news_event_id = id, image_replaced = stored.is_some(), "News/event updated");

    Ok(Json(DataResponse { data: row }))
}

/// DELETE /api/news-events/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let image_path = NewsEventRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;

    if let Some(path) = image_path {
        state.files.remove_best_effort(&path).await;
    }

    tracing::info!(news_event_id = id, "News/event deleted");

    Ok(StatusCode::NO_CONTENT)
}
