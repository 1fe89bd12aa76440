//! Handlers for the singleton `/about` record.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use cms_core::error::CoreError;
use cms_db::models::about::UpsertAbout;
use cms_db::repositories::AboutRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/about
///
/// 404 until the first `PUT`.
pub async fn get(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let row = AboutRepo::get(&state.pool)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "About", id: 1 }))?;
    Ok(Json(DataResponse { data: row }))
}

/// PUT /api/about
pub async fn upsert(
    State(state): State<AppState>,
    AppJson(input): AppJson<UpsertAbout>,
) -> AppResult<impl IntoResponse> {
    let row = AboutRepo::upsert(&state.pool, &input).await?;

    tracing::info!("About record saved");

    Ok(Json(DataResponse { data: row }))
}
