//! Handlers for the `/staff` resource.
//!
//! Responses always use the public [`Staff`](cms_db::models::staff::Staff)
//! profile; the password hash never leaves the repository layer except for
//! verification.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cms_core::error::CoreError;
use cms_core::roles::validate_role;
use cms_core::status::BINARY_STATUSES;
use cms_core::types::DbId;
use cms_core::uploads::STAFF_PHOTO;
use cms_core::validation::validate_input;
use cms_db::models::staff::{ChangePassword, CreateStaff, UpdateStaff};
use cms_db::repositories::StaffRepo;

use super::{check_status, not_found};
use crate::auth::password::{hash_password, verify_password};
use crate::error::{unique_violation, AppError, AppResult};
use crate::extract::AppJson;
use crate::query::StatusFilter;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::uploads::{accept, MultipartForm};

const ENTITY: &str = "Staff";
const PHOTO_FIELD: &str = "photo";

/// Duplicate login IDs and emails are reported as 400, not 409.
fn map_duplicate(err: sqlx::Error) -> AppError {
    match unique_violation(&err) {
        Some("uq_staff_staff_id") => AppError::BadRequest("Staff ID already exists".into()),
        Some("uq_staff_email") => AppError::BadRequest("Email already exists".into()),
        _ => AppError::Database(err),
    }
}

fn check_role(role: Option<&str>) -> Result<(), CoreError> {
    role.map_or(Ok(()), validate_role)
}

fn hash(password: &str) -> AppResult<String> {
    hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))
}

/// GET /api/staff
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<StatusFilter>,
) -> AppResult<impl IntoResponse> {
    let rows = StaffRepo::list(&state.pool, filter.as_deref()).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/staff/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = StaffRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;
    Ok(Json(DataResponse { data: row }))
}

/// POST /api/staff
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateStaff>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    check_role(input.role.as_deref())?;

    let password_hash = hash(&input.password)?;
    let row = StaffRepo::create(&state.pool, &input, &password_hash)
        .await
        .map_err(map_duplicate)?;

    tracing::info!(id = row.id, staff_id = %row.staff_id, role = %row.role, "Staff member created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: row })))
}

/// PUT /api/staff/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateStaff>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;
    check_role(input.role.as_deref())?;
    check_status(input.status.as_deref(), BINARY_STATUSES)?;

    let row = StaffRepo::update(&state.pool, id, &input)
        .await
        .map_err(map_duplicate)?
        .ok_or_else(|| not_found(ENTITY, id))?;

    tracing::info!(id, staff_id = %row.staff_id, "Staff member updated");

    Ok(Json(DataResponse { data: row }))
}

/// DELETE /api/staff/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let photo = StaffRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;

    if let Some(path) = photo {
        state.files.remove_best_effort(&path).await;
    }

    tracing::info!(id, "Staff member deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/staff/{id}/upload-photo
///
/// Requires a `photo` part. The previous photo is removed once the new one
/// is stored.
pub async fn upload_photo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let mut form = MultipartForm::parse(multipart, &[PHOTO_FIELD]).await?;
    let photo = accept(&STAFF_PHOTO, form.take_file(PHOTO_FIELD))?
        .ok_or_else(|| AppError::BadRequest("photo file is required".into()))?;

    let previous = StaffRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;

    let stored = state.files.save(&STAFF_PHOTO, Some(photo)).await?;
    let result = match stored.as_deref() {
        Some(path) => StaffRepo::set_photo(&state.pool, id, path)
            .await
            .map_err(AppError::from)
            .and_then(|row| row.ok_or_else(|| not_found(ENTITY, id))),
        None => Err(AppError::InternalError("Photo was not stored".into())),
    };
    let row = state.files.discard_on_error(result, stored.as_deref()).await?;

    state
        .files
        .remove_replaced(previous.profile_photo.as_deref(), stored.as_deref())
        .await;

    tracing::info!(id, photo = ?row.profile_photo, "Staff photo updated");

    Ok(Json(DataResponse { data: row }))
}

/// POST /api/staff/{id}/change-password
///
/// 401 if `current_password` does not match the stored hash.
pub async fn change_password(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<ChangePassword>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;

    let credentials = StaffRepo::find_credentials(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;

    let matches = verify_password(&input.current_password, &credentials.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !matches {
        tracing::warn!(id, "Password change rejected: wrong current password");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Current password is incorrect".into(),
        )));
    }

    let new_hash = hash(&input.new_password)?;
    if !StaffRepo::update_password(&state.pool, id, &new_hash).await? {
        return Err(not_found(ENTITY, id));
    }

    tracing::info!(id, "Staff password changed");

    Ok(Json(DataResponse {
        data: serde_json::json!({ "message": "Password updated" }),
    }))
}
