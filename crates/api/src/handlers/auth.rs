//! Handlers for the `/auth` resource (staff login and profile lookup).

use axum::extract::{Path, State};
use axum::Json;
use cms_core::error::CoreError;
use cms_core::status::STATUS_ACTIVE;
use cms_core::types::DbId;
use cms_core::validation::validate_input;
use cms_db::models::staff::Staff;
use cms_db::repositories::StaffRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid staff ID or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/staff-login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "staff_id is required"))]
    pub staff_id: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub staff: Staff,
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/staff-login
///
/// Unknown staff IDs and wrong passwords get the same 401 so the response
/// does not reveal which login IDs exist.
pub async fn staff_login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<DataResponse<LoginResponse>>> {
    validate_input(&input)?;

    // 1. Find credentials by login ID.
    let credentials = StaffRepo::find_credentials_by_staff_id(&state.pool, &input.staff_id)
        .await?
        .ok_or_else(|| invalid_credentials(&input.staff_id))?;

    // 2. Verify password.
    let password_valid = verify_password(&input.password, &credentials.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(invalid_credentials(&input.staff_id));
    }

    // 3. Only active accounts may sign in.
    if credentials.status != STATUS_ACTIVE {
        tracing::warn!(staff_id = %input.staff_id, "Login refused: account inactive");
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is inactive".into(),
        )));
    }

    // 4. Load the public profile and issue a token.
    let staff = load_profile(&state, credentials.id).await?;
    let access_token = generate_access_token(staff.id, &staff.staff_id, &staff.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(id = staff.id, staff_id = %staff.staff_id, "Staff login succeeded");

    Ok(Json(DataResponse {
        data: LoginResponse {
            staff,
            access_token,
            expires_in: state.config.jwt.expires_in_secs(),
        },
    }))
}

/// GET /api/auth/staff/{staff_id}
pub async fn get_by_staff_id(
    State(state): State<AppState>,
    Path(staff_id): Path<String>,
) -> AppResult<Json<DataResponse<Staff>>> {
    let staff = StaffRepo::find_by_staff_id(&state.pool, &staff_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Staff member '{staff_id}' not found")))?;
    Ok(Json(DataResponse { data: staff }))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Staff>>> {
    let staff = load_profile(&state, auth_user.id).await?;
    tracing::debug!(
        staff_id = %auth_user.staff_id,
        role = %auth_user.role,
        "Resolved current staff profile",
    );
    Ok(Json(DataResponse { data: staff }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn invalid_credentials(staff_id: &str) -> AppError {
    tracing::warn!(staff_id = %staff_id, "Login failed: invalid credentials");
    AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into()))
}

async fn load_profile(state: &AppState, id: DbId) -> AppResult<Staff> {
    StaffRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Staff", id }))
}
