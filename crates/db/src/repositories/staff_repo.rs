//! Repository for the `staff` table.
//!
//! Public reads go through [`COLUMNS`], which never includes the password
//! hash. Only [`StaffRepo::find_credentials_by_staff_id`] and
//! [`StaffRepo::find_credentials`] read it.

use cms_core::roles::DEFAULT_ROLE;
use cms_core::types::DbId;
use sqlx::PgPool;

use crate::models::staff::{CreateStaff, Staff, StaffCredentials, UpdateStaff};

const COLUMNS: &str = "\
    id, staff_id, name, email, department, phone, role, office_location, bio, \
    profile_photo, status, created_at, updated_at";

/// Provides CRUD, credential lookup and photo updates for staff members.
pub struct StaffRepo;

impl StaffRepo {
    pub async fn list(pool: &PgPool, status: Option<&str>) -> Result<Vec<Staff>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM staff \
             WHERE ($1::text IS NULL OR status = $1) \
             ORDER BY name, id"
        );
        sqlx::query_as::<_, Staff>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Staff>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM staff WHERE id = $1");
        sqlx::query_as::<_, Staff>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Look up a public profile by login ID.
    pub async fn find_by_staff_id(
        pool: &PgPool,
        staff_id: &str,
    ) -> Result<Option<Staff>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM staff WHERE staff_id = $1");
        sqlx::query_as::<_, Staff>(&query)
            .bind(staff_id)
            .fetch_optional(pool)
            .await
    }

    /// Credentials for a login ID, used by staff login.
    pub async fn find_credentials_by_staff_id(
        pool: &PgPool,
        staff_id: &str,
    ) -> Result<Option<StaffCredentials>, sqlx::Error> {
        sqlx::query_as::<_, StaffCredentials>(
            "SELECT id, password_hash, status FROM staff WHERE staff_id = $1",
        )
        .bind(staff_id)
        .fetch_optional(pool)
        .await
    }

    /// Credentials for an internal id, used by change-password.
    pub async fn find_credentials(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<StaffCredentials>, sqlx::Error> {
        sqlx::query_as::<_, StaffCredentials>(
            "SELECT id, password_hash, status FROM staff WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Insert a staff member. `password_hash` must already be hashed.
    pub async fn create(
        pool: &PgPool,
        input: &CreateStaff,
        password_hash: &str,
    ) -> Result<Staff, sqlx::Error> {
        let query = format!(
            "INSERT INTO staff \
                 (staff_id, name, email, password_hash, department, phone, role, \
                  office_location) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Staff>(&query)
            .bind(&input.staff_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(password_hash)
            .bind(&input.department)
            .bind(&input.phone)
            .bind(input.role.as_deref().unwrap_or(DEFAULT_ROLE))
            .bind(&input.office_location)
            .fetch_one(pool)
            .await
    }

    /// Replace the profile fields. Omitted role/status keep their stored
    /// values; the photo and password are untouched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStaff,
    ) -> Result<Option<Staff>, sqlx::Error> {
        let query = format!(
            "UPDATE staff SET \
                 name = $2, \
                 email = $3, \
                 department = $4, \
                 phone = $5, \
                 role = COALESCE($6, role), \
                 office_location = $7, \
                 bio = $8, \
                 status = COALESCE($9, status) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Staff>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.department)
            .bind(&input.phone)
            .bind(&input.role)
            .bind(&input.office_location)
            .bind(&input.bio)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Store a new profile photo path.
    pub async fn set_photo(
        pool: &PgPool,
        id: DbId,
        profile_photo: &str,
    ) -> Result<Option<Staff>, sqlx::Error> {
        let query = format!(
            "UPDATE staff SET profile_photo = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Staff>(&query)
            .bind(id)
            .bind(profile_photo)
            .fetch_optional(pool)
            .await
    }

    /// Replace the password hash. Returns `true` if the row exists.
    pub async fn update_password(
        pool: &PgPool,
        id: DbId,
        password_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE staff SET password_hash = $2 WHERE id = $1")
            .bind(id)
            .bind(password_hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a staff member, returning the profile photo path.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Option<String>>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<String>>(
            "DELETE FROM staff WHERE id = $1 RETURNING profile_photo",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
