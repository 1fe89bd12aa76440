//! Multipart form parsing and on-disk file storage.
//!
//! Upload handlers follow one sequence: parse the whole form into memory,
//! validate the fields and the file against its [`UploadPolicy`], then save
//! the file, write the row, and finally clean up. A file is written only
//! after everything that can be checked in memory has passed, and is removed
//! again if the row write fails.

use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;

use axum::body::Bytes;
use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use chrono::{DateTime, NaiveDateTime, Utc};
use cms_core::types::Timestamp;
use cms_core::uploads::{relative_path_from_public, UploadPolicy};

use crate::error::{AppError, AppResult};

/// A file part held in memory.
#[derive(Debug)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub content_type: String,
    pub bytes: Bytes,
}

/// A file that passed its policy check, tagged with its canonical MIME type.
#[derive(Debug)]
pub struct AcceptedFile {
    pub mime: &'static str,
    pub bytes: Bytes,
}

/// All parts of a `multipart/form-data` request.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

impl MultipartForm {
    /// Read every part. Parts named in `file_fields` are kept as files; the
    /// rest must be UTF-8 text.
    pub async fn parse(mut multipart: Multipart, file_fields: &[&str]) -> AppResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().unwrap_or("").to_string();

            if file_fields.contains(&name.as_str()) {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field.bytes().await.map_err(multipart_error)?;

                // Browsers send an empty, unnamed part when no file is chosen.
                let nothing_chosen =
                    bytes.is_empty() && file_name.as_deref().map_or(true, str::is_empty);
                if !nothing_chosen {
                    form.files.insert(
                        name,
                        UploadedFile {
                            file_name,
                            content_type,
                            bytes,
                        },
                    );
                }
            } else {
                let text = field.text().await.map_err(multipart_error)?;
                form.fields.insert(name, text);
            }
        }

        Ok(form)
    }

    /// A trimmed text field; empty values count as absent.
    pub fn text(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    /// A text field that validation will require; absent becomes `""`.
    pub fn required_text(&self, name: &str) -> String {
        self.text(name).unwrap_or_default()
    }

    /// Parse an optional field, rejecting malformed values with 400.
    pub fn parse_field<T: FromStr>(&self, name: &str) -> AppResult<Option<T>> {
        self.text(name)
            .map(|raw| {
                raw.parse::<T>()
                    .map_err(|_| AppError::BadRequest(format!("{name} has an invalid value")))
            })
            .transpose()
    }

    /// Parse an optional timestamp: RFC 3339, or a `datetime-local` value
    /// (`YYYY-MM-DDTHH:MM[:SS]`) read as UTC.
    pub fn timestamp(&self, name: &str) -> AppResult<Option<Timestamp>> {
        self.text(name)
            .map(|raw| {
                parse_timestamp(&raw)
                    .ok_or_else(|| AppError::BadRequest(format!("{name} is not a valid date/time")))
            })
            .transpose()
    }

    /// Remove and return a file part.
    pub fn take_file(&mut self, name: &str) -> Option<UploadedFile> {
        self.files.remove(name)
    }
}

fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::BadRequest(format!("Invalid multipart body: {}", err.body_text()))
    }
}

/// Validate an optional file against `policy` without touching disk.
pub fn accept(policy: &UploadPolicy, file: Option<UploadedFile>) -> AppResult<Option<AcceptedFile>> {
    file.map(|file| {
        let mime = policy.check(&file.content_type, &file.bytes).inspect_err(|e| {
            tracing::info!(
                file_name = ?file.file_name,
                content_type = %file.content_type,
                error = %e,
                "Rejected upload",
            );
        })?;
        Ok(AcceptedFile {
            mime,
            bytes: file.bytes,
        })
    })
    .transpose()
}

/// Stores accepted files under the upload root and removes them again.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Absolute-or-root-relative location of a stored public path.
    pub fn resolve(&self, public_path: &str) -> Option<PathBuf> {
        relative_path_from_public(public_path).map(|rel| self.root.join(rel))
    }

    /// Write an accepted file and return its public path. `None` in, `None` out.
    pub async fn save(
        &self,
        policy: &UploadPolicy,
        file: Option<AcceptedFile>,
    ) -> AppResult<Option<String>> {
        let Some(file) = file else {
            return Ok(None);
        };

        let dir = self.root.join(policy.directory);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to create upload dir: {e}")))?;

        let filename = policy.stored_filename(file.mime);
        tokio::fs::write(dir.join(&filename), &file.bytes)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to write upload: {e}")))?;

        let public_path = policy.public_path(&filename);
        tracing::debug!(path = %public_path, bytes = file.bytes.len(), "Stored upload");
        Ok(Some(public_path))
    }

    /// Pass `result` through, deleting the just-stored file if it is an error.
    pub async fn discard_on_error<T>(
        &self,
        result: AppResult<T>,
        stored: Option<&str>,
    ) -> AppResult<T> {
        if result.is_err() {
            if let Some(path) = stored {
                self.remove_best_effort(path).await;
            }
        }
        result
    }

    /// Remove `previous` once `stored` has replaced it.
    pub async fn remove_replaced(&self, previous: Option<&str>, stored: Option<&str>) {
        if let (Some(previous), Some(stored)) = (previous, stored) {
            if previous != stored {
                self.remove_best_effort(previous).await;
            }
        }
    }

    /// Delete a stored file. Failures are logged and otherwise ignored.
    pub async fn remove_best_effort(&self, public_path: &str) {
        let Some(path) = self.resolve(public_path) else {
            tracing::warn!(path = %public_path, "Refusing to remove file outside upload root");
            return;
        };

        match tokio::fs::remove_file(&path).await {
            Ok(()) => tracing::debug!(path = %path.display(), "Removed upload"),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "Failed to remove upload"),
        }
    }
}
