//! Request extractors whose rejections use the `{error, code}` envelope.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` with malformed or mistyped bodies mapped to 400 `BAD_REQUEST`
/// instead of axum's plain-text 415/422.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
