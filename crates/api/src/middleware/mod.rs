//! Request extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated staff member from a JWT Bearer token.

pub mod auth;
