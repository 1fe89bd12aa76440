//! Domain building blocks shared by the database and API crates.
//!
//! Nothing in here performs I/O: these are the error taxonomy, id/time
//! aliases, the status and kind vocabularies each table accepts, the upload
//! policies, and small pure helpers (validation, slugs).

pub mod error;
pub mod roles;
pub mod slug;
pub mod status;
pub mod types;
pub mod uploads;
pub mod validation;
pub mod vocab;
