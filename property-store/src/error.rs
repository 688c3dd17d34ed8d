//! Storage error types.
//!
//! Raised by [`crate::SqlitePropertyStore`] internals; the [`crate::PropertyStore`] trait
//! surface logs them and degrades to empty results.

use thiserror::Error;

/// Errors that can occur when talking to the property database.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Invalid database url: {0}")]
    InvalidUrl(String),
}
