//! Unified application error type.
//! Store, exporter, controller and CLI all return AppError so that every
//! failure reaches the presentation layer as one user-visible message.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    /// The database could not be opened or its schema could not be created.
    /// Fatal for the session.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Insert or delete-all failed. The user may retry the same action.
    #[error("Write error: {0}")]
    Write(String),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Export
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Share failed: {0}")]
    Share(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// True for errors after which the session cannot continue.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AppError::StorageUnavailable(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_failure_is_not_an_export_error() {
        let err: AppError = serde_json::from_str::<Vec<String>>("[1")
            .unwrap_err()
            .into();
        assert!(matches!(err, AppError::Json(_)));
        assert!(err.to_string().starts_with("JSON error:"));
        assert!(!err.is_fatal());
    }
}
