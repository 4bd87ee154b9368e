//! Defines the application's primary error type `AppError` and a convenience `Result` alias.
//!
//! Uses the `thiserror` crate for ergonomic error definition and provides `From`
//! implementations to convert common external errors into `AppError` variants.
//! Errors that do not implement `Clone` are wrapped in `Arc` to allow `AppError` to be cloneable.

use crate::models::ContactField;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// The primary error enumeration for all application-specific errors.
#[derive(Error, Debug, Clone)]
pub enum AppError {
    /// A whole-record operation (`add`) failed validation.
    #[error("Invalid contact information: {0}")]
    InvalidInput(String),

    /// A single field was rejected during an edit. Non-fatal: the other fields still apply.
    #[error("Invalid {0}. Keeping the current one.")]
    FieldRejected(ContactField),

    /// The operation targets an identifier that is not in the store.
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// Export/import could not open, read or write its backing file.
    #[error("Could not access {}: {source}", .path.display())]
    IoUnavailable {
        path: PathBuf,
        source: Arc<std::io::Error>,
    },

    /// Error related to standard I/O operations outside of export/import.
    #[error("I/O Error: {0}")]
    Io(Arc<std::io::Error>),

    /// Error while rendering contacts as JSON (`serde_json`).
    #[error("JSON Error: {0}")]
    Json(Arc<serde_json::Error>),

    /// Invalid value in the environment configuration.
    #[error("Configuration Error: {0}")]
    Config(String),

    /// Error originating from user interaction prompts (`dialoguer`).
    #[error("Dialoguer Error: {0}")]
    Dialoguer(Arc<dialoguer::Error>),

    /// Error related to progress spinner style templating (`indicatif`).
    #[error("Progress Style Template Error: {0}")]
    Template(Arc<indicatif::style::TemplateError>),
}

impl AppError {
    /// Wraps an I/O failure on a specific export/import file.
    pub fn unavailable(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        AppError::IoUnavailable {
            path: path.into(),
            source: Arc::new(err),
        }
    }
}

/// A specialized `Result` type using the application's `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

// --- From implementations ---
// Arc is used for non-Clone error types.

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(Arc::new(err))
    }
}

impl From<dialoguer::Error> for AppError {
    fn from(err: dialoguer::Error) -> Self {
        AppError::Dialoguer(Arc::new(err))
    }
}

impl From<indicatif::style::TemplateError> for AppError {
    fn from(err: indicatif::style::TemplateError) -> Self {
        AppError::Template(Arc::new(err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(Arc::new(err))
    }
}
