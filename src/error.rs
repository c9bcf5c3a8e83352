use std::io;
use thiserror::Error;

use crate::config::settings::ConfigError;

/// Errors that can occur while decoding git output
#[derive(Debug, Error)]
pub enum GitError {
    #[error("Invalid hunk header: {0}")]
    InvalidHunkHeader(String),

    #[error("Invalid range info: {0}")]
    InvalidRangeInfo(String),
}

/// Top-level application error that wraps all module-specific errors
///
/// Parser, config and I/O failures all convert into `AppError` via `From`,
/// so the binary can use `?` throughout and report one error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Git output error: {0}")]
    Git(#[from] GitError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for parsing operations
pub type GitResult<T> = std::result::Result<T, GitError>;

/// Result type for application-level operations
pub type AppResult<T> = std::result::Result<T, AppError>;
