use std::io;

use thiserror::Error;

/// Library-wide error type for sitebind operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Explicitly requested settings file does not exist.
    #[error("Site settings not found: {0}")]
    ConfigMissing(String),

    /// Settings parsed but failed validation.
    #[error("Invalid site settings: {0}")]
    InvalidSettings(String),

    /// Bind input (page or directory) does not exist.
    #[error("Input not found: {0}")]
    InputNotFound(String),

    /// Path escapes the store root.
    #[error("Path traversal detected: {0}")]
    PathTraversal(String),

    /// Embedded catalog asset could not be loaded.
    #[error("Invalid catalog asset '{asset}': {reason}")]
    InvalidCatalog { asset: String, reason: String },

    /// HTML rewriter failure.
    #[error("Failed to rewrite HTML: {0}")]
    Rewrite(#[from] lol_html::errors::RewritingError),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidSettings(_)
            | AppError::PathTraversal(_)
            | AppError::TomlParse(_)
            | AppError::Json(_) => io::ErrorKind::InvalidInput,
            AppError::ConfigMissing(_) | AppError::InputNotFound(_) => io::ErrorKind::NotFound,
            AppError::InvalidCatalog { .. } | AppError::Rewrite(_) => io::ErrorKind::InvalidData,
        }
    }
}
