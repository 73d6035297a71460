//! Error handling module for the ubet CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the ubet CLI application.
///
/// This enum represents all possible errors that can occur
/// during the execution of ubet commands.
#[derive(Error, Debug)]
pub enum UbetError {
    /// Error when a required configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when file operations fail.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails (e.g. an unknown dialect name).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using UbetError.
///
/// This type alias simplifies function signatures by providing
/// a consistent result type throughout the application.
pub type Result<T> = std::result::Result<T, UbetError>;
