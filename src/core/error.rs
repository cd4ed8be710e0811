//! Error types and error handling for the repository gateway.
//!
//! This module defines the error taxonomy shared by every front end.
//! Transport-specific rendering (HTTP status codes, CLI exit codes)
//! is handled in the respective adapter modules; the numeric status
//! carried by the response envelope is decided here.

use thiserror::Error;

/// Result type alias for gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Coarse classification of a [`GatewayError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or empty required field, detected before any state access
    Validation,
    /// Operation requires a bound repository and none exists
    NotInitialized,
    /// Repository construction failed for a given path
    Binding,
    /// Requested file does not exist in the bound repository
    NotFound,
    /// Anything else (I/O, configuration, serialization)
    Internal,
}

impl ErrorKind {
    /// Stable snake_case name, used in logs
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::NotInitialized => "not_initialized",
            ErrorKind::Binding => "binding",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Internal => "internal",
        }
    }
}

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("{0}")]
    Validation(String),

    #[error("repository not initialized")]
    NotInitialized,

    #[error("failed to open repository at {path}: {reason}")]
    Binding { path: String, reason: String },

    #[error("file not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl GatewayError {
    /// Build a binding failure for `path`
    pub fn binding(path: impl Into<String>, reason: impl ToString) -> Self {
        GatewayError::Binding {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            GatewayError::Validation(_) => ErrorKind::Validation,
            GatewayError::NotInitialized => ErrorKind::NotInitialized,
            GatewayError::Binding { .. } => ErrorKind::Binding,
            GatewayError::NotFound(_) => ErrorKind::NotFound,
            GatewayError::ConfigError(_)
            | GatewayError::Internal(_)
            | GatewayError::IoError(_)
            | GatewayError::SerdeError(_)
            | GatewayError::TomlError(_) => ErrorKind::Internal,
        }
    }

    /// Numeric status carried by the response envelope
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::Validation | ErrorKind::NotInitialized | ErrorKind::Binding => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::Internal => 500,
        }
    }

    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}
