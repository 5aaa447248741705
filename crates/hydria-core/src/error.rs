//! Error types module
//!
//! This module provides the core error types used throughout the Hydria
//! frontend core. All errors are unified under the `AppError` enum, which
//! covers validation failures, schema registry lookup failures, and
//! transport errors raised by the remote API collaborator.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues like transport failures
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error presentation - defines how an error should be surfaced.
/// This trait allows errors to self-describe how the caller should react.
pub trait ErrorMetadata {
    /// Machine-readable error code (e.g., "SCHEMA_LOOKUP_ERROR")
    fn error_code(&self) -> &'static str;

    /// Whether this error is recoverable (the operation can be retried)
    fn is_recoverable(&self) -> bool;

    /// User-facing message (may differ from internal error message)
    fn user_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Field-scoped form validation failure. Recoverable; blocks submission
    /// and is rendered inline, never surfaced as a crash.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A `CommunicationTechnology` value has no registry entry. Programmer
    /// error; fatal at initialization, aborts startup.
    #[error("Schema registry lookup failed: {0}")]
    SchemaLookup(String),

    /// Raised by the remote API collaborator. Caught at the call site and
    /// converted to a user-visible notification; no automatic retry.
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("JSON parsing error: {}", err))
    }
}

impl From<uuid::Error> for AppError {
    fn from(err: uuid::Error) -> Self {
        AppError::InvalidInput(format!("UUID parsing error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("{}", err))
    }
}

/// Static metadata for each variant: (error_code, recoverable, log_level).
/// user_message stays per-variant for dynamic content.
fn app_error_static_metadata(err: &AppError) -> (&'static str, bool, LogLevel) {
    match err {
        AppError::Validation(_) => ("VALIDATION_ERROR", true, LogLevel::Debug),
        AppError::SchemaLookup(_) => ("SCHEMA_LOOKUP_ERROR", false, LogLevel::Error),
        AppError::Transport(_) => ("TRANSPORT_ERROR", true, LogLevel::Warn),
        AppError::NotFound(_) => ("NOT_FOUND", false, LogLevel::Debug),
        AppError::Unauthorized(_) => ("UNAUTHORIZED", false, LogLevel::Debug),
        AppError::InvalidInput(_) => ("INVALID_INPUT", false, LogLevel::Debug),
        AppError::Internal(_) => ("INTERNAL_ERROR", true, LogLevel::Error),
        AppError::InternalWithSource { .. } => ("INTERNAL_ERROR", true, LogLevel::Error),
    }
}

impl AppError {
    /// Get detailed error information including error chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();

        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }

        details
    }
}

impl ErrorMetadata for AppError {
    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).0
    }

    fn is_recoverable(&self) -> bool {
        app_error_static_metadata(self).1
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).2
    }

    fn user_message(&self) -> String {
        match self {
            AppError::Validation(ref msg) => msg.clone(),
            AppError::SchemaLookup(_) => "Internal configuration error".to_string(),
            AppError::Transport(_) => "Failed to reach the server".to_string(),
            AppError::NotFound(ref msg) => msg.clone(),
            AppError::Unauthorized(ref msg) => msg.clone(),
            AppError::InvalidInput(ref msg) => msg.clone(),
            AppError::Internal(_) => "Internal error".to_string(),
            AppError::InternalWithSource { .. } => "Internal error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_metadata_validation() {
        let err = AppError::Validation("first_name is required".to_string());
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(err.is_recoverable());
        assert_eq!(err.user_message(), "first_name is required");
        assert_eq!(err.log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_error_metadata_schema_lookup() {
        let err = AppError::SchemaLookup("no fields declared for MIOTY".to_string());
        assert_eq!(err.error_code(), "SCHEMA_LOOKUP_ERROR");
        assert!(!err.is_recoverable());
        assert_eq!(err.user_message(), "Internal configuration error");
        assert_eq!(err.log_level(), LogLevel::Error);
    }

    #[test]
    fn test_error_metadata_transport() {
        let err = AppError::Transport("connection refused".to_string());
        assert_eq!(err.error_code(), "TRANSPORT_ERROR");
        assert!(err.is_recoverable());
        assert_eq!(err.user_message(), "Failed to reach the server");
        assert_eq!(err.log_level(), LogLevel::Warn);
    }

    #[test]
    fn test_detailed_message_includes_source_chain() {
        let source = anyhow::anyhow!("socket closed").context("request failed");
        let err = AppError::from(source);
        let details = err.detailed_message();
        assert!(details.contains("Caused by"));
        assert!(details.contains("socket closed"));
    }
}
