//! Error types for reelist.

use thiserror::Error;

/// Application result type.
pub type AppResult<T> = Result<T, AppError>;

/// Application error type.
///
/// Ownership failures on lists are reported as [`AppError::NotFound`] rather
/// than [`AppError::Forbidden`] so that existence is never confirmed to
/// non-owners. Idempotent operations (toggles, item adds, view recording) do
/// not produce [`AppError::Conflict`]; they return a success value carrying a
/// `created` discriminator instead.
#[derive(Debug, Error)]
pub enum AppError {
    // === Client Errors ===
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("List not found: {0}")]
    ListNotFound(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    // === Server Errors ===
    #[error("Database error: {0}")]
    Database(String),

    #[error("Transient storage error: {0}")]
    Transient(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::ListNotFound(_) => "LIST_NOT_FOUND",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Transient(_) => "TRANSIENT_STORAGE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns whether this error is a server-side fault.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        matches!(
            self,
            Self::Database(_) | Self::Transient(_) | Self::Config(_) | Self::Internal(_)
        )
    }

    /// Returns whether the operation may be retried by the caller.
    ///
    /// Only transient storage failures (serialization conflicts, connection
    /// loss) qualify; everything else is deterministic.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Transient(_))
    }

    /// Serialize this error into the body shape a routing layer returns.
    #[must_use]
    pub fn to_body(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
            }
        })
    }

    /// Log this error at the level its class warrants.
    pub fn log(&self) {
        let code = self.error_code();
        if self.is_server_error() {
            tracing::error!(error = %self, code, "Server error occurred");
        } else {
            tracing::debug!(error = %self, code, "Client error occurred");
        }
    }
}

// === From implementations ===

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::Validation("bad rating".into()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(AppError::ListNotFound("42".into()).error_code(), "LIST_NOT_FOUND");
        assert_eq!(
            AppError::Transient("serialization".into()).error_code(),
            "TRANSIENT_STORAGE_ERROR"
        );
    }

    #[test]
    fn test_retryable() {
        assert!(AppError::Transient("conn reset".into()).is_retryable());
        assert!(!AppError::Database("syntax".into()).is_retryable());
        assert!(!AppError::Conflict("slug space exhausted".into()).is_retryable());
    }

    #[test]
    fn test_body_shape() {
        let body = AppError::Validation("bad rating".into()).to_body();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "Validation error: bad rating");
    }

    #[test]
    fn test_server_error_classification() {
        assert!(AppError::Database("x".into()).is_server_error());
        assert!(!AppError::NotFound("x".into()).is_server_error());
        assert!(!AppError::Forbidden("x".into()).is_server_error());
    }
}
