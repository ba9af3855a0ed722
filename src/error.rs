//! Custom error types and handling
//!
//! This module defines the engine's error types. Store failures are never
//! swallowed: any failed read aborts the whole computation and surfaces the
//! specific error kind.

/// Engine-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Validation errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Resource errors
    #[error("Not found: {0}")]
    NotFound(String),

    // Persistence errors
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    // Internal errors
    #[error("Internal error")]
    Internal(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    /// Get the stable error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Whether the error is a server-side failure (as opposed to bad input
    /// or a missing resource)
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            Self::StoreUnavailable(_) | Self::Internal(_) | Self::Configuration(_)
        )
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Resource not found".to_string()),
            _ => AppError::StoreUnavailable(err.to_string()),
        }
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::InvalidInput("bad id".to_string()).error_code(),
            "INVALID_INPUT"
        );
        assert_eq!(
            AppError::NotFound("user".to_string()).error_code(),
            "NOT_FOUND"
        );
        assert_eq!(
            AppError::StoreUnavailable("connection refused".to_string()).error_code(),
            "STORE_UNAVAILABLE"
        );
    }

    #[test]
    fn test_server_error_classification() {
        assert!(AppError::StoreUnavailable("down".to_string()).is_server_error());
        assert!(!AppError::NotFound("user".to_string()).is_server_error());
        assert!(!AppError::InvalidInput("id".to_string()).is_server_error());
    }

    #[test]
    fn test_sqlx_row_not_found_maps_to_not_found() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert_eq!(err.error_code(), "NOT_FOUND");
    }
}
