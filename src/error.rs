//! Error types for the GMAO core

use thiserror::Error;

/// Stable numeric codes surfaced to callers alongside the message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    NotAuthorized = 2,
    NoSuchData = 20,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Build a `NotFound` naming the entity kind and the missing id
    pub fn not_found(label: &str, id: &str) -> Self {
        AppError::NotFound(format!("{} {} not found", label, id))
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::NotFound(_) => ErrorCode::NoSuchData,
            AppError::Authentication(_) => ErrorCode::NotAuthorized,
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                ErrorCode::Failure
            }
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
