//! Rewards Error Types
//!
//! This module provides rewards-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Rewards-specific result type alias
pub type RewardsResult<T> = Result<T, RewardsError>;

/// Rewards-specific error variants
#[derive(Debug, Error)]
pub enum RewardsError {
    /// Unknown username
    #[error("User not found")]
    UserNotFound,

    /// Banned user attempting a gated operation
    #[error("User is banned")]
    UserBanned,

    /// Game identifier outside the fixed enum
    #[error("Unknown game: {0}")]
    UnknownGame(String),

    /// Username failed validation
    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    /// Negative score or duration
    #[error("Score and duration must be non-negative")]
    InvalidScore,

    /// Withdrawal points non-positive or exceeding the balance
    #[error("Invalid amount")]
    InvalidAmount,

    /// Submission refused by the score-validation policy
    #[error("Score rejected: {0}")]
    ScoreRejected(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RewardsError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RewardsError::UserNotFound => StatusCode::NOT_FOUND,
            RewardsError::UserBanned => StatusCode::FORBIDDEN,
            RewardsError::UnknownGame(_)
            | RewardsError::InvalidUsername(_)
            | RewardsError::InvalidScore
            | RewardsError::InvalidAmount => StatusCode::BAD_REQUEST,
            RewardsError::ScoreRejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RewardsError::Database(_) | RewardsError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            RewardsError::UserNotFound => ErrorKind::NotFound,
            RewardsError::UserBanned => ErrorKind::Forbidden,
            RewardsError::UnknownGame(_)
            | RewardsError::InvalidUsername(_)
            | RewardsError::InvalidScore
            | RewardsError::InvalidAmount => ErrorKind::BadRequest,
            RewardsError::ScoreRejected(_) => ErrorKind::UnprocessableEntity,
            RewardsError::Database(_) | RewardsError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            RewardsError::Database(e) => {
                tracing::error!(error = %e, "Rewards database error");
            }
            RewardsError::Internal(msg) => {
                tracing::error!(message = %msg, "Rewards internal error");
            }
            RewardsError::InvalidAmount => {
                tracing::warn!("Withdrawal amount rejected");
            }
            RewardsError::ScoreRejected(reason) => {
                tracing::warn!(reason = %reason, "Score rejected by validation policy");
            }
            RewardsError::UserBanned => {
                tracing::warn!("Banned user attempted an operation");
            }
            _ => {
                tracing::debug!(error = %self, "Rewards error");
            }
        }
    }
}

impl IntoResponse for RewardsError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<crate::domain::value_objects::UsernameError> for RewardsError {
    fn from(err: crate::domain::value_objects::UsernameError) -> Self {
        RewardsError::InvalidUsername(err.to_string())
    }
}
