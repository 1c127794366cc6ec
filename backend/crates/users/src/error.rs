//! Users Error Types
//!
//! User-subsystem failures, convertible into the unified
//! `kernel::error::AppError` for rendering.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type UserResult<T> = Result<T, UserError>;

#[derive(Debug, Error)]
pub enum UserError {
    /// Registration without a password (or an empty one)
    #[error("Password is required")]
    PasswordRequired,

    /// Registration without an email (or an empty one)
    #[error("Email is required")]
    EmailRequired,

    /// Registration with an email that is already registered
    #[error("Email is already registered")]
    EmailTaken,

    /// Session owner does not match the requested account
    #[error("User is not logged in")]
    NotLoggedIn,

    /// No user with the requested id or email
    #[error("User not found")]
    UserNotFound,

    /// Login with a known email and the wrong password
    #[error("Incorrect password")]
    InvalidPassword,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

}

impl UserError {
    /// Whether this is a registration validation failure
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            UserError::PasswordRequired | UserError::EmailRequired | UserError::EmailTaken
        )
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            UserError::PasswordRequired | UserError::EmailRequired => StatusCode::BAD_REQUEST,
            UserError::EmailTaken => StatusCode::CONFLICT,
            UserError::NotLoggedIn | UserError::InvalidPassword => StatusCode::UNAUTHORIZED,
            UserError::UserNotFound => StatusCode::NOT_FOUND,
            UserError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            UserError::PasswordRequired | UserError::EmailRequired => ErrorKind::BadRequest,
            UserError::EmailTaken => ErrorKind::Conflict,
            UserError::NotLoggedIn | UserError::InvalidPassword => ErrorKind::Unauthorized,
            UserError::UserNotFound => ErrorKind::NotFound,
            UserError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            UserError::NotLoggedIn => err.with_action("Sign in with the account you want to edit"),
            UserError::EmailTaken => err.with_action("Sign in or use another email"),
            _ => err,
        }
    }

    fn log(&self) {
        match self {
            UserError::Database(e) => {
                tracing::error!(error = %e, "User store error");
            }
            _ => {
                tracing::debug!(error = %self, "User request rejected");
            }
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        self.log();
        match self {
            // Keeps pool exhaustion and connection loss distinguishable (503).
            UserError::Database(e) => AppError::from(e).into_response(),
            other => other.to_app_error().into_response(),
        }
    }
}
