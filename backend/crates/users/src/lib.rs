//! Users Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, store trait
//! - `application/` - User service, session tokens, config
//! - `infra/` - PostgreSQL and in-memory stores
//! - `presentation/` - HTTP handlers, DTOs, session extractor, router
//!
//! ## Features
//! - Registration with email, optional name and password
//! - Login classified as `LOGIN_OK`, `ERROR_PASSWORD` or `USER_NOT_FOUND`
//! - Public user listing and detail pages
//! - Account page restricted to the logged-in owner
//!
//! ## Session Model
//! - Stateless HMAC-SHA256 signed token in an HttpOnly cookie
//! - Logout clears the cookie

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::UsersConfig;
pub use error::{UserError, UserResult};
pub use infra::{InMemoryUserRepository, PgUserRepository};
pub use presentation::router::users_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
