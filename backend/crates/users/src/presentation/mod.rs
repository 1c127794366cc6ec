//! Presentation Layer
//!
//! HTTP handlers, DTOs, session extractor and router.

pub mod dto;
pub mod handlers;
pub mod router;
pub mod session;

pub use handlers::UsersAppState;
pub use router::users_router;
pub use session::SessionContext;
