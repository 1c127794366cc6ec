//! Application Layer
//!
//! Use cases over the user store and session token handling.

pub mod config;
pub mod session;
pub mod user_service;

pub use config::UsersConfig;
pub use session::SessionManager;
pub use user_service::{LoginOutcome, LoginStatus, RegisterInput, UserData, UserService};
