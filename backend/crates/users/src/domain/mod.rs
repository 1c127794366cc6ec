//! Domain Layer
//!
//! Contains entities, value objects, and the store trait.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::user::{NewUser, User};
pub use repository::UserRepository;
