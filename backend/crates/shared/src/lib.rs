//! Shared Kernel
//!
//! Vocabulary shared by every crate in the workspace:
//! - The unified [`error::app_error::AppError`] and its HTTP classification
//! - Typed numeric identifiers for persisted entities
//!
//! Only things with the same meaning everywhere belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
