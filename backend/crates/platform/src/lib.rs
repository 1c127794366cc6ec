//! Platform Crate - Technical Infrastructure
//!
//! Shared technical building blocks with no domain knowledge:
//! - HMAC-SHA256 signing and base64url encoding for session tokens
//! - Cookie parsing and `Set-Cookie` construction

pub mod cookie;
pub mod crypto;
