//! Email Value Object
//!
//! The login identifier of a user. Any non-empty string is accepted and kept
//! byte-for-byte as entered: no trimming, no case folding, no format check.
//! Lookups by email are exact matches on that string.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Wrap a user-supplied email.
    ///
    /// ## Errors
    /// `BadRequest` if `email` is the empty string.
    ///
    /// ## Examples
    /// ```rust
    /// use users::domain::value_object::email::Email;
    ///
    /// assert_eq!(Email::new(" admin ").unwrap().as_str(), " admin ");
    /// assert!(Email::new("").is_err());
    /// ```
    pub fn new(email: impl Into<String>) -> AppResult<Self> {
        let email = email.into();

        if email.is_empty() {
            return Err(AppError::bad_request("Email cannot be empty"));
        }

        Ok(Self(email))
    }

    /// Rebuild from a stored value (validated on the way in)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for Email {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Email::new(s)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
