//! User Password Value Object
//!
//! SECURITY: passwords are stored and compared as plaintext. Existing rows
//! hold plaintext values and login must keep accepting them, so switching
//! to a hash needs a data migration first. Keep every comparison inside
//! [`UserPassword::matches`] so that change stays local.

use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(String);

impl UserPassword {
    /// Accepts any non-empty password; `None` when empty.
    pub fn new(password: impl Into<String>) -> Option<Self> {
        let password = password.into();
        if password.is_empty() {
            None
        } else {
            Some(Self(password))
        }
    }

    pub fn from_db(password: impl Into<String>) -> Self {
        Self(password.into())
    }

    /// Whether `candidate` is exactly the stored password
    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UserPassword(***)")
    }
}
