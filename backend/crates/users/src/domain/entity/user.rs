//! User Entity

use crate::domain::value_object::{email::Email, user_id::UserId, user_password::UserPassword};

/// Registered user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Store-assigned identifier, never changes
    pub id: UserId,
    /// Login identifier, unique across users
    pub email: Email,
    /// Display name
    pub name: Option<String>,
    pub password: UserPassword,
}

/// A user that has passed validation but has no id yet
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub name: Option<String>,
    pub password: UserPassword,
}

impl NewUser {
    pub fn new(email: Email, name: Option<String>, password: UserPassword) -> Self {
        Self {
            email,
            name,
            password,
        }
    }

    /// Attach the id the store assigned on insert
    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            email: self.email,
            name: self.name,
            password: self.password,
        }
    }
}

impl User {
    /// Plaintext comparison, see [`UserPassword::matches`]
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password.matches(candidate)
    }
}
