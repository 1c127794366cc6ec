//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::UserResult;

/// User store
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a user and return it with its newly assigned id.
    ///
    /// Fails with `UserError::EmailTaken` if the email is already stored.
    async fn create(&self, user: NewUser) -> UserResult<User>;

    async fn find_by_id(&self, user_id: UserId) -> UserResult<Option<User>>;

    async fn find_by_email(&self, email: &Email) -> UserResult<Option<User>>;

    /// Every user, in the store's natural order (ascending id)
    async fn find_all(&self) -> UserResult<Vec<User>>;
}
