//! In-memory user store
//!
//! Used when no database is configured and by tests. Ids start at 1 and
//! increase by one per insert, like a `BIGSERIAL` column.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::{UserError, UserResult};

#[derive(Debug, Default)]
struct Inner {
    users: Vec<User>,
    last_id: i64,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> UserResult<User> {
        let mut inner = self.inner.write().await;

        // Same guarantee as the UNIQUE constraint on users.email.
        if inner.users.iter().any(|u| u.email == user.email) {
            return Err(UserError::EmailTaken);
        }

        inner.last_id += 1;
        let user = user.with_id(UserId::new(inner.last_id));
        inner.users.push(user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, user_id: UserId) -> UserResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> UserResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| &u.email == email).cloned())
    }

    async fn find_all(&self) -> UserResult<Vec<User>> {
        Ok(self.inner.read().await.users.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_password::UserPassword;

    fn new_user(email: &str) -> NewUser {
        NewUser::new(
            Email::new(email).unwrap(),
            None,
            UserPassword::new("secret").unwrap(),
        )
    }

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let repo = InMemoryUserRepository::new();
        let first = repo.create(new_user("a@ua")).await.unwrap();
        let second = repo.create(new_user("b@ua")).await.unwrap();

        assert_eq!(first.id, UserId::new(1));
        assert_eq!(second.id, UserId::new(2));
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.create(new_user("a@ua")).await.unwrap();

        let err = repo.create(new_user("a@ua")).await.unwrap_err();
        assert!(matches!(err, UserError::EmailTaken));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let repo = InMemoryUserRepository::new();
        let handle = repo.clone();
        let created = repo.create(new_user("a@ua")).await.unwrap();

        assert_eq!(handle.find_by_id(created.id).await.unwrap(), Some(created.clone()));
        assert_eq!(
            handle.find_by_email(&created.email).await.unwrap(),
            Some(created)
        );
        assert_eq!(handle.find_by_id(UserId::new(2)).await.unwrap(), None);
    }
}
