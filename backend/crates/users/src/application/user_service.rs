//! User Service
//!
//! Registration, login classification and lookups. Works on [`UserData`],
//! the transfer shape handed to the presentation layer.

use std::sync::Arc;

use derive_more::Display;
use serde::Serialize;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_id::UserId, user_password::UserPassword};
use crate::error::{UserError, UserResult};

/// User as seen by callers of the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserData {
    pub id: UserId,
    pub email: String,
    pub name: Option<String>,
    pub password: String,
}

impl From<User> for UserData {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email.into_inner(),
            name: user.name,
            password: user.password.as_str().to_string(),
        }
    }
}

/// Registration candidate; fields are optional as they arrive from a form
#[derive(Debug, Clone, Default)]
pub struct RegisterInput {
    pub email: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

/// Outcome of a login attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoginStatus {
    #[display("LOGIN_OK")]
    LoginOk,
    #[display("USER_NOT_FOUND")]
    UserNotFound,
    #[display("ERROR_PASSWORD")]
    ErrorPassword,
}

/// Login classification carrying the matched user on success
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated(UserId),
    UserNotFound,
    ErrorPassword,
}

impl LoginOutcome {
    pub fn status(&self) -> LoginStatus {
        match self {
            LoginOutcome::Authenticated(_) => LoginStatus::LoginOk,
            LoginOutcome::UserNotFound => LoginStatus::UserNotFound,
            LoginOutcome::ErrorPassword => LoginStatus::ErrorPassword,
        }
    }
}

/// User use cases over a [`UserRepository`].
///
/// Cheap to clone: the store is shared behind an `Arc`. Emails are matched
/// exactly as given by the caller, and no method touches session state.
///
/// ## Examples
/// ```rust
/// use std::sync::Arc;
/// use users::InMemoryUserRepository;
/// use users::application::{LoginStatus, RegisterInput, UserService};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
/// let user = service
///     .register(RegisterInput {
///         email: Some("user@ua".to_string()),
///         name: None,
///         password: Some("123".to_string()),
///     })
///     .await
///     .unwrap();
///
/// assert_eq!(service.login("user@ua", "123").await.unwrap(), LoginStatus::LoginOk);
/// assert_eq!(service.find_by_id(user.id).await.unwrap(), Some(user));
/// # }
/// ```
pub struct UserService<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> Clone for UserService<R>
where
    R: UserRepository,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Classify a login attempt.
    ///
    /// ## Arguments
    /// * `email` - compared exactly against stored emails
    /// * `password` - compared exactly against the stored password
    ///
    /// ## Returns
    /// `LoginOk`, `ErrorPassword` or `UserNotFound`. Only store failures
    /// are errors.
    pub async fn login(&self, email: &str, password: &str) -> UserResult<LoginStatus> {
        Ok(self.authenticate(email, password).await?.status())
    }

    /// Same classification as [`UserService::login`], plus the id of the
    /// matched user when the credentials are correct.
    pub async fn authenticate(&self, email: &str, password: &str) -> UserResult<LoginOutcome> {
        // The empty string is never a stored email.
        let Ok(email) = Email::new(email) else {
            return Ok(LoginOutcome::UserNotFound);
        };

        let outcome = match self.repo.find_by_email(&email).await? {
            None => LoginOutcome::UserNotFound,
            Some(user) if !user.password_matches(password) => LoginOutcome::ErrorPassword,
            Some(user) => LoginOutcome::Authenticated(user.id),
        };

        tracing::debug!(email = %email, status = %outcome.status(), "Login attempt classified");

        Ok(outcome)
    }

    /// Validate and persist a new user.
    ///
    /// ## Arguments
    /// * `input` - email (stored as given), optional name, password
    ///
    /// ## Errors
    /// * `PasswordRequired` - password missing or empty
    /// * `EmailRequired` - email missing or empty
    /// * `EmailTaken` - a user with this exact email exists
    ///
    /// Nothing is written when validation fails. The returned value equals
    /// what `find_by_id` returns for the new id afterwards.
    pub async fn register(&self, input: RegisterInput) -> UserResult<UserData> {
        let password = input
            .password
            .and_then(UserPassword::new)
            .ok_or(UserError::PasswordRequired)?;

        let email = input
            .email
            .and_then(|email| Email::new(email).ok())
            .ok_or(UserError::EmailRequired)?;

        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(UserError::EmailTaken);
        }

        let user = self
            .repo
            .create(NewUser::new(email, input.name, password))
            .await?;

        tracing::info!(user_id = %user.id, email = %user.email, "User registered");

        Ok(user.into())
    }

    /// Exact-match lookup; `None` when no user has this email
    pub async fn find_by_email(&self, email: &str) -> UserResult<Option<UserData>> {
        let Ok(email) = Email::new(email) else {
            return Ok(None);
        };

        Ok(self.repo.find_by_email(&email).await?.map(UserData::from))
    }

    pub async fn find_by_id(&self, user_id: UserId) -> UserResult<Option<UserData>> {
        Ok(self.repo.find_by_id(user_id).await?.map(UserData::from))
    }

    /// Every user in store order (ascending id)
    pub async fn find_all(&self) -> UserResult<Vec<UserData>> {
        let users = self.repo.find_all().await?;
        Ok(users.into_iter().map(UserData::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryUserRepository;

    fn service() -> UserService<InMemoryUserRepository> {
        UserService::new(Arc::new(InMemoryUserRepository::new()))
    }

    fn input(email: &str, name: Option<&str>, password: Option<&str>) -> RegisterInput {
        RegisterInput {
            email: Some(email.to_string()),
            name: name.map(str::to_string),
            password: password.map(str::to_string),
        }
    }

    async fn add_example_user(service: &UserService<InMemoryUserRepository>) -> UserId {
        service
            .register(input("user@ua", Some("Usuario Ejemplo"), Some("123")))
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_find_all_in_registration_order() {
        let service = service();
        service
            .register(input("user1@ua", None, Some("1")))
            .await
            .unwrap();
        service
            .register(input("user2@ua", None, Some("2")))
            .await
            .unwrap();

        let users = service.find_all().await.unwrap();
        let emails: Vec<_> = users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails, ["user1@ua", "user2@ua"]);
        assert!(users[0].id < users[1].id);
    }

    #[tokio::test]
    async fn test_login_classification() {
        let service = service();
        add_example_user(&service).await;

        assert_eq!(
            service.login("user@ua", "123").await.unwrap(),
            LoginStatus::LoginOk
        );
        assert_eq!(
            service.login("user@ua", "000").await.unwrap(),
            LoginStatus::ErrorPassword
        );
        assert_eq!(
            service.login("pepito.perez@gmail.com", "12345678").await.unwrap(),
            LoginStatus::UserNotFound
        );
        assert_eq!(
            service.login("x@x", "y").await.unwrap(),
            LoginStatus::UserNotFound
        );
        assert_eq!(
            service.login("", "123").await.unwrap(),
            LoginStatus::UserNotFound
        );
    }

    #[tokio::test]
    async fn test_register_then_find_by_email() {
        let service = service();
        service
            .register(input("usuario.prueba2@gmail.com", None, Some("12345678")))
            .await
            .unwrap();

        let found = service
            .find_by_email("usuario.prueba2@gmail.com")
            .await
            .unwrap()
            .expect("registered user");
        assert_eq!(found.email, "usuario.prueba2@gmail.com");
        assert_eq!(found.name, None);
    }

    #[tokio::test]
    async fn test_register_without_password_fails() {
        let service = service();

        for password in [None, Some("")] {
            let err = service
                .register(input("usuario.prueba@gmail.com", None, password))
                .await
                .unwrap_err();
            assert!(matches!(err, UserError::PasswordRequired));
            assert!(err.is_validation());
        }

        assert!(service.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_register_without_email_fails() {
        let service = service();

        let err = service
            .register(RegisterInput {
                password: Some("123".to_string()),
                ..RegisterInput::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, UserError::EmailRequired));

        let err = service
            .register(input("", None, Some("123")))
            .await
            .unwrap_err();
        assert!(matches!(err, UserError::EmailRequired));
        assert!(service.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_register_accepts_email_without_at_sign() {
        let service = service();

        let user = service
            .register(input("admin", None, Some("pw")))
            .await
            .unwrap();
        assert_eq!(user.email, "admin");
        assert_eq!(
            service.login("admin", "pw").await.unwrap(),
            LoginStatus::LoginOk
        );
    }

    #[tokio::test]
    async fn test_email_is_stored_and_matched_as_given() {
        let service = service();
        service
            .register(input(" a@ua ", None, Some("pw")))
            .await
            .unwrap();

        let stored = service.find_all().await.unwrap();
        assert_eq!(stored[0].email, " a@ua ");
        assert_eq!(
            service.login(" a@ua ", "pw").await.unwrap(),
            LoginStatus::LoginOk
        );
        assert_eq!(
            service.login("a@ua", "pw").await.unwrap(),
            LoginStatus::UserNotFound
        );
        assert_eq!(service.find_by_email("a@ua").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_authenticate_returns_matched_id() {
        let service = service();
        let id = add_example_user(&service).await;

        assert_eq!(
            service.authenticate("user@ua", "123").await.unwrap(),
            LoginOutcome::Authenticated(id)
        );
        assert_eq!(
            service.authenticate("user@ua", "000").await.unwrap(),
            LoginOutcome::ErrorPassword
        );
        assert_eq!(
            service.authenticate("", "123").await.unwrap(),
            LoginOutcome::UserNotFound
        );
    }

    #[tokio::test]
    async fn test_register_duplicate_email_fails_and_keeps_original() {
        let service = service();
        let id = add_example_user(&service).await;
        let original = service.find_by_id(id).await.unwrap();

        let err = service
            .register(input("user@ua", Some("Otro"), Some("12345678")))
            .await
            .unwrap_err();
        assert!(matches!(err, UserError::EmailTaken));
        assert!(err.is_validation());

        assert_eq!(service.find_all().await.unwrap().len(), 1);
        assert_eq!(service.find_by_id(id).await.unwrap(), original);
    }

    #[tokio::test]
    async fn test_register_returns_user_with_id() {
        let service = service();
        let registered = service
            .register(input("usuario.prueba@gmail.com", None, Some("12345678")))
            .await
            .unwrap();

        let stored = service.find_by_id(registered.id).await.unwrap();
        assert_eq!(stored, Some(registered));
    }

    #[tokio::test]
    async fn test_find_by_email_returns_user() {
        let service = service();
        let id = add_example_user(&service).await;

        let user = service.find_by_email("user@ua").await.unwrap().unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.email, "user@ua");
        assert_eq!(user.name.as_deref(), Some("Usuario Ejemplo"));
    }

    #[tokio::test]
    async fn test_lookups_of_missing_users_are_none() {
        let service = service();
        assert_eq!(service.find_by_id(UserId::new(99)).await.unwrap(), None);
        assert_eq!(service.find_by_email("nobody@ua").await.unwrap(), None);
        assert_eq!(service.find_by_email("").await.unwrap(), None);
    }

    #[test]
    fn test_login_status_display() {
        assert_eq!(LoginStatus::LoginOk.to_string(), "LOGIN_OK");
        assert_eq!(LoginStatus::ErrorPassword.to_string(), "ERROR_PASSWORD");
        assert_eq!(LoginStatus::UserNotFound.to_string(), "USER_NOT_FOUND");
        assert_eq!(
            serde_json::to_string(&LoginStatus::ErrorPassword).unwrap(),
            r#""ERROR_PASSWORD""#
        );
    }
}
