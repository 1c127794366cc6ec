//! PostgreSQL Repository Implementation

use sqlx::PgPool;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email, user_id::UserId, user_password::UserPassword,
};
use crate::error::{UserError, UserResult};

/// PostgreSQL unique_violation
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL-backed user store
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUserRepository {
    async fn create(&self, user: NewUser) -> UserResult<User> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (email, name, password)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(user.email.as_str())
        .bind(user.name.as_deref())
        .bind(user.password.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(user.with_id(UserId::new(id)))
    }

    async fn find_by_id(&self, user_id: UserId) -> UserResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, name, password
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn find_by_email(&self, email: &Email) -> UserResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, name, password
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn find_all(&self) -> UserResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, name, password
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(UserRow::into_user).collect())
    }
}

/// A concurrent registration can pass the service's duplicate check; the
/// UNIQUE constraint then reports it here.
fn map_insert_error(err: sqlx::Error) -> UserError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) => {
            UserError::EmailTaken
        }
        _ => UserError::Database(err),
    }
}

// ============================================================================
// Row types
// ============================================================================

/// Storage record of the `users` table
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    email: String,
    name: Option<String>,
    password: String,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            id: UserId::new(self.id),
            email: Email::from_db(self.email),
            name: self.name,
            password: UserPassword::from_db(self.password),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_maps_to_user() {
        let row = UserRow {
            id: 5,
            email: "user@ua".to_string(),
            name: Some("Usuario Ejemplo".to_string()),
            password: "123".to_string(),
        };

        let user = row.into_user();
        assert_eq!(user.id, UserId::new(5));
        assert_eq!(user.email.as_str(), "user@ua");
        assert_eq!(user.name.as_deref(), Some("Usuario Ejemplo"));
        assert!(user.password_matches("123"));
    }

    #[test]
    fn test_non_constraint_errors_stay_database_errors() {
        assert!(matches!(
            map_insert_error(sqlx::Error::RowNotFound),
            UserError::Database(_)
        ));
    }
}
