//! Users Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::UsersConfig;
use crate::application::session::SessionManager;
use crate::application::user_service::UserService;
use crate::domain::repository::UserRepository;
use crate::presentation::handlers::{self, UsersAppState};

/// Create the Users router for any repository implementation
///
/// ## Arguments
/// * `repo` - user store (`PgUserRepository` or `InMemoryUserRepository`)
/// * `config` - session cookie and token settings
///
/// ## Routes
/// * `GET /users` - user listing, public
/// * `GET /users/{id}` - user detail, 404 for unknown ids
/// * `GET /users/{id}/account` - account page, 401 unless `{id}` is the session owner
/// * `POST /register` - 201 with the new user, 400/409 on validation failure
/// * `POST /login` - 200 and the session cookie, 401/404 otherwise
/// * `POST /logout` - 204 and a clearing cookie
///
/// ## Examples
/// ```rust
/// use users::{InMemoryUserRepository, UsersConfig, users_router};
///
/// let app: axum::Router =
///     users_router(InMemoryUserRepository::new(), UsersConfig::development());
/// ```
pub fn users_router<R>(repo: R, config: UsersConfig) -> Router
where
    R: UserRepository + Send + Sync + 'static,
{
    let state = UsersAppState {
        users: UserService::new(Arc::new(repo)),
        sessions: SessionManager::new(Arc::new(config)),
    };

    Router::new()
        .route("/users", get(handlers::list_users::<R>))
        .route("/users/{id}", get(handlers::user_detail::<R>))
        .route("/users/{id}/account", get(handlers::account_form::<R>))
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route("/logout", post(handlers::logout::<R>))
        .with_state(state)
}
