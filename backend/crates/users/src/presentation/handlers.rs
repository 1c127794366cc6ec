//! HTTP Handlers

use axum::Json;
use axum::extract::{FromRef, Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::application::session::SessionManager;
use crate::application::user_service::{LoginOutcome, LoginStatus, RegisterInput, UserService};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::{UserError, UserResult};
use crate::presentation::dto::{
    AccountModel, LoginRequest, LoginResponse, RegisterRequest, UserDetailModel, UserListModel,
    UserResponse, View,
};
use crate::presentation::session::SessionContext;

pub const ACCOUNT_FORM_TEMPLATE: &str = "account_form";
pub const USER_LIST_TEMPLATE: &str = "user_list";
pub const USER_DETAIL_TEMPLATE: &str = "user_detail";

/// Shared state for user handlers
pub struct UsersAppState<R>
where
    R: UserRepository,
{
    pub users: UserService<R>,
    pub sessions: SessionManager,
}

impl<R> Clone for UsersAppState<R>
where
    R: UserRepository,
{
    fn clone(&self) -> Self {
        Self {
            users: self.users.clone(),
            sessions: self.sessions.clone(),
        }
    }
}

impl<R> FromRef<UsersAppState<R>> for SessionManager
where
    R: UserRepository,
{
    fn from_ref(state: &UsersAppState<R>) -> Self {
        state.sessions.clone()
    }
}

// ============================================================================
// Pages
// ============================================================================

/// GET /users/{id}/account
///
/// An id that is not a number never matches the session, so it is
/// rejected the same way as someone else's id.
pub async fn account_form<R>(
    State(state): State<UsersAppState<R>>,
    Path(user_id): Path<String>,
    session: SessionContext,
) -> UserResult<Json<View<AccountModel>>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let user_id: UserId = user_id.parse().map_err(|_| UserError::NotLoggedIn)?;
    ensure_session_owner(&session, user_id)?;

    let user = state.users.find_by_id(user_id).await?;

    Ok(Json(View::new(
        ACCOUNT_FORM_TEMPLATE,
        AccountModel {
            user: user.map(UserResponse::from),
        },
    )))
}

/// GET /users
///
/// Public: anyone may list users.
pub async fn list_users<R>(
    State(state): State<UsersAppState<R>>,
    session: SessionContext,
) -> UserResult<Json<View<UserListModel>>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let users = state.users.find_all().await?;
    let user = session_user(&state.users, &session).await?;

    Ok(Json(View::new(
        USER_LIST_TEMPLATE,
        UserListModel {
            users: users.into_iter().map(UserResponse::from).collect(),
            user,
        },
    )))
}

/// GET /users/{id}
///
/// An id that is not a number names no user (404).
pub async fn user_detail<R>(
    State(state): State<UsersAppState<R>>,
    Path(user_id): Path<String>,
    session: SessionContext,
) -> UserResult<Json<View<UserDetailModel>>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let user_id: UserId = user_id.parse().map_err(|_| UserError::UserNotFound)?;
    let displayed_user = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or(UserError::UserNotFound)?;
    let user = session_user(&state.users, &session).await?;

    Ok(Json(View::new(
        USER_DETAIL_TEMPLATE,
        UserDetailModel {
            displayed_user: displayed_user.into(),
            user,
        },
    )))
}

// ============================================================================
// Register / Login / Logout
// ============================================================================

/// POST /register
pub async fn register<R>(
    State(state): State<UsersAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> UserResult<(StatusCode, Json<UserResponse>)>
where
    R: UserRepository + Send + Sync + 'static,
{
    let input = RegisterInput {
        email: req.email,
        name: req.name,
        password: req.password,
    };

    let user = state.users.register(input).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// POST /login
///
/// On success the session cookie is set; the other outcomes map to 401/404.
pub async fn login<R>(
    State(state): State<UsersAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> UserResult<Response>
where
    R: UserRepository + Send + Sync + 'static,
{
    let user_id = match state.users.authenticate(&req.email, &req.password).await? {
        LoginOutcome::Authenticated(user_id) => user_id,
        LoginOutcome::ErrorPassword => return Err(UserError::InvalidPassword),
        LoginOutcome::UserNotFound => return Err(UserError::UserNotFound),
    };

    let token = state.sessions.issue(user_id);
    let cookie = state.sessions.config().session_cookie().build_set_cookie(&token);

    tracing::info!(user_id = %user_id, "User logged in");

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            status: LoginStatus::LoginOk,
            user_id: user_id.value(),
        }),
    )
        .into_response())
}

/// POST /logout
pub async fn logout<R>(State(state): State<UsersAppState<R>>) -> impl IntoResponse
where
    R: UserRepository + Send + Sync + 'static,
{
    let cookie = state.sessions.config().session_cookie().build_delete_cookie();

    (StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)])
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Only the logged-in owner of an account may open its pages
pub fn ensure_session_owner(session: &SessionContext, user_id: UserId) -> UserResult<()> {
    if session.current_user_id() == Some(user_id) {
        Ok(())
    } else {
        Err(UserError::NotLoggedIn)
    }
}

/// The session owner, for the navigation bar
async fn session_user<R>(
    users: &UserService<R>,
    session: &SessionContext,
) -> UserResult<Option<UserResponse>>
where
    R: UserRepository,
{
    let Some(user_id) = session.current_user_id() else {
        return Ok(None);
    };

    Ok(users.find_by_id(user_id).await?.map(UserResponse::from))
}
