//! Session Context
//!
//! The logged-in user of the current request, resolved from the session
//! cookie and handed to handlers as a plain value.

use std::convert::Infallible;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;

use crate::application::session::SessionManager;
use crate::domain::value_object::user_id::UserId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionContext {
    user_id: Option<UserId>,
}

impl SessionContext {
    /// No one is logged in
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn logged_in(user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    pub fn current_user_id(&self) -> Option<UserId> {
        self.user_id
    }
}

/// Never rejects: a missing, expired or forged cookie is an anonymous session.
impl<S> FromRequestParts<S> for SessionContext
where
    SessionManager: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let sessions = SessionManager::from_ref(state);
        let user_id =
            platform::cookie::extract_cookie(&parts.headers, &sessions.config().session_cookie_name)
                .and_then(|token| sessions.resolve(&token));

        Ok(Self { user_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::UsersConfig;
    use axum::http::{Request, header};
    use std::sync::Arc;

    async fn extract(sessions: &SessionManager, cookie: Option<&str>) -> SessionContext {
        let mut builder = Request::builder().uri("/users");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let (mut parts, ()) = builder.body(()).unwrap().into_parts();
        SessionContext::from_request_parts(&mut parts, sessions)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_resolves_signed_cookie() {
        let sessions = SessionManager::new(Arc::new(UsersConfig::development()));
        let token = sessions.issue(UserId::new(4));

        let session = extract(&sessions, Some(&format!("todo_session={token}"))).await;
        assert_eq!(session, SessionContext::logged_in(UserId::new(4)));
    }

    #[tokio::test]
    async fn test_missing_or_forged_cookie_is_anonymous() {
        let sessions = SessionManager::new(Arc::new(UsersConfig::development()));

        assert_eq!(extract(&sessions, None).await, SessionContext::anonymous());
        assert_eq!(
            extract(&sessions, Some("todo_session=4.9999999999.AAAA")).await,
            SessionContext::anonymous()
        );
        assert_eq!(
            extract(&sessions, Some("other=value")).await.current_user_id(),
            None
        );
    }
}
