//! API DTOs and view models

use serde::{Deserialize, Serialize};

use crate::application::user_service::{LoginStatus, UserData};

// ============================================================================
// Views
// ============================================================================

/// A rendered page: the template to use and the values it is rendered with
#[derive(Debug, Clone, Serialize)]
pub struct View<M> {
    pub template: &'static str,
    pub model: M,
}

impl<M> View<M> {
    pub fn new(template: &'static str, model: M) -> Self {
        Self { template, model }
    }
}

/// User as exposed to clients (never includes the password)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
}

impl From<UserData> for UserResponse {
    fn from(user: UserData) -> Self {
        Self {
            id: user.id.value(),
            email: user.email,
            name: user.name,
        }
    }
}

/// Account-edit page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountModel {
    pub user: Option<UserResponse>,
}

/// User directory
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListModel {
    pub users: Vec<UserResponse>,
    /// Logged-in user, for the navigation bar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
}

/// User detail page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetailModel {
    pub displayed_user: UserResponse,
    /// Logged-in user, for the navigation bar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
}

// ============================================================================
// Register
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

// ============================================================================
// Login
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub status: LoginStatus,
    pub user_id: i64,
}
