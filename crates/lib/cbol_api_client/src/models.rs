//! Request and response bodies for the backend's auth endpoints.

use cbol_core::models::user::{Position, Role};
use serde::{Deserialize, Serialize};

pub use cbol_core::models::user::User;

/// `POST /auth/login` body.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /auth/login` response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// `POST /auth/me/verify` body.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyPasswordRequest {
    pub password: String,
}

/// `PUT /auth/me/password` body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// `PUT /auth/me` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: String,
    #[serde(rename = "englishname")]
    pub english_name: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
}

/// `POST /auth/register` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    #[serde(rename = "englishname")]
    pub english_name: String,
    pub username: String,
    pub password: String,
    pub role: Role,
    pub position: Option<Position>,
    pub email: String,
    pub phone_number: String,
}

/// `PUT /auth/modify/{username}` body.
///
/// Identity fields are sent back unchanged from the record being edited;
/// `password: None` leaves the password alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyUserRequest {
    pub name: String,
    #[serde(rename = "englishname")]
    pub english_name: String,
    pub username: String,
    pub password: Option<String>,
    pub role: Role,
    /// Rank label as stored; may be one [`Position`] doesn't list.
    pub position: String,
    pub email: String,
    pub phone_number: String,
}
