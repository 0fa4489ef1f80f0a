//! Staff directory records.
//!
//! The backend owns these; the console only ever holds the copy returned by
//! the latest fetch.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::null_as_empty;

/// Account role. The backend is the only authority that enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub const ALL: &[Role] = &[Role::User, Role::Admin];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// Organizational rank, lowest first. Serialized with the labels the backend
/// stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "인턴")]
    Intern,
    #[serde(rename = "수습")]
    Probation,
    #[serde(rename = "사원")]
    Staff,
    #[serde(rename = "주임")]
    SeniorStaff,
    #[serde(rename = "대리")]
    AssistantManager,
    #[serde(rename = "과장")]
    Manager,
    #[serde(rename = "차장")]
    DeputyGeneralManager,
    #[serde(rename = "부장")]
    GeneralManager,
    #[serde(rename = "소장")]
    Director,
}

impl Position {
    pub const ALL: &[Position] = &[
        Position::Intern,
        Position::Probation,
        Position::Staff,
        Position::SeniorStaff,
        Position::AssistantManager,
        Position::Manager,
        Position::DeputyGeneralManager,
        Position::GeneralManager,
        Position::Director,
    ];

    /// Label as stored by the backend.
    pub fn label(self) -> &'static str {
        match self {
            Position::Intern => "인턴",
            Position::Probation => "수습",
            Position::Staff => "사원",
            Position::SeniorStaff => "주임",
            Position::AssistantManager => "대리",
            Position::Manager => "과장",
            Position::DeputyGeneralManager => "차장",
            Position::GeneralManager => "부장",
            Position::Director => "소장",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Position {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Position::ALL
            .iter()
            .copied()
            .find(|p| p.label() == s || format!("{p:?}").eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// Returned when parsing a [`Role`] or [`Position`] from free text fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown value: {0}")]
pub struct UnknownVariant(pub String);

/// A staff directory entry as returned by `GET /auth/me` and `GET /auth/users`.
///
/// `position` stays a plain string so a rank the console doesn't know about
/// never fails a whole list fetch; forms parse it into [`Position`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(
        rename = "englishname",
        alias = "englishName",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub english_name: String,
    pub username: String,
    pub role: Role,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub position: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone_number: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Typed position, if the stored label is a known rank.
    pub fn position(&self) -> Option<Position> {
        self.position.parse().ok()
    }
}
