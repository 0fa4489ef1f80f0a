//! Authentication models.

use serde::{Deserialize, Serialize};

use super::user::Role;
use super::{lenient_opt_text, lenient_text};

/// Display claims carried in the session token payload.
///
/// Decoded without signature verification: good for greeting the user and
/// hiding actions they can't perform, never for deciding what they may do.
/// The backend re-checks every request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(
        default,
        rename = "englishname",
        alias = "englishName",
        deserialize_with = "lenient_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub english_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub position: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub role: Option<String>,
}

impl Claims {
    /// Whether the (unverified) role claim is `ADMIN`.
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(Role::Admin.as_str())
    }

    /// Header text: `name (englishName) position`, skipping absent parts.
    pub fn greeting(&self) -> String {
        let mut out = self.name.clone();
        if let Some(english) = self.english_name.as_deref().filter(|s| !s.is_empty()) {
            out.push_str(&format!(" ({english})"));
        }
        if let Some(position) = self.position.as_deref().filter(|s| !s.is_empty()) {
            out.push(' ');
            out.push_str(position);
        }
        out.trim_start().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(role: Option<&str>) -> Claims {
        Claims {
            name: "홍길동".into(),
            english_name: Some("Gildong".into()),
            position: Some("과장".into()),
            role: role.map(str::to_string),
        }
    }

    #[test]
    fn only_exact_admin_role_is_admin() {
        assert!(claims(Some("ADMIN")).is_admin());
        assert!(!claims(Some("admin")).is_admin());
        assert!(!claims(Some("USER")).is_admin());
        assert!(!claims(None).is_admin());
    }

    #[test]
    fn greeting_includes_optional_parts() {
        assert_eq!(claims(None).greeting(), "홍길동 (Gildong) 과장");

        let bare = Claims {
            name: "Kim".into(),
            ..Claims::default()
        };
        assert_eq!(bare.greeting(), "Kim");
    }
}
