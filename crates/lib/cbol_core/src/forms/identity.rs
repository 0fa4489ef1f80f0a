//! Name, username and derived email fields.

/// Domain every staff email lives under.
pub const EMAIL_DOMAIN: &str = "cbol.com";

/// `{username}@cbol.com`.
pub fn derive_email(username: &str) -> String {
    format!("{username}@{EMAIL_DOMAIN}")
}

/// Upper-case the first character, leave the rest untouched.
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Name, english name, username and the email derived from it.
///
/// The email is read-only: the only way to change it is to change the
/// username, which always recomputes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityFields {
    pub name: String,
    english_name: String,
    username: String,
    email: String,
}

impl IdentityFields {
    /// Pre-fill from a stored record. The stored email is kept as-is until
    /// the username is edited.
    pub fn from_record(name: &str, english_name: &str, username: &str, email: &str) -> Self {
        Self {
            name: name.to_string(),
            english_name: english_name.to_string(),
            username: username.to_string(),
            email: email.to_string(),
        }
    }

    pub fn english_name(&self) -> &str {
        &self.english_name
    }

    pub fn set_english_name(&mut self, value: &str) {
        self.english_name = capitalize_first(value);
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Surrounding whitespace is dropped so username and email always agree.
    pub fn set_username(&mut self, value: &str) {
        let value = value.trim();
        self.username = value.to_string();
        self.email = derive_email(value);
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
