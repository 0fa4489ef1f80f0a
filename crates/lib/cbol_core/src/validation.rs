//! Local validation run before any request leaves the console.
//!
//! These checks are advisory: the backend enforces the same rules.

use thiserror::Error;

/// Symbols the password policy accepts (and requires at least one of).
pub const PASSWORD_SYMBOLS: &str = "@$!%*#?&";

/// Minimum password length.
pub const PASSWORD_MIN_LEN: usize = 8;

/// A local validation failure. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("Please fill in all password fields")]
    MissingPasswordFields,

    #[error("The new password must differ from the current password")]
    PasswordUnchanged,

    #[error(
        "Passwords must be at least 8 characters and include a letter, a digit and one of @$!%*#?&"
    )]
    WeakPassword,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Whether `password` satisfies the policy: at least [`PASSWORD_MIN_LEN`]
/// characters drawn only from ASCII letters, digits and [`PASSWORD_SYMBOLS`],
/// with at least one of each class.
pub fn validate_password(password: &str) -> bool {
    let mut letter = false;
    let mut digit = false;
    let mut symbol = false;
    let mut len = 0usize;

    for c in password.chars() {
        len += 1;
        if c.is_ascii_alphabetic() {
            letter = true;
        } else if c.is_ascii_digit() {
            digit = true;
        } else if PASSWORD_SYMBOLS.contains(c) {
            symbol = true;
        } else {
            return false;
        }
    }

    len >= PASSWORD_MIN_LEN && letter && digit && symbol
}

/// Reject blank (empty or whitespace-only) required fields.
pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(())
    }
}

/// Check a password change request in the order the user sees the messages:
/// presence, difference from the current password, policy, confirmation.
pub fn check_password_change(
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<(), ValidationError> {
    if current.is_empty() || new.is_empty() || confirm.is_empty() {
        return Err(ValidationError::MissingPasswordFields);
    }
    if current == new {
        return Err(ValidationError::PasswordUnchanged);
    }
    if !validate_password(new) {
        return Err(ValidationError::WeakPassword);
    }
    if new != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_policy_examples() {
        assert!(!validate_password("abc12345"));
        assert!(validate_password("abc123$5"));
        assert!(!validate_password("ab$1"));
    }

    #[test]
    fn password_needs_every_class() {
        assert!(!validate_password("abcdefg$"));
        assert!(!validate_password("1234567$"));
        assert!(!validate_password("abcd1234"));
        assert!(validate_password("A1@aaaaa"));
    }

    #[test]
    fn password_rejects_characters_outside_the_set() {
        assert!(!validate_password("abc123$5 "));
        assert!(!validate_password("abc123$5^"));
        assert!(!validate_password("비밀번호123$abc"));
        assert!(!validate_password(""));
    }

    #[test]
    fn password_length_counts_characters() {
        assert!(!validate_password("a1$aaaa"));
        assert!(validate_password("a1$aaaaa"));
    }

    #[test]
    fn require_rejects_blank() {
        assert_eq!(require("Name", "  "), Err(ValidationError::Required("Name")));
        assert_eq!(require("Name", "Kim"), Ok(()));
        assert_eq!(
            ValidationError::Required("Username").to_string(),
            "Username is required"
        );
    }

    #[test]
    fn password_change_checks_in_order() {
        assert_eq!(
            check_password_change("", "abc123$5", "abc123$5"),
            Err(ValidationError::MissingPasswordFields)
        );
        assert_eq!(
            check_password_change("abc123$5", "abc123$5", "abc123$5"),
            Err(ValidationError::PasswordUnchanged)
        );
        assert_eq!(
            check_password_change("old", "weak", "weak"),
            Err(ValidationError::WeakPassword)
        );
        assert_eq!(
            check_password_change("old", "abc123$5", "abc123$6"),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(check_password_change("old", "abc123$5", "abc123$5"), Ok(()));
    }
}
