//! My Page modal drafts.

use cbol_api_client::models::{ChangePasswordRequest, UpdateProfileRequest, User};
use cbol_core::forms::{IdentityFields, PhoneInput};
use cbol_core::validation::{ValidationError, check_password_change, require, validate_password};

/// "Edit profile" draft, pre-filled from the fetched record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileForm {
    pub identity: IdentityFields,
    pub phone: PhoneInput,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            identity: IdentityFields::from_record(
                &user.name,
                &user.english_name,
                &user.username,
                &user.email,
            ),
            phone: PhoneInput::parse(&user.phone_number),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("Name", &self.identity.name)?;
        require("Username", self.identity.username())
    }

    pub fn to_request(&self) -> UpdateProfileRequest {
        UpdateProfileRequest {
            name: self.identity.name.trim().to_string(),
            english_name: self.identity.english_name().to_string(),
            username: self.identity.username().trim().to_string(),
            email: self.identity.email().to_string(),
            phone_number: self.phone.assemble(),
        }
    }
}

/// "Change password" draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

impl PasswordForm {
    /// Live hint: the new password differs from the current one.
    pub fn is_different(&self) -> bool {
        self.current != self.new
    }

    /// Live hint: the new password satisfies the policy.
    pub fn is_valid(&self) -> bool {
        validate_password(&self.new)
    }

    /// Live hint: confirmation matches.
    pub fn is_match(&self) -> bool {
        self.new == self.confirm
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_password_change(&self.current, &self.new, &self.confirm)
    }

    pub fn to_request(&self) -> ChangePasswordRequest {
        ChangePasswordRequest {
            current_password: self.current.clone(),
            new_password: self.new.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cbol_core::models::user::Role;

    fn user() -> User {
        User {
            id: 3,
            name: "홍길동".into(),
            english_name: "Gildong".into(),
            username: "gdhong".into(),
            role: Role::User,
            position: "대리".into(),
            phone_number: "010-1234-5678".into(),
            email: "gildong.hong@cbol.com".into(),
        }
    }

    #[test]
    fn prefill_keeps_record_values() {
        let form = ProfileForm::from_user(&user());
        assert_eq!(
            form.to_request(),
            UpdateProfileRequest {
                name: "홍길동".into(),
                english_name: "Gildong".into(),
                username: "gdhong".into(),
                email: "gildong.hong@cbol.com".into(),
                phone_number: "010-1234-5678".into(),
            }
        );
    }

    #[test]
    fn username_edit_rederives_email_in_request() {
        let mut form = ProfileForm::from_user(&user());
        form.identity.set_username("jdoe");
        form.phone.set_first("9999");
        assert_eq!(form.to_request().email, "jdoe@cbol.com");
        assert_eq!(form.to_request().phone_number, "010-9999-5678");
    }

    #[test]
    fn blank_name_or_username_is_rejected() {
        let mut form = ProfileForm::from_user(&user());
        form.identity.name = " ".into();
        assert_eq!(form.validate(), Err(ValidationError::Required("Name")));

        let mut form = ProfileForm::from_user(&user());
        form.identity.set_username("");
        assert_eq!(form.validate(), Err(ValidationError::Required("Username")));
    }

    #[test]
    fn live_hints_track_fields() {
        let mut form = PasswordForm {
            current: "old$pass1".into(),
            new: "old$pass1".into(),
            confirm: String::new(),
        };
        assert!(!form.is_different());
        assert!(form.is_valid());
        assert!(!form.is_match());

        form.new = "new$pass1".into();
        form.confirm = "new$pass1".into();
        assert!(form.is_different() && form.is_valid() && form.is_match());
        assert_eq!(form.validate(), Ok(()));
    }
}
