//! Create/edit user modal draft.

use cbol_api_client::models::{ModifyUserRequest, RegisterRequest, User};
use cbol_core::forms::{IdentityFields, PhoneInput};
use cbol_core::models::user::{Position, Role};
use cbol_core::validation::{ValidationError, require};

/// Password every newly registered account starts with.
pub const INITIAL_PASSWORD: &str = "cbol123";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserFormMode {
    Create,
    /// Editing the account currently named `username`.
    Edit { username: String },
}

/// One modal for both modes. In edit mode only role and position are meant
/// to be edited; identity fields ride along unchanged from the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
    mode: UserFormMode,
    pub identity: IdentityFields,
    pub phone: PhoneInput,
    pub role: Option<Role>,
    pub position: Option<Position>,
    /// Rank and phone exactly as the record had them. Edit mode sends these
    /// back so a rank outside [`Position`] or an odd phone format survives.
    stored_position: String,
    stored_phone: String,
}

impl UserForm {
    pub fn create() -> Self {
        Self {
            mode: UserFormMode::Create,
            identity: IdentityFields::default(),
            phone: PhoneInput::default(),
            role: None,
            position: None,
            stored_position: String::new(),
            stored_phone: String::new(),
        }
    }

    pub fn edit(user: &User) -> Self {
        Self {
            mode: UserFormMode::Edit {
                username: user.username.clone(),
            },
            identity: IdentityFields::from_record(
                &user.name,
                &user.english_name,
                &user.username,
                &user.email,
            ),
            phone: PhoneInput::parse(&user.phone_number),
            role: Some(user.role),
            position: user.position(),
            stored_position: user.position.clone(),
            stored_phone: user.phone_number.clone(),
        }
    }

    pub fn mode(&self) -> &UserFormMode {
        &self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, UserFormMode::Edit { .. })
    }

    /// Whether name/username/phone inputs are shown.
    pub fn shows_identity_fields(&self) -> bool {
        !self.is_edit()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.is_edit() {
            require("Name", &self.identity.name)?;
            require("Username", self.identity.username())?;
        }
        if self.role.is_none() {
            return Err(ValidationError::Required("Role"));
        }
        Ok(())
    }

    /// Body for `POST /auth/register`. `None` unless the form is in create
    /// mode and has a role.
    pub fn register_request(&self) -> Option<RegisterRequest> {
        if self.is_edit() {
            return None;
        }
        Some(RegisterRequest {
            name: self.identity.name.trim().to_string(),
            english_name: self.identity.english_name().to_string(),
            username: self.identity.username().trim().to_string(),
            password: INITIAL_PASSWORD.to_string(),
            role: self.role?,
            position: self.position,
            email: self.identity.email().to_string(),
            phone_number: self.phone.assemble(),
        })
    }

    /// Target username and body for `PUT /auth/modify/{username}`.
    pub fn modify_request(&self) -> Option<(String, ModifyUserRequest)> {
        let UserFormMode::Edit { username } = &self.mode else {
            return None;
        };
        Some((
            username.clone(),
            ModifyUserRequest {
                name: self.identity.name.clone(),
                english_name: self.identity.english_name().to_string(),
                username: self.identity.username().to_string(),
                password: None,
                role: self.role?,
                position: self
                    .position
                    .map(|p| p.label().to_string())
                    .unwrap_or_else(|| self.stored_position.clone()),
                email: self.identity.email().to_string(),
                phone_number: self.stored_phone.clone(),
            },
        ))
    }
}
