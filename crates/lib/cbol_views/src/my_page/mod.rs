//! My Page: the logged-in user's own profile.
//!
//! Optionally sits behind a password re-check. Once open it shows the
//! profile and offers three modals: edit profile, change password, and
//! delete account.

pub mod forms;

pub use forms::{PasswordForm, ProfileForm};

use cbol_api_client::models::User;
use cbol_core::route::Route;
use tracing::{error, warn};

use crate::Outcome;
use crate::confirm::ConfirmPrompt;
use crate::context::ViewContext;

/// Step-up gate in front of the profile.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Gate {
    /// Waiting for the current password.
    Locked { password: String },
    Open,
}

#[derive(Debug, Clone)]
pub struct MyPageView {
    gate: Gate,
    profile: Option<User>,
    loading: bool,
    edit_profile: Option<ProfileForm>,
    change_password: Option<PasswordForm>,
}

impl MyPageView {
    /// `require_verification` puts the profile behind a password re-check.
    pub fn new(require_verification: bool) -> Self {
        let gate = if require_verification {
            Gate::Locked {
                password: String::new(),
            }
        } else {
            Gate::Open
        };
        Self {
            gate,
            profile: None,
            loading: false,
            edit_profile: None,
            change_password: None,
        }
    }

    /// Initial load: fetches the profile unless the gate is locked.
    pub async fn mount(&mut self, ctx: &ViewContext) -> Outcome {
        if self.is_locked() {
            return Outcome::Cancelled;
        }
        self.load_profile(ctx).await
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.gate, Gate::Locked { .. })
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn profile(&self) -> Option<&User> {
        self.profile.as_ref()
    }

    // -----------------------------------------------------------------------
    // Password re-check
    // -----------------------------------------------------------------------

    pub fn set_verify_password(&mut self, value: &str) {
        if let Gate::Locked { password } = &mut self.gate {
            *password = value.to_string();
        }
    }

    /// Submit the re-check. Only a successful check opens the gate and
    /// fetches the profile.
    pub async fn verify(&mut self, ctx: &ViewContext) -> Outcome {
        let password = match &self.gate {
            Gate::Open => return Outcome::Completed,
            Gate::Locked { password } => password.clone(),
        };
        if password.is_empty() {
            ctx.warning("Please enter your password");
            return Outcome::Invalid;
        }

        self.loading = true;
        let result = ctx.api.verify_password(&password).await;
        self.loading = false;

        if let Err(e) = result {
            warn!(error = %e, "password re-check failed");
            ctx.error("Password verification failed");
            return Outcome::Failed;
        }

        ctx.success("Password verified");
        self.gate = Gate::Open;
        self.load_profile(ctx).await
    }

    /// Back out of the re-check.
    pub fn cancel_verification(&mut self, ctx: &ViewContext) -> Outcome {
        if self.is_locked() {
            ctx.navigate(Route::Dashboard);
        }
        Outcome::Cancelled
    }

    pub async fn load_profile(&mut self, ctx: &ViewContext) -> Outcome {
        self.loading = true;
        let result = ctx.api.me().await;
        self.loading = false;

        match result {
            Ok(user) => {
                self.profile = Some(user);
                Outcome::Completed
            }
            Err(e) => {
                error!(error = %e, "failed to load profile");
                ctx.error(e.message_or("Failed to load profile"));
                Outcome::Failed
            }
        }
    }

    // -----------------------------------------------------------------------
    // Edit profile
    // -----------------------------------------------------------------------

    /// Open the edit modal pre-filled from the loaded profile. Returns
    /// `false` when there is nothing loaded to edit.
    pub fn open_edit_profile(&mut self) -> bool {
        match (&self.gate, &self.profile) {
            (Gate::Open, Some(user)) => {
                self.edit_profile = Some(ProfileForm::from_user(user));
                true
            }
            _ => false,
        }
    }

    pub fn edit_profile_form(&mut self) -> Option<&mut ProfileForm> {
        self.edit_profile.as_mut()
    }

    pub fn close_edit_profile(&mut self) {
        self.edit_profile = None;
    }

    pub async fn save_profile(&mut self, ctx: &ViewContext) -> Outcome {
        let Some(form) = &self.edit_profile else {
            return Outcome::Invalid;
        };
        if let Err(e) = form.validate() {
            ctx.error(e.to_string());
            return Outcome::Invalid;
        }

        if let Err(e) = ctx.api.update_me(&form.to_request()).await {
            warn!(error = %e, "profile update failed");
            ctx.error(e.message_or("Failed to update profile"));
            return Outcome::Failed;
        }

        self.edit_profile = None;
        ctx.success("Profile updated");
        self.load_profile(ctx).await;
        Outcome::Completed
    }

    // -----------------------------------------------------------------------
    // Change password
    // -----------------------------------------------------------------------

    pub fn open_change_password(&mut self) -> bool {
        if self.is_locked() {
            return false;
        }
        self.change_password = Some(PasswordForm::default());
        true
    }

    pub fn change_password_form(&mut self) -> Option<&mut PasswordForm> {
        self.change_password.as_mut()
    }

    pub fn close_change_password(&mut self) {
        self.change_password = None;
    }

    pub async fn change_password(&mut self, ctx: &ViewContext) -> Outcome {
        let Some(form) = &self.change_password else {
            return Outcome::Invalid;
        };
        if let Err(e) = form.validate() {
            ctx.error(e.to_string());
            return Outcome::Invalid;
        }

        if let Err(e) = ctx.api.change_password(&form.to_request()).await {
            warn!(error = %e, "password change failed");
            ctx.error(e.message_or("Failed to change password"));
            return Outcome::Failed;
        }

        self.change_password = None;
        ctx.success("Password changed");
        Outcome::Completed
    }

    // -----------------------------------------------------------------------
    // Delete account
    // -----------------------------------------------------------------------

    /// Confirm, then delete the account, end the session and go to login.
    pub async fn delete_account(&mut self, ctx: &ViewContext) -> Outcome {
        if self.is_locked() {
            return Outcome::Denied;
        }

        let prompt = ConfirmPrompt {
            title: "Delete account".into(),
            message: "Your account will be deleted permanently. This cannot be undone.".into(),
            confirm_label: "Delete".into(),
            dismissible: false,
        };
        if !ctx.confirm.confirm(&prompt).await {
            return Outcome::Cancelled;
        }

        if let Err(e) = ctx.api.delete_me().await {
            error!(error = %e, "account deletion failed");
            ctx.error(e.message_or("Failed to delete account"));
            return Outcome::Failed;
        }

        if let Err(e) = ctx.session().clear_token() {
            warn!(error = %e, "failed to remove persisted session token");
        }
        self.profile = None;
        ctx.success("Your account has been deleted");
        ctx.navigate(Route::Login);
        Outcome::Completed
    }
}
