//! User management: the staff table, row selection, the create/edit modal
//! and bulk deactivation.
//!
//! Mutating actions check the token's role claim first. That check only
//! spares the user a request the backend would refuse anyway.

pub mod form;

pub use form::{INITIAL_PASSWORD, UserForm, UserFormMode};

use std::collections::BTreeSet;

use cbol_api_client::models::User;
use tracing::{error, warn};

use crate::Outcome;
use crate::confirm::ConfirmPrompt;
use crate::context::ViewContext;

#[derive(Debug, Clone, Default)]
pub struct UserManagementView {
    users: Vec<User>,
    selected: BTreeSet<i64>,
    modal: Option<UserForm>,
    loading: bool,
}

impl UserManagementView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Replace the table with a fresh copy from the backend. On failure the
    /// previous rows stay.
    pub async fn fetch_users(&mut self, ctx: &ViewContext) -> Outcome {
        self.loading = true;
        let result = ctx.api.users().await;
        self.loading = false;

        match result {
            Ok(users) => {
                self.users = users;
                let present: BTreeSet<i64> = self.users.iter().map(|u| u.id).collect();
                self.selected.retain(|id| present.contains(id));
                Outcome::Completed
            }
            Err(e) => {
                error!(error = %e, "failed to fetch user list");
                ctx.error(e.message_or("Failed to load users"));
                Outcome::Failed
            }
        }
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    /// Toggle one row. Ids not in the table are ignored.
    pub fn toggle_select(&mut self, id: i64) {
        if !self.users.iter().any(|u| u.id == id) {
            return;
        }
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Select every row, or clear the selection if every row already is.
    pub fn toggle_select_all(&mut self) {
        if self.all_selected() {
            self.selected.clear();
        } else {
            self.selected = self.users.iter().map(|u| u.id).collect();
        }
    }

    pub fn all_selected(&self) -> bool {
        !self.users.is_empty() && self.selected.len() == self.users.len()
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// The floating "delete selected" bar.
    pub fn action_bar_visible(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Usernames of the selected rows, sorted and without duplicates.
    pub fn selected_usernames(&self) -> Vec<String> {
        self.users
            .iter()
            .filter(|u| self.selected.contains(&u.id))
            .map(|u| u.username.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    // -----------------------------------------------------------------------
    // Create / edit modal
    // -----------------------------------------------------------------------

    pub fn open_create(&mut self) {
        self.modal = Some(UserForm::create());
    }

    /// Open the modal in edit mode for row `id`. Returns `false` if there is
    /// no such row.
    pub fn open_edit(&mut self, id: i64) -> bool {
        match self.users.iter().find(|u| u.id == id) {
            Some(user) => {
                self.modal = Some(UserForm::edit(user));
                true
            }
            None => false,
        }
    }

    pub fn modal(&self) -> Option<&UserForm> {
        self.modal.as_ref()
    }

    pub fn modal_mut(&mut self) -> Option<&mut UserForm> {
        self.modal.as_mut()
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Submit the modal. Closes it and refreshes the table on success; keeps
    /// the draft on any failure.
    pub async fn save_user(&mut self, ctx: &ViewContext) -> Outcome {
        let Some(form) = &self.modal else {
            return Outcome::Invalid;
        };
        let action = if form.is_edit() { "edit users" } else { "register users" };
        if !require_admin(ctx, action) {
            return Outcome::Denied;
        }
        if let Err(e) = form.validate() {
            ctx.warning(e.to_string());
            return Outcome::Invalid;
        }

        let result = if let Some((username, body)) = form.modify_request() {
            ctx.api.modify_user(&username, &body).await
        } else if let Some(body) = form.register_request() {
            ctx.api.register(&body).await
        } else {
            return Outcome::Invalid;
        };

        if let Err(e) = result {
            warn!(error = %e, "saving user failed");
            ctx.error(e.message_or("Failed to save user"));
            return Outcome::Failed;
        }

        let message = if form.is_edit() { "User updated" } else { "User registered" };
        self.modal = None;
        ctx.success(message);
        self.fetch_users(ctx).await;
        Outcome::Completed
    }

    // -----------------------------------------------------------------------
    // Bulk deactivation
    // -----------------------------------------------------------------------

    /// Confirm, then deactivate every selected account in one request.
    pub async fn delete_selected(&mut self, ctx: &ViewContext) -> Outcome {
        if !require_admin(ctx, "delete users") {
            return Outcome::Denied;
        }
        let usernames = self.selected_usernames();
        if usernames.is_empty() {
            ctx.warning("Select the users to delete");
            return Outcome::Invalid;
        }

        let prompt = ConfirmPrompt {
            title: "Delete users".into(),
            message: format!("Delete {} selected user(s)?", usernames.len()),
            confirm_label: "Delete".into(),
            dismissible: false,
        };
        if !ctx.confirm.confirm(&prompt).await {
            return Outcome::Cancelled;
        }

        if let Err(e) = ctx.api.resign(&usernames).await {
            error!(error = %e, count = usernames.len(), "bulk delete failed");
            ctx.error(e.message_or("Failed to delete users"));
            return Outcome::Failed;
        }

        self.selected.clear();
        ctx.success(format!("Deleted {} user(s)", usernames.len()));
        self.fetch_users(ctx).await;
        Outcome::Completed
    }
}

/// Advisory role gate: warns and returns `false` unless the token claims
/// `ADMIN`.
fn require_admin(ctx: &ViewContext, action: &str) -> bool {
    if ctx.claims().is_some_and(|c| c.is_admin()) {
        return true;
    }
    ctx.warning(format!("Only administrators can {action}"));
    false
}
