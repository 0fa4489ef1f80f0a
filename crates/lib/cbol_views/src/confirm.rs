//! Explicit confirmation step before irreversible actions.

use async_trait::async_trait;

/// What to ask the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    /// Whether clicking away / Escape may close the prompt. A dismissed
    /// prompt counts as "no".
    pub dismissible: bool,
}

/// Asks the user a yes/no question and waits for the answer.
#[async_trait]
pub trait ConfirmDialog: Send + Sync {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool;
}
