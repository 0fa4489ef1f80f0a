//! # cbol_views
//!
//! View-models for the admin console. Each view owns its form drafts and
//! loading flags, validates locally, calls the backend through
//! [`cbol_api_client::ApiClient`], and reports results through the
//! [`Notifier`]. Actions never return errors: they return an [`Outcome`]
//! and leave the view ready for another attempt.

pub mod confirm;
pub mod context;
pub mod header;
pub mod login;
pub mod my_page;
pub mod notify;
pub mod users;

pub use confirm::{ConfirmDialog, ConfirmPrompt};
pub use context::ViewContext;
pub use notify::{Notice, NoticeLevel, Notifier};

/// What a view action ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The request went through.
    Completed,
    /// Local validation failed; nothing was sent.
    Invalid,
    /// The role check failed; nothing was sent.
    Denied,
    /// The user backed out at a confirmation step.
    Cancelled,
    /// The backend (or the transport) reported an error.
    Failed,
}

impl Outcome {
    pub fn is_completed(self) -> bool {
        self == Outcome::Completed
    }
}
