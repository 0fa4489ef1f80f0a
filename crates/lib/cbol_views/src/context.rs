//! Collaborators every view action needs.

use std::sync::Arc;

use cbol_api_client::ApiClient;
use cbol_core::models::auth::Claims;
use cbol_core::route::{Navigator, Route};
use cbol_core::session::Session;

use crate::confirm::ConfirmDialog;
use crate::notify::{Notice, NoticeLevel, Notifier};

#[derive(Clone)]
pub struct ViewContext {
    pub api: ApiClient,
    pub navigator: Arc<dyn Navigator>,
    pub notifier: Arc<dyn Notifier>,
    pub confirm: Arc<dyn ConfirmDialog>,
}

impl ViewContext {
    pub fn new(
        api: ApiClient,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
        confirm: Arc<dyn ConfirmDialog>,
    ) -> Self {
        Self {
            api,
            navigator,
            notifier,
            confirm,
        }
    }

    /// The session the API client authenticates with.
    pub fn session(&self) -> &Session {
        self.api.session()
    }

    /// Current display claims, if a decodable token is present.
    pub fn claims(&self) -> Option<Claims> {
        self.session().claims()
    }

    pub fn navigate(&self, route: Route) {
        self.navigator.navigate(route);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notifier.notify(Notice::new(NoticeLevel::Success, message));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notifier.notify(Notice::new(NoticeLevel::Info, message));
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.notifier.notify(Notice::new(NoticeLevel::Warning, message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notifier.notify(Notice::new(NoticeLevel::Error, message));
    }
}
