//! Login view.

use cbol_api_client::models::LoginRequest;
use cbol_core::route::Route;
use tracing::{error, info};

use crate::Outcome;
use crate::context::ViewContext;

const LOGIN_FAILED: &str = "Login failed";

/// Username/password draft. Kept across failed attempts.
#[derive(Debug, Clone, Default)]
pub struct LoginView {
    pub username: String,
    pub password: String,
    error: Option<String>,
    loading: bool,
}

impl LoginView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Message from the last failed attempt.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub async fn submit(&mut self, ctx: &ViewContext) -> Outcome {
        if self.username.trim().is_empty() || self.password.is_empty() {
            ctx.warning("Please enter your username and password");
            return Outcome::Invalid;
        }

        self.loading = true;
        let result = ctx
            .api
            .login(&LoginRequest {
                username: self.username.trim().to_string(),
                password: self.password.clone(),
            })
            .await;
        self.loading = false;

        let token = match result {
            Ok(resp) => resp.token,
            Err(e) => {
                let message = e.message_or(LOGIN_FAILED);
                info!(username = %self.username, error = %e, "login rejected");
                ctx.error(message.clone());
                self.error = Some(message);
                return Outcome::Failed;
            }
        };

        if let Err(e) = ctx.session().set_token(&token) {
            error!(error = %e, "could not persist session token");
            let message = format!("{LOGIN_FAILED}: {e}");
            ctx.error(message.clone());
            self.error = Some(message);
            return Outcome::Failed;
        }

        self.error = None;
        self.password.clear();
        ctx.navigate(Route::Dashboard);
        Outcome::Completed
    }
}
