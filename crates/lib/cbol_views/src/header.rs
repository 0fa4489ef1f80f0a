//! Header bar: who is logged in, and logout.

use cbol_core::route::Route;
use cbol_core::session::Session;
use tracing::warn;

use crate::Outcome;
use crate::context::ViewContext;

/// Greeting for the header, e.g. `홍길동 (Gildong) 과장`. `None` when there is
/// no token or its payload doesn't decode.
pub fn greeting(session: &Session) -> Option<String> {
    session.claims().map(|claims| claims.greeting())
}

/// End the session and return to the login view.
pub fn logout(ctx: &ViewContext) -> Outcome {
    if let Err(e) = ctx.session().clear_token() {
        warn!(error = %e, "failed to remove persisted session token");
    }
    ctx.info("Logged out");
    ctx.navigate(Route::Login);
    Outcome::Completed
}
