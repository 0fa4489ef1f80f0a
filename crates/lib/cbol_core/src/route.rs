//! Console routes and the authentication guard in front of them.

use std::fmt;

use crate::session::Session;

/// A console view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Users,
    MyPage,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::Users => "/users",
            Route::MyPage => "/mypage",
        }
    }

    /// Map a path to a route: `/` lands on the dashboard, anything unknown
    /// falls back to the login view.
    pub fn from_path(path: &str) -> Route {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Dashboard,
            "/login" => Route::Login,
            "/dashboard" => Route::Dashboard,
            "/users" => Route::Users,
            "/mypage" => Route::MyPage,
            _ => Route::Login,
        }
    }

    /// Whether the view needs a session token.
    pub fn is_protected(self) -> bool {
        !matches!(self, Route::Login)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Performs navigation. The HTTP client uses this to force the login view
/// after a 401; views use it after login, logout and account deletion.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Resolve what should actually render for `requested`.
///
/// Only checks that a token is present. An expired token still passes until
/// the backend answers 401 and the client clears it.
pub fn guard(session: &Session, requested: Route) -> Route {
    if requested.is_protected() && !session.is_authenticated() {
        log::debug!("no session token, redirecting {requested} to {}", Route::Login);
        Route::Login
    } else {
        requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemoryTokenStore, Session};

    #[test]
    fn paths_map_to_routes() {
        assert_eq!(Route::from_path("/"), Route::Dashboard);
        assert_eq!(Route::from_path("/users"), Route::Users);
        assert_eq!(Route::from_path("/mypage/"), Route::MyPage);
        assert_eq!(Route::from_path("/nowhere"), Route::Login);
        assert_eq!(Route::MyPage.to_string(), "/mypage");
    }

    #[test]
    fn guard_redirects_without_token() {
        let session = Session::new(MemoryTokenStore::default()).unwrap();
        assert_eq!(guard(&session, Route::Users), Route::Login);
        assert_eq!(guard(&session, Route::Login), Route::Login);
    }

    #[test]
    fn guard_passes_any_present_token() {
        let session = Session::new(MemoryTokenStore::default()).unwrap();
        session.set_token("expired-or-not").unwrap();
        assert_eq!(guard(&session, Route::Users), Route::Users);
        assert_eq!(guard(&session, Route::MyPage), Route::MyPage);
    }
}
