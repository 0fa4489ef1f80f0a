//! Session context.
//!
//! One [`Session`] is built at startup and shared (behind an `Arc`) with the
//! HTTP client, the route guard and every view. Nothing else touches token
//! storage directly.

pub mod store;

pub use store::{FileTokenStore, MemoryTokenStore, TOKEN_KEY, TokenStore, default_session_path};

use log::info;
use thiserror::Error;
use tokio::sync::watch;

use crate::claims::decode_claims;
use crate::models::auth::Claims;

/// Token storage failures.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session storage I/O: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session storage is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// The current bearer token plus a change feed.
///
/// Reads come from the in-memory copy; writes go through to the store first.
/// Subscribers see every change, which is how views re-render on login,
/// logout or a 401.
pub struct Session {
    store: Box<dyn TokenStore>,
    state: watch::Sender<Option<String>>,
}

impl Session {
    /// Build a session, loading whatever token the store already holds.
    pub fn new(store: impl TokenStore + 'static) -> Result<Self, SessionError> {
        let token = store.load()?;
        let (state, _) = watch::channel(token);
        Ok(Self {
            store: Box::new(store),
            state,
        })
    }

    /// A session that forgets its token on exit.
    pub fn in_memory() -> Self {
        let (state, _) = watch::channel(None);
        Self {
            store: Box::new(MemoryTokenStore::default()),
            state,
        }
    }

    pub fn token(&self) -> Option<String> {
        self.state.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_some()
    }

    pub fn set_token(&self, token: &str) -> Result<(), SessionError> {
        self.store.save(token)?;
        self.state.send_replace(Some(token.to_string()));
        info!("session started");
        Ok(())
    }

    /// Drop the token. Idempotent. The in-memory copy is cleared even if the
    /// store fails, so a failed write never keeps a rejected token alive.
    pub fn clear_token(&self) -> Result<(), SessionError> {
        let removed = self.store.remove();
        if self.state.send_if_modified(|token| token.take().is_some()) {
            info!("session cleared");
        }
        removed
    }

    /// Display claims for the current token, if any decode.
    pub fn claims(&self) -> Option<Claims> {
        self.token().as_deref().and_then(decode_claims)
    }

    /// Observe token changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.state.subscribe()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_existing_token() {
        let session = Session::new(MemoryTokenStore::with_token("a.b.c")).unwrap();
        assert_eq!(session.token().as_deref(), Some("a.b.c"));
        assert!(session.is_authenticated());
    }

    #[test]
    fn clear_is_idempotent() {
        let session = Session::in_memory();
        session.clear_token().unwrap();
        session.set_token("tok").unwrap();
        session.clear_token().unwrap();
        session.clear_token().unwrap();
        assert_eq!(session.token(), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn subscribers_observe_changes() {
        let session = Session::in_memory();
        let mut rx = session.subscribe();
        assert!(!rx.has_changed().unwrap());

        session.set_token("tok").unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().as_deref(), Some("tok"));

        session.clear_token().unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), None);

        // Clearing an absent token doesn't wake anyone.
        session.clear_token().unwrap();
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn claims_of_garbage_token_are_none() {
        let session = Session::new(MemoryTokenStore::with_token("not-a-jwt")).unwrap();
        assert_eq!(session.claims(), None);
        assert!(session.is_authenticated());
    }
}
