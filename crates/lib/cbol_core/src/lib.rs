//! # cbol_core
//!
//! Core domain logic for the CBOL admin console: the session context, the
//! token claims reader, route guarding, and the pure form/validation helpers
//! every view runs before touching the network.

pub mod claims;
pub mod forms;
pub mod models;
pub mod route;
pub mod session;
pub mod validation;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
