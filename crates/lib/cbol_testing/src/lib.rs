//! # cbol_testing
//!
//! Fixtures shared by the client and view test suites.

pub mod backend;
pub mod navigator;
pub mod token;

pub use backend::{FakeBackend, RecordedRequest};
pub use navigator::RecordingNavigator;
pub use token::make_token;
