//! # cbol_api_client
//!
//! The single outbound gateway to the CBOL backend. Every call attaches the
//! session's bearer token; any 401 clears the session and sends the console
//! back to the login view before the error reaches the caller.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult, ErrorBody};
