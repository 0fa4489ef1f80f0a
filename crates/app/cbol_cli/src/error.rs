use cbol_views::Outcome;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{}", .0)]
    Custom(String),

    #[error("IO::{:?}: {}", .0, .0)]
    Io(#[from] std::io::Error),

    #[error("FlexiLogger::{:?}: {}", .0, .0)]
    FlexiLogger(#[from] flexi_logger::FlexiLoggerError),

    #[error("Session::{}", .0)]
    Session(#[from] cbol_core::session::SessionError),

    #[error("Api::{}", .0)]
    Api(#[from] cbol_api_client::ApiError),

    /// The view already told the user what went wrong.
    #[error("{:?}", .0)]
    Incomplete(Outcome),
}
