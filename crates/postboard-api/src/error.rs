//! Error types for postboard-api.

use thiserror::Error;

/// Message carried by the artificial failure of the delay step.
pub const SIMULATED_FAILURE_MESSAGE: &str =
    "Oops! Error encountered. Cannot load the pagination list.";

#[derive(Debug, Error)]
pub enum Error {
    #[error("{}", SIMULATED_FAILURE_MESSAGE)]
    SimulatedFailure,

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP error: status {status}")]
    HttpStatus { status: u16 },

    #[error("failed to decode posts: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(#[source] toml::de::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self { Error::Decode(e) }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self { Error::Config(e) }
}

pub type Result<T> = std::result::Result<T, Error>;
