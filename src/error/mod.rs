//! Unified error handling for the authnz client

use thiserror::Error;

/// Client-wide result type
pub type Result<T> = std::result::Result<T, ClientError>;

/// Client error types
#[derive(Error, Debug)]
pub enum ClientError {
    /// The provider list endpoint answered with something other than 200.
    #[error("Unable to load connected external identities")]
    Load,

    /// The disconnect endpoint answered with something other than 200.
    #[error("Delete failure.")]
    Delete,

    #[error("Unable to start external login.")]
    Login,

    /// The body of a 200 response did not match the expected shape.
    #[error("Unexpected response shape: {0}")]
    Schema(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Schema(err.to_string())
    }
}
