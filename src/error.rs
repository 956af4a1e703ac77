//! Error types for Wayfarer

use thiserror::Error;

/// Result type alias for Wayfarer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Wayfarer
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The client-credentials exchange failed; carries the provider's body.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// A provider search call failed; carries the provider's body verbatim.
    #[error("{0}")]
    Provider(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Tool error: {0}")]
    Tool(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Max iterations reached")]
    MaxIterations,

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// True for failures of the token step rather than the search step.
    pub fn is_auth(&self) -> bool {
        matches!(self, Error::Auth(_))
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}
