//! Client error types

use std::fmt;

use facility_api::EnvelopeError;

/// Failure classes reported to the diagnostics sink
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Network unreachable, connection reset, timeout
    Transport,
    /// Non-2xx HTTP status
    Http,
    /// Envelope with `success == false` or without `data`
    Application,
    /// Body was not the JSON shape we expected
    Decode,
    /// Request could not be built
    Request,
    /// Client could not be configured
    Config,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::Transport => "transport",
            FailureKind::Http => "http",
            FailureKind::Application => "application",
            FailureKind::Decode => "decode",
            FailureKind::Request => "request",
            FailureKind::Config => "config",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during client operations
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request failed with status {status}: {body}")]
    Http { status: u16, body: String },

    #[error("application error: {0}")]
    Application(#[from] EnvelopeError),

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ClientError::Transport(_) => FailureKind::Transport,
            ClientError::Http { .. } => FailureKind::Http,
            ClientError::Application(_) => FailureKind::Application,
            ClientError::Decode(_) => FailureKind::Decode,
            ClientError::InvalidRequest(_) => FailureKind::Request,
            ClientError::InvalidConfig(_) => FailureKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
