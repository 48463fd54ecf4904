//! HTTP client error types

use thiserror::Error;

/// Errors that abort a request before a response is obtained
///
/// Inbound decode failures are deliberately absent: a completed HTTP exchange
/// with an unparseable body is still reported as success (see the verb
/// methods on [`crate::HttpClient`]).
#[derive(Debug, Error)]
pub enum Error {
    /// The joined host/path is not a valid absolute URL
    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),
    /// Outbound body could not be encoded as JSON
    #[error("Request body encoding error: {0}")]
    Serialization(String),
    /// The per-call deadline expired
    ///
    /// The deadline is the fixed [`crate::REQUEST_TIMEOUT`]; it cannot be
    /// tuned per call.
    #[error("Request timeout")]
    Timeout,
    /// The connection could not be established
    #[error("Connection error: {0}")]
    Connection(String),
    /// The request failed in transit
    #[error("Request dispatch error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else if err.is_connect() {
            Error::Connection(err.to_string())
        } else {
            Error::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
