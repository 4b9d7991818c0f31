//! Failures of the feedback data source.

use thiserror::Error;

/// Why fetching a feedback page failed.
///
/// Transient and permanent failures are not told apart; none of them is
/// retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("HTTP error: {status}")]
    Http {
        /// Response status code.
        status: u16,
    },
    /// The response body was not a feedback page.
    #[error("parse error: {0}")]
    Decode(String),
}
