//! HTTP adapter error types.

use hasspower_domain::error::TransportError;

/// Errors specific to the reqwest adapter.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The underlying reqwest client could not be constructed.
    #[error("failed to build HTTP client")]
    Build(#[source] reqwest::Error),

    /// The API key contains bytes not allowed in a header.
    #[error("API key is not a valid header value")]
    InvalidToken(#[source] reqwest::header::InvalidHeaderValue),

    /// A request did not complete.
    #[error("HTTP request failed")]
    Request(#[source] reqwest::Error),
}

impl From<HttpError> for TransportError {
    fn from(err: HttpError) -> Self {
        Self::Request(Box::new(err))
    }
}
