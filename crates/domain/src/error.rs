//! Common error types used across the workspace.
//!
//! None of these ever reach the user directly: the application layer folds
//! them into an [`Outcome`](crate::outcome::Outcome) with a matching code.

/// Failure to exchange a request with Home Assistant at all.
///
/// A response with a non-200 status is *not* a transport error; the status
/// code is a regular value.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The target URL could not be parsed.
    #[error("invalid url {0:?}")]
    InvalidUrl(String),

    /// Connection refused, DNS failure, timeout, TLS failure, …
    #[error("request failed")]
    Request(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Failure to derive a Home Assistant endpoint from configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EndpointError {
    /// A required configuration key is missing or empty.
    #[error("configuration key {0:?} is not set")]
    MissingSetting(&'static str),
}
