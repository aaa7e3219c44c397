//! Errors raised while talking to Home Assistant.

use hasspower_domain::error::{EndpointError, TransportError};

/// Why a request to Home Assistant could not produce a status code.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// Configuration is not complete enough to build a request.
    #[error("incomplete configuration")]
    Endpoint(#[from] EndpointError),

    /// The request was built but the exchange failed.
    #[error("transport failure")]
    Transport(#[from] TransportError),
}
