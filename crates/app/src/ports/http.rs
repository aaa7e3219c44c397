//! HTTP port — the two exchanges with a Home Assistant server.

use std::future::Future;
use std::sync::Arc;

use hasspower_domain::action::CommandPayload;
use hasspower_domain::endpoint::ApiKey;
use hasspower_domain::error::TransportError;

/// Sends requests to Home Assistant and reports the raw status code.
///
/// Any received response is `Ok`, whatever its status; only failures to
/// complete the exchange are errors. Implementations must not retry.
pub trait HttpClient {
    /// `POST` `payload` as JSON to `url` with a bearer token.
    fn post_json(
        &self,
        url: &str,
        api_key: &ApiKey,
        payload: &CommandPayload,
    ) -> impl Future<Output = Result<u16, TransportError>> + Send;

    /// Bare `GET` on `url`, without authentication.
    fn get(&self, url: &str) -> impl Future<Output = Result<u16, TransportError>> + Send;
}

impl<T: HttpClient + Send + Sync> HttpClient for Arc<T> {
    fn post_json(
        &self,
        url: &str,
        api_key: &ApiKey,
        payload: &CommandPayload,
    ) -> impl Future<Output = Result<u16, TransportError>> + Send {
        (**self).post_json(url, api_key, payload)
    }

    fn get(&self, url: &str) -> impl Future<Output = Result<u16, TransportError>> + Send {
        (**self).get(url)
    }
}
