//! # hasspower-adapter-http-reqwest
//!
//! HTTP adapter — implements the [`HttpClient`] port on top of `reqwest`.
//!
//! ## Responsibilities
//! - Build a reqwest client, with a request timeout only when one is configured
//! - `POST` JSON command payloads with a bearer token (marked sensitive)
//! - Bare `GET` for the connectivity probe
//! - Report whatever status comes back; only failed exchanges are errors
//!
//! ## Dependency rule
//! Same as other adapters: depends on `hasspower-app` and `hasspower-domain`.

pub mod config;
pub mod error;

use std::future::Future;

use reqwest::header::{AUTHORIZATION, HeaderValue};

use hasspower_app::ports::HttpClient;
use hasspower_domain::action::CommandPayload;
use hasspower_domain::endpoint::ApiKey;
use hasspower_domain::error::TransportError;

pub use config::HttpClientConfig;
pub use error::HttpError;

/// [`HttpClient`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Build`] if the TLS backend cannot be initialised.
    pub fn new(config: &HttpClientConfig) -> Result<Self, HttpError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(HttpError::Build)?;
        Ok(Self { client })
    }
}

fn parse_url(url: &str) -> Result<reqwest::Url, TransportError> {
    reqwest::Url::parse(url).map_err(|_| TransportError::InvalidUrl(url.to_string()))
}

fn bearer_header(api_key: &ApiKey) -> Result<HeaderValue, TransportError> {
    let mut value = HeaderValue::from_str(&api_key.bearer()).map_err(HttpError::InvalidToken)?;
    value.set_sensitive(true);
    Ok(value)
}

impl HttpClient for ReqwestHttpClient {
    fn post_json(
        &self,
        url: &str,
        api_key: &ApiKey,
        payload: &CommandPayload,
    ) -> impl Future<Output = Result<u16, TransportError>> + Send {
        let request = parse_url(url).and_then(|url| {
            Ok(self
                .client
                .post(url)
                .header(AUTHORIZATION, bearer_header(api_key)?)
                .json(payload))
        });
        async move {
            let response = request?.send().await.map_err(HttpError::Request)?;
            let status = response.status().as_u16();
            tracing::debug!(status, "home assistant answered");
            Ok(status)
        }
    }

    fn get(&self, url: &str) -> impl Future<Output = Result<u16, TransportError>> + Send {
        let request = parse_url(url).map(|url| self.client.get(url));
        async move {
            let response = request?.send().await.map_err(HttpError::Request)?;
            Ok(response.status().as_u16())
        }
    }
}
