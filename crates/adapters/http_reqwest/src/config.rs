//! HTTP client configuration.

use std::time::Duration;

use serde::Deserialize;

/// Settings for the reqwest-backed client.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HttpClientConfig {
    /// Whole-request timeout, in seconds. Unset means the client waits as
    /// long as the server takes.
    pub timeout_secs: Option<u64>,
}

impl HttpClientConfig {
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
