//! Endpoint rules — how configuration turns into Home Assistant URLs.
//!
//! The HTTP client needs an explicit scheme, so a bare hostname such as
//! `192.168.1.5` is treated as plain `http://`.

use std::fmt;

use crate::error::EndpointError;

/// Path of the event endpoint the power command is posted to.
pub const EVENTS_PATH: &str = "/api/events/script_started";

const DEFAULT_SCHEME: &str = "http://";

/// Prepend `http://` unless `hostname` already carries a scheme.
#[must_use]
pub fn normalize_hostname(hostname: &str) -> String {
    if hostname.contains("://") {
        hostname.to_string()
    } else {
        format!("{DEFAULT_SCHEME}{hostname}")
    }
}

/// `{scheme}://{host}:{port}` of a Home Assistant server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HassEndpoint {
    base_url: String,
}

impl HassEndpoint {
    /// Build the endpoint from raw configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`EndpointError::MissingSetting`] when `hostname` or `port`
    /// is absent or blank.
    pub fn new(hostname: Option<&str>, port: Option<&str>) -> Result<Self, EndpointError> {
        let hostname = non_blank(hostname).ok_or(EndpointError::MissingSetting("hostname"))?;
        let port = non_blank(port).ok_or(EndpointError::MissingSetting("port"))?;
        Ok(Self {
            base_url: format!("{}:{port}", normalize_hostname(hostname)),
        })
    }

    /// Root URL, used by the connectivity probe.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL the power command is posted to.
    #[must_use]
    pub fn events_url(&self) -> String {
        format!("{}{EVENTS_PATH}", self.base_url)
    }
}

/// Long-lived access token. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a token, rejecting blank values. The token is kept as written.
    #[must_use]
    pub fn new(token: Option<&str>) -> Option<Self> {
        token
            .filter(|token| !token.trim().is_empty())
            .map(|token| Self(token.to_string()))
    }

    /// Value of the `Authorization` header.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_http_when_scheme_missing() {
        assert_eq!(normalize_hostname("192.168.1.5"), "http://192.168.1.5");
    }

    #[test]
    fn should_keep_explicit_scheme() {
        assert_eq!(normalize_hostname("https://ha.local"), "https://ha.local");
    }

    #[test]
    fn should_build_events_url() {
        let endpoint = HassEndpoint::new(Some("192.168.1.5"), Some("8123")).unwrap();
        assert_eq!(endpoint.base_url(), "http://192.168.1.5:8123");
        assert_eq!(
            endpoint.events_url(),
            "http://192.168.1.5:8123/api/events/script_started"
        );
    }

    #[test]
    fn should_build_https_endpoint_untouched() {
        let endpoint = HassEndpoint::new(Some("https://ha.local"), Some("443")).unwrap();
        assert_eq!(endpoint.base_url(), "https://ha.local:443");
    }

    #[test]
    fn should_reject_missing_hostname() {
        assert_eq!(
            HassEndpoint::new(None, Some("8123")),
            Err(EndpointError::MissingSetting("hostname"))
        );
    }

    #[test]
    fn should_reject_blank_port() {
        assert_eq!(
            HassEndpoint::new(Some("ha.local"), Some("  ")),
            Err(EndpointError::MissingSetting("port"))
        );
    }

    #[test]
    fn should_reject_blank_api_key() {
        assert!(ApiKey::new(Some("")).is_none());
        assert!(ApiKey::new(None).is_none());
    }

    #[test]
    fn should_reject_whitespace_only_api_key() {
        assert!(ApiKey::new(Some("   ")).is_none());
    }

    #[test]
    fn should_send_api_key_untrimmed() {
        let key = ApiKey::new(Some(" abc ")).unwrap();
        assert_eq!(key.bearer(), "Bearer  abc ");
    }

    #[test]
    fn should_format_bearer_header() {
        let key = ApiKey::new(Some("abc123")).unwrap();
        assert_eq!(key.bearer(), "Bearer abc123");
    }

    #[test]
    fn should_redact_api_key_in_debug() {
        let key = ApiKey::new(Some("abc123")).unwrap();
        assert_eq!(format!("{key:?}"), "ApiKey(***)");
    }
}
