//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `hasspower.toml` in the working directory unless a path is
//! given. Every field has a default so the file is optional. Environment
//! variables take precedence over file values.
//!
//! Missing Home Assistant credentials are not a load error: the skill
//! reports them to the user when a command comes in.

use std::fmt;
use std::path::Path;

use hasspower_adapter_http_reqwest::HttpClientConfig;
use hasspower_adapter_locale_json::DEFAULT_LANG;
use hasspower_app::ports::ConfigProvider;
use hasspower_app::ports::config::{APIKEY, HOSTNAME, PORT};
use serde::Deserialize;

const DEFAULT_PATH: &str = "hasspower.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Home Assistant connection settings.
    pub hass: HassConfig,
    /// Localization settings.
    pub locale: LocaleConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Home Assistant connection settings.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct HassConfig {
    /// Long-lived access token.
    pub apikey: Option<String>,
    /// Hostname, with or without scheme (`http://` is assumed).
    pub hostname: Option<String>,
    /// TCP port, as a number or a string.
    pub port: Option<PortSetting>,
    /// Whole-request timeout, in seconds. No timeout when unset.
    pub timeout_secs: Option<u64>,
}

/// A port written either as `8123` or `"8123"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PortSetting {
    Number(u16),
    Text(String),
}

impl fmt::Display for PortSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(port) => write!(f, "{port}"),
            Self::Text(port) => f.write_str(port),
        }
    }
}

/// Localization settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Language used when the intent does not name one.
    pub default_lang: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `path` (or `hasspower.toml`) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is malformed, if an explicitly given
    /// file cannot be read, or if validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path, false)?,
            None => Self::from_file(Path::new(DEFAULT_PATH), true)?,
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path, optional: bool) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if optional && err.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("HASSPOWER_APIKEY") {
            self.hass.apikey = Some(val);
        }
        if let Some(val) = var("HASSPOWER_HOSTNAME") {
            self.hass.hostname = Some(val);
        }
        if let Some(val) = var("HASSPOWER_PORT") {
            self.hass.port = Some(PortSetting::Text(val));
        }
        if let Some(val) = var("HASSPOWER_LANG") {
            self.locale.default_lang = val;
        }
        if let Some(val) = var("HASSPOWER_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.hass.timeout_secs == Some(0) {
            return Err(ConfigError::Validation(
                "timeout_secs must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Settings for the HTTP adapter.
    #[must_use]
    pub fn http_client(&self) -> HttpClientConfig {
        HttpClientConfig {
            timeout_secs: self.hass.timeout_secs,
        }
    }
}

impl ConfigProvider for Config {
    fn get(&self, key: &str) -> Option<String> {
        match key {
            APIKEY => self.hass.apikey.clone(),
            HOSTNAME => self.hass.hostname.clone(),
            PORT => self.hass.port.as_ref().map(ToString::to_string),
            _ => None,
        }
    }
}

impl fmt::Debug for HassConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HassConfig")
            .field("apikey", &self.apikey.as_ref().map(|_| "***"))
            .field("hostname", &self.hostname)
            .field("port", &self.port)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default_lang: DEFAULT_LANG.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "hasspower=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
