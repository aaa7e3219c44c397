//! Outcome — the structured result of one skill invocation.

use std::fmt;

use serde::Serialize;

/// How the host should treat the conversation after an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    /// The skill is done with this command.
    #[default]
    End,
}

/// Symbolic identifier of an outcome, also used as the localization key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeCode {
    KeyNotProvided,
    DeviceNotProvided,
    ConnectionFailed,
    TurnedOnDevice,
    TurnedOffDevice,
    TransportError,
    ConfigIncomplete,
    ConnectionSucceeded,
}

impl OutcomeCode {
    /// Every code, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::KeyNotProvided,
        Self::DeviceNotProvided,
        Self::ConnectionFailed,
        Self::TurnedOnDevice,
        Self::TurnedOffDevice,
        Self::TransportError,
        Self::ConfigIncomplete,
        Self::ConnectionSucceeded,
    ];

    /// Wire/localization identifier (`key_not_provided`, …).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::KeyNotProvided => "key_not_provided",
            Self::DeviceNotProvided => "device_not_provided",
            Self::ConnectionFailed => "connection_failed",
            Self::TurnedOnDevice => "turned_on_device",
            Self::TurnedOffDevice => "turned_off_device",
            Self::TransportError => "transport_error",
            Self::ConfigIncomplete => "config_incomplete",
            Self::ConnectionSucceeded => "connection_succeeded",
        }
    }
}

impl fmt::Display for OutcomeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result handed back to the host: signal, code, and the localized message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    #[serde(rename = "type")]
    pub signal: Signal,
    pub code: OutcomeCode,
    pub speech: String,
}

impl Outcome {
    /// Build a terminating outcome.
    #[must_use]
    pub fn end(code: OutcomeCode, speech: impl Into<String>) -> Self {
        Self {
            signal: Signal::End,
            code,
            speech: speech.into(),
        }
    }
}
