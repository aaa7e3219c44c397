//! Power actions and the command payload sent to Home Assistant.

use serde::Serialize;

use crate::outcome::OutcomeCode;

/// The two commands this skill forwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerAction {
    PowerOn,
    PowerOff,
}

impl PowerAction {
    /// Verb placed in the `action` field of the payload.
    #[must_use]
    pub fn verb(self) -> &'static str {
        match self {
            Self::PowerOn => "turn on",
            Self::PowerOff => "turn off",
        }
    }

    /// Outcome reported when Home Assistant accepts the command.
    #[must_use]
    pub fn success_code(self) -> OutcomeCode {
        match self {
            Self::PowerOn => OutcomeCode::TurnedOnDevice,
            Self::PowerOff => OutcomeCode::TurnedOffDevice,
        }
    }

    /// Build the payload for `device`, lower-casing the name.
    #[must_use]
    pub fn payload(self, device: &str) -> CommandPayload {
        CommandPayload {
            action: self.verb().to_string(),
            device: device.to_lowercase(),
        }
    }
}

/// JSON body of `POST /api/events/script_started`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandPayload {
    pub action: String,
    pub device: String,
}
