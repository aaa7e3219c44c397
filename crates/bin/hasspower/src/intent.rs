//! Intent — the JSON document describing one recognized voice command.

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use hasspower_domain::entity::Entity;
use serde::Deserialize;

/// One voice command as handed over by the host runtime.
#[derive(Debug, Clone, Deserialize)]
pub struct Intent {
    /// Language of the utterance; the configured default when absent.
    #[serde(default)]
    pub lang: Option<String>,
    /// Skill entry point, e.g. `power_on`.
    pub action: String,
    /// Raw utterance.
    #[serde(default)]
    pub query: String,
    /// Recognized entities, in utterance order.
    #[serde(default)]
    pub entities: Vec<Entity>,
}

/// Entry points of the skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillAction {
    PowerOn,
    PowerOff,
    CheckConnection,
}

impl FromStr for SkillAction {
    type Err = IntentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "power_on" => Ok(Self::PowerOn),
            "power_off" => Ok(Self::PowerOff),
            "check_connection" => Ok(Self::CheckConnection),
            other => Err(IntentError::UnknownAction(other.to_string())),
        }
    }
}

impl Intent {
    /// Read an intent from `path`, or from stdin when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`IntentError::Io`] if the input cannot be read and
    /// [`IntentError::Parse`] if it is not a valid intent document.
    pub fn read(path: Option<&Path>) -> Result<Self, IntentError> {
        let raw = match path {
            Some(path) => std::fs::read_to_string(path)?,
            None => {
                let mut raw = String::new();
                std::io::stdin().read_to_string(&mut raw)?;
                raw
            }
        };
        raw.parse()
    }

    /// Resolve [`action`](Self::action) to a skill entry point.
    ///
    /// # Errors
    ///
    /// Returns [`IntentError::UnknownAction`] for anything this skill does not handle.
    pub fn skill_action(&self) -> Result<SkillAction, IntentError> {
        self.action.parse()
    }
}

impl FromStr for Intent {
    type Err = IntentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

/// Intent input errors.
#[derive(Debug, thiserror::Error)]
pub enum IntentError {
    /// The document is not valid JSON or misses required fields.
    #[error("failed to parse intent")]
    Parse(#[from] serde_json::Error),
    /// The document could not be read.
    #[error("failed to read intent")]
    Io(#[from] std::io::Error),
    /// The action is not one of this skill's entry points.
    #[error("unknown action {0:?}")]
    UnknownAction(String),
}
