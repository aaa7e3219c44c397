//! Entity — a fragment of a recognized voice command.
//!
//! The host runtime runs entity recognition on the utterance and hands the
//! skill a list of tagged fragments (e.g. `device` → `"Lamp"`). Only the tag
//! and the raw recognized text matter here; anything else the host attaches
//! is ignored on deserialization.

use serde::{Deserialize, Serialize};

/// Category tag identifying the device being addressed.
pub const DEVICE_TAG: &str = "device";

/// A recognized, tagged fragment of a voice command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Category tag (e.g. `device`).
    pub entity: String,
    /// Raw recognized text, case preserved.
    #[serde(rename = "sourceText")]
    pub source_text: String,
}

impl Entity {
    #[must_use]
    pub fn new(entity: impl Into<String>, source_text: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            source_text: source_text.into(),
        }
    }

    /// Whether this fragment names a device.
    #[must_use]
    pub fn is_device(&self) -> bool {
        self.entity == DEVICE_TAG
    }
}

/// Return the raw text of the first `device` entity, in input order.
///
/// Later `device` entities are ignored.
#[must_use]
pub fn device_from_entities(entities: &[Entity]) -> Option<&str> {
    entities
        .iter()
        .find(|entity| entity.is_device())
        .map(|entity| entity.source_text.as_str())
}
