//! # hasspower-adapter-locale-json
//!
//! Localization adapter — implements the [`Localizer`] port from JSON answer
//! catalogues bundled into the binary.
//!
//! A catalogue maps each outcome code to one or more message variants:
//!
//! ```json
//! { "turned_on_device": ["I turned on the %device%."] }
//! ```
//!
//! The first variant is used. `%name%` placeholders are replaced by the
//! matching parameter; unknown placeholders are left as written.

use std::collections::HashMap;

use hasspower_app::ports::Localizer;
use hasspower_app::ports::localizer::Params;
use hasspower_domain::outcome::OutcomeCode;

/// Language used when the requested one has no catalogue.
pub const DEFAULT_LANG: &str = "en";

const BUNDLED: [(&str, &str); 2] = [
    ("en", include_str!("locales/en.json")),
    ("fr", include_str!("locales/fr.json")),
];

type Catalogue = HashMap<String, Vec<String>>;

/// Localization errors.
#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    /// A catalogue is not a JSON object of string arrays.
    #[error("invalid catalogue for language {lang:?}")]
    Parse {
        lang: String,
        #[source]
        source: serde_json::Error,
    },
}

/// [`Localizer`] answering in one language.
#[derive(Debug, Clone)]
pub struct JsonLocalizer {
    lang: String,
    catalogue: Catalogue,
}

impl JsonLocalizer {
    /// Load the bundled catalogue for `lang`, falling back to [`DEFAULT_LANG`].
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::Parse`] if a bundled catalogue is malformed.
    pub fn bundled(lang: &str) -> Result<Self, LocaleError> {
        let (lang, json) = BUNDLED
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(lang))
            .or_else(|| {
                tracing::warn!(lang, fallback = DEFAULT_LANG, "no catalogue for language");
                BUNDLED.iter().find(|(candidate, _)| *candidate == DEFAULT_LANG)
            })
            .copied()
            .unwrap_or(BUNDLED[0]);
        Self::from_json(lang, json)
    }

    /// Build a localizer from a catalogue document.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::Parse`] if `json` is not an object of string arrays.
    pub fn from_json(lang: &str, json: &str) -> Result<Self, LocaleError> {
        let catalogue = serde_json::from_str(json).map_err(|source| LocaleError::Parse {
            lang: lang.to_string(),
            source,
        })?;
        Ok(Self {
            lang: lang.to_string(),
            catalogue,
        })
    }

    /// Language of the loaded catalogue.
    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Codes without a usable message in this catalogue.
    #[must_use]
    pub fn missing_codes(&self) -> Vec<OutcomeCode> {
        OutcomeCode::ALL
            .into_iter()
            .filter(|code| self.template(*code).is_none())
            .collect()
    }

    fn template(&self, code: OutcomeCode) -> Option<&str> {
        self.catalogue
            .get(code.as_str())
            .and_then(|variants| variants.first())
            .map(String::as_str)
    }
}

impl Localizer for JsonLocalizer {
    fn translate(&self, code: OutcomeCode, params: &Params<'_>) -> String {
        let Some(template) = self.template(code) else {
            tracing::warn!(%code, lang = %self.lang, "missing translation");
            return code.to_string();
        };
        interpolate(template, params)
    }
}

/// Replace every `%key%` in `template` with its value from `params`.
fn interpolate(template: &str, params: &Params<'_>) -> String {
    params
        .iter()
        .fold(template.to_string(), |message, (key, value)| {
            message.replace(&format!("%{key}%"), value)
        })
}
