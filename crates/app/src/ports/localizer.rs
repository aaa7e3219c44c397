//! Localizer port — outcome code to user-facing message.

use std::sync::Arc;

use hasspower_domain::outcome::OutcomeCode;

/// Named values substituted into a localized message (e.g. `("device", "Lamp")`).
pub type Params<'a> = [(&'a str, &'a str)];

/// Produces the message spoken back to the user for an outcome.
pub trait Localizer {
    /// Translate `code`, substituting `params` into the message.
    ///
    /// Never fails: implementations fall back to something printable
    /// (typically the code itself) when no translation exists.
    fn translate(&self, code: OutcomeCode, params: &Params<'_>) -> String;
}

impl<T: Localizer + ?Sized> Localizer for Arc<T> {
    fn translate(&self, code: OutcomeCode, params: &Params<'_>) -> String {
        (**self).translate(code, params)
    }
}
