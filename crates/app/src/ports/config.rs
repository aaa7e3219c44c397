//! Configuration port — read-only key/value settings owned by the host.

use std::collections::HashMap;
use std::sync::Arc;

/// Key holding the Home Assistant long-lived access token.
pub const APIKEY: &str = "apikey";
/// Key holding the Home Assistant hostname, with or without scheme.
pub const HOSTNAME: &str = "hostname";
/// Key holding the Home Assistant port.
pub const PORT: &str = "port";

/// Read-only access to skill settings.
///
/// Implementations return `None` for unknown keys. Callers treat blank
/// values the same as missing ones.
pub trait ConfigProvider {
    /// Look up a setting by key.
    fn get(&self, key: &str) -> Option<String>;
}

impl<T: ConfigProvider + ?Sized> ConfigProvider for Arc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl ConfigProvider for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_read_from_hash_map() {
        let map = HashMap::from([(APIKEY.to_string(), "secret".to_string())]);
        assert_eq!(ConfigProvider::get(&map, APIKEY).as_deref(), Some("secret"));
        assert_eq!(ConfigProvider::get(&map, HOSTNAME), None);
    }

    #[test]
    fn should_read_through_arc() {
        let map = Arc::new(HashMap::from([(PORT.to_string(), "8123".to_string())]));
        assert_eq!(map.get(PORT).as_deref(), Some("8123"));
    }
}
