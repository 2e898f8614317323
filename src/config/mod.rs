use serde::{Deserialize, Serialize};

use crate::storage::Store;

pub const CONFIG_KEY: &str = "config";
pub const DEFAULT_REMINDER_WINDOW_DAYS: u32 = 3;

/// User-tunable settings persisted alongside the tracked collections.
///
/// Every field carries a serde default so a partial or missing config file
/// still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Lookahead window, in days, for the due-soon bill query.
    #[serde(default = "default_reminder_window")]
    pub reminder_window_days: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            locale: default_locale(),
            reminder_window_days: default_reminder_window(),
        }
    }
}

impl TrackerConfig {
    /// Loads the persisted config, defaulting when absent or malformed.
    pub fn load(store: &Store) -> Self {
        store.load(CONFIG_KEY)
    }

    pub fn persist(&self, store: &Store) {
        store.save(CONFIG_KEY, self);
    }
}

fn default_currency() -> String {
    "USD".into()
}

fn default_locale() -> String {
    "en-US".into()
}

fn default_reminder_window() -> u32 {
    DEFAULT_REMINDER_WINDOW_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonStore;
    use tempfile::TempDir;

    fn store_with_temp_dir() -> (Store, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let backend = JsonStore::new(Some(temp.path().to_path_buf())).expect("json store");
        (Store::new(Box::new(backend)), temp)
    }

    #[test]
    fn missing_config_loads_defaults() {
        let (store, _guard) = store_with_temp_dir();
        let config = TrackerConfig::load(&store);
        assert_eq!(config, TrackerConfig::default());
        assert_eq!(config.reminder_window_days, 3);
        assert_eq!(config.currency, "USD");
    }

    #[test]
    fn config_round_trips_through_the_store() {
        let (store, _guard) = store_with_temp_dir();
        let config = TrackerConfig {
            currency: "EUR".into(),
            locale: "de-DE".into(),
            reminder_window_days: 7,
        };
        config.persist(&store);
        assert_eq!(TrackerConfig::load(&store), config);
    }

    #[test]
    fn partial_config_files_fill_in_defaults() {
        let temp = TempDir::new().expect("temp dir");
        let backend = JsonStore::new(Some(temp.path().to_path_buf())).expect("json store");
        std::fs::write(backend.key_path(CONFIG_KEY), r#"{"currency":"GBP"}"#).unwrap();
        let store = Store::new(Box::new(backend));

        let config = TrackerConfig::load(&store);
        assert_eq!(config.currency, "GBP");
        assert_eq!(config.locale, "en-US");
        assert_eq!(config.reminder_window_days, 3);
    }
}
