//! Persistence of the user's [`Settings`].

use radar_core::Settings;
use thiserror::Error;

use crate::storage::{KeyValueStore, StorageError};

/// Storage key holding the serialized settings object.
pub const SETTINGS_KEY: &str = "listingRadar_settings";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write settings: {0}")]
    Storage(#[from] StorageError),
}

impl SettingsError {
    /// Message shown to the user for any save failure.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        "Failed to save settings."
    }
}

#[derive(Debug)]
pub struct SettingsStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SettingsStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Persisted settings, or defaults when nothing usable is stored.
    /// Fields missing from the stored object take their default values.
    #[must_use]
    pub fn load(&self) -> Settings {
        match self.storage.get(SETTINGS_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "persisted settings are corrupt; using defaults");
                Settings::default()
            }),
            Ok(None) => Settings::default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read settings; using defaults");
                Settings::default()
            }
        }
    }

    /// # Errors
    ///
    /// Returns [`SettingsError`] if the settings cannot be serialized or
    /// written.
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        let raw = serde_json::to_string(settings)?;
        self.storage.set(SETTINGS_KEY, &raw)?;
        tracing::debug!("settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use radar_core::ListingType;

    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn missing_or_corrupt_settings_fall_back_to_defaults() {
        assert_eq!(SettingsStore::new(MemoryStore::new()).load(), Settings::default());
        let corrupt = MemoryStore::with_value(SETTINGS_KEY, "{not json");
        assert_eq!(SettingsStore::new(corrupt).load(), Settings::default());
    }

    #[test]
    fn stored_layout_is_camel_case() {
        let raw = r#"{"keywords":["rust"],"listingType":"jobs","notificationEmail":"me@example.com"}"#;
        let store = SettingsStore::new(MemoryStore::with_value(SETTINGS_KEY, raw));
        let settings = store.load();
        assert_eq!(settings.keywords, ["rust"]);
        assert_eq!(settings.listing_type, ListingType::Jobs);
        assert_eq!(settings.notification_email, "me@example.com");
        assert_eq!(settings.frequency, "0 * * * *");
    }

    #[test]
    fn save_then_load_returns_same_settings() {
        let store = SettingsStore::new(MemoryStore::new());
        let settings = Settings {
            keywords: vec!["rust".to_owned()],
            locations: vec!["Remote".to_owned()],
            listing_type: ListingType::Apartments,
            additional_urls: vec!["https://streeteasy.com".to_owned()],
            notification_email: "me@example.com".to_owned(),
            frequency: "*/30 * * * *".to_owned(),
        };
        store.save(&settings).unwrap();
        assert_eq!(store.load(), settings);
    }

    #[test]
    fn rejected_write_reports_generic_message() {
        let storage = MemoryStore::new();
        storage.reject_writes(true);
        let err = SettingsStore::new(storage)
            .save(&Settings::default())
            .unwrap_err();
        assert!(matches!(err, SettingsError::Storage(_)));
        assert_eq!(err.user_message(), "Failed to save settings.");
    }
}
