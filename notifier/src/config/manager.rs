//! SettingsManager: DB-backed settings with defaults and env migration.

use notification_store::Database;

use super::SettingInfo;
use super::defaults::{DEFAULT_SETTINGS, setting_keys};
use super::validation::validate_setting;

/// Wraps [`Database`] to provide high-level settings operations.
pub struct SettingsManager {
    db: Database,
}

impl SettingsManager {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Get a setting value. Falls back to default if not in DB.
    pub fn get_setting(&self, key: &str) -> Result<String, anyhow::Error> {
        if let Some(val) = self.db.get_setting(key)? {
            return Ok(val);
        }
        if let Some(def) = DEFAULT_SETTINGS.get(key) {
            return Ok(def.default.to_string());
        }
        anyhow::bail!("setting not found: {key}");
    }

    /// Set a setting value with validation.
    pub fn set_setting(&self, key: &str, value: &str) -> Result<(), anyhow::Error> {
        if !DEFAULT_SETTINGS.contains_key(key) {
            anyhow::bail!("unknown setting key: {key}");
        }

        validate_setting(key, value)
            .map_err(|e| anyhow::anyhow!("validation error for {key}: {e}"))?;

        self.db.set_setting(key, value)?;
        Ok(())
    }

    /// Drop the stored value so the default applies again.
    pub fn reset_setting(&self, key: &str) -> Result<String, anyhow::Error> {
        let Some(def) = DEFAULT_SETTINGS.get(key) else {
            anyhow::bail!("unknown setting key: {key}");
        };
        self.db.delete_setting(key)?;
        Ok(def.default.to_string())
    }

    /// All known settings in declaration order, defaults filled in.
    pub fn get_all_settings(&self) -> Result<Vec<SettingInfo>, anyhow::Error> {
        let stored = self.db.get_all_settings()?;

        Ok(setting_keys()
            .map(|key| {
                let def = &DEFAULT_SETTINGS[key];
                let value = stored.get(key).cloned();
                SettingInfo {
                    key: key.to_string(),
                    is_default: value.as_deref().is_none_or(|v| v == def.default),
                    value: value.unwrap_or_else(|| def.default.to_string()),
                    description: def.description.to_string(),
                }
            })
            .collect())
    }

    /// Initialize default settings in DB (skip existing).
    pub fn initialize_defaults(&self) -> Result<(), anyhow::Error> {
        for (key, def) in DEFAULT_SETTINGS.iter() {
            if self.db.get_setting(key)?.is_some() {
                continue;
            }
            self.db.set_setting(key, def.default)?;
        }
        Ok(())
    }

    /// Copy settings from environment variables into the DB (one-time).
    /// Invalid values are skipped with a warning.
    pub fn migrate_from_env(&self) -> Result<u32, anyhow::Error> {
        let mut migrated = 0u32;
        for key in DEFAULT_SETTINGS.keys() {
            if self.db.get_setting(key)?.is_some() {
                continue;
            }
            let Ok(env_val) = std::env::var(key) else {
                continue;
            };
            if env_val.is_empty() {
                continue;
            }
            if let Err(e) = validate_setting(key, &env_val) {
                tracing::warn!("Ignoring env setting {key}: {e}");
                continue;
            }
            self.db.set_setting(key, &env_val)?;
            tracing::info!("Migrated setting from env: {key}");
            migrated += 1;
        }
        if migrated > 0 {
            tracing::info!("Migration completed: {migrated} settings migrated");
        }
        Ok(migrated)
    }

    pub fn db(&self) -> &Database {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> SettingsManager {
        SettingsManager::new(Database::open_in_memory().expect("Failed to create test DB"))
    }

    #[test]
    fn test_reset_restores_default() {
        let sm = manager();
        sm.set_setting("NOTIFIER_LOCALE", "ja").unwrap();
        assert_eq!(sm.reset_setting("NOTIFIER_LOCALE").unwrap(), "en");
        assert_eq!(sm.get_setting("NOTIFIER_LOCALE").unwrap(), "en");
        assert!(sm.reset_setting("NO_SUCH_KEY").is_err());
    }

    #[test]
    fn test_get_falls_back_to_default() {
        let sm = manager();
        assert_eq!(sm.get_setting("NOTIFIER_LOCALE").unwrap(), "en");
        assert!(sm.get_setting("NO_SUCH_KEY").is_err());
    }

    #[test]
    fn test_set_validates() {
        let sm = manager();
        sm.set_setting("WEB_PUSH_HIDE_IF_CW", "true").unwrap();
        assert_eq!(sm.get_setting("WEB_PUSH_HIDE_IF_CW").unwrap(), "true");

        assert!(sm.set_setting("WEB_PUSH_HIDE_IF_CW", "maybe").is_err());
        assert!(sm.set_setting("NO_SUCH_KEY", "true").is_err());
    }

    #[test]
    fn test_all_settings_marks_overrides() {
        let sm = manager();
        sm.set_setting("NOTIFICATION_VISIBILITY_LIKES", "false").unwrap();

        let all = sm.get_all_settings().unwrap();
        assert_eq!(all.len(), DEFAULT_SETTINGS.len());

        let likes = all
            .iter()
            .find(|s| s.key == "NOTIFICATION_VISIBILITY_LIKES")
            .unwrap();
        assert_eq!(likes.value, "false");
        assert!(!likes.is_default);

        let locale = all.iter().find(|s| s.key == "NOTIFIER_LOCALE").unwrap();
        assert!(locale.is_default);
    }

    #[test]
    fn test_initialize_defaults_keeps_existing() {
        let sm = manager();
        sm.set_setting("NOTIFIER_LOCALE", "ja").unwrap();
        sm.initialize_defaults().unwrap();

        assert_eq!(sm.db().get_setting("NOTIFIER_LOCALE").unwrap(), Some("ja".into()));
        assert_eq!(
            sm.db().get_setting("DESKTOP_NOTIFICATIONS_ENABLED").unwrap(),
            Some("true".into())
        );
    }
}
