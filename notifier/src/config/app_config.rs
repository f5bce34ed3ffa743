//! Runtime application configuration loaded from DB + environment overrides.

use notification_curation::{Config, NotificationVisibility};

use super::manager::SettingsManager;

/// Runtime configuration populated from the settings DB.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub visibility: NotificationVisibility,
    pub web_push_hide_if_cw: bool,
    pub desktop_enabled: bool,
    pub locale: String,
    pub app_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            visibility: NotificationVisibility::all(),
            web_push_hide_if_cw: false,
            desktop_enabled: true,
            locale: "en".into(),
            app_name: "Fedi Notifier".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the settings manager (DB-first, env overrides).
    pub fn load(sm: &SettingsManager) -> Result<Self, anyhow::Error> {
        let g = |key: &str| -> String { sm.get_setting(key).unwrap_or_default() };
        let flag = |key: &str| g(key) == "true";

        // NOTIFIER_LOCALE can be overridden per run
        let locale = std::env::var("NOTIFIER_LOCALE")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| g("NOTIFIER_LOCALE"));

        Ok(Self {
            visibility: NotificationVisibility {
                likes: flag("NOTIFICATION_VISIBILITY_LIKES"),
                mentions: flag("NOTIFICATION_VISIBILITY_MENTIONS"),
                repeats: flag("NOTIFICATION_VISIBILITY_REPEATS"),
                follows: flag("NOTIFICATION_VISIBILITY_FOLLOWS"),
                follow_request: flag("NOTIFICATION_VISIBILITY_FOLLOW_REQUEST"),
                moves: flag("NOTIFICATION_VISIBILITY_MOVES"),
                emoji_reactions: flag("NOTIFICATION_VISIBILITY_EMOJI_REACTIONS"),
                polls: flag("NOTIFICATION_VISIBILITY_POLLS"),
            },
            web_push_hide_if_cw: flag("WEB_PUSH_HIDE_IF_CW"),
            desktop_enabled: flag("DESKTOP_NOTIFICATIONS_ENABLED"),
            locale: if locale.is_empty() { "en".into() } else { locale },
            app_name: {
                let name = g("NOTIFICATION_APP_NAME");
                if name.is_empty() { "Fedi Notifier".into() } else { name }
            },
        })
    }

    /// Configuration snapshot for the curation pipeline.
    pub fn snapshot(&self, mute_words: Vec<String>) -> Config {
        Config {
            notification_visibility: self.visibility.clone(),
            mute_words,
            web_push_hide_if_cw: self.web_push_hide_if_cw,
        }
    }

    /// Snapshot with the mute words currently stored in the DB.
    pub fn load_snapshot(&self, sm: &SettingsManager) -> Result<Config, anyhow::Error> {
        let mute_words = sm
            .db()
            .list_mute_words()?
            .into_iter()
            .map(|w| w.word)
            .collect();
        Ok(self.snapshot(mute_words))
    }
}
