//! All setting definitions with their default values.

use std::collections::HashMap;
use std::sync::LazyLock;

type DefTuple = (&'static str, &'static str, &'static str);

const DEFS: &[DefTuple] = &[
    ("NOTIFICATION_VISIBILITY_LIKES", "true", "Show favourites of your posts"),
    ("NOTIFICATION_VISIBILITY_MENTIONS", "true", "Show mentions and replies"),
    ("NOTIFICATION_VISIBILITY_REPEATS", "true", "Show repeats of your posts"),
    ("NOTIFICATION_VISIBILITY_FOLLOWS", "true", "Show new followers"),
    ("NOTIFICATION_VISIBILITY_FOLLOW_REQUEST", "true", "Show follow requests"),
    ("NOTIFICATION_VISIBILITY_MOVES", "true", "Show account migrations"),
    ("NOTIFICATION_VISIBILITY_EMOJI_REACTIONS", "true", "Show emoji reactions"),
    ("NOTIFICATION_VISIBILITY_POLLS", "true", "Show ended polls"),
    (
        "WEB_PUSH_HIDE_IF_CW",
        "false",
        "Only show the content warning of a mention in desktop notifications",
    ),
    ("DESKTOP_NOTIFICATIONS_ENABLED", "true", "Send desktop notifications for new items"),
    ("NOTIFIER_LOCALE", "en", "Language of notification texts"),
    ("NOTIFICATION_APP_NAME", "Fedi Notifier", "Application name shown by the OS"),
];

/// A single setting definition.
#[derive(Debug, Clone)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

/// Global setting definitions indexed by key.
pub static DEFAULT_SETTINGS: LazyLock<HashMap<&'static str, SettingDef>> = LazyLock::new(|| {
    DEFS.iter()
        .map(|&(key, default, description)| {
            (
                key,
                SettingDef {
                    key,
                    default,
                    description,
                },
            )
        })
        .collect()
});

/// Setting keys in declaration order.
pub fn setting_keys() -> impl Iterator<Item = &'static str> {
    DEFS.iter().map(|&(key, _, _)| key)
}

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS.get(key).map(|d| d.default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validation::validate_setting;

    #[test]
    fn test_defaults_pass_validation() {
        for key in setting_keys() {
            let default = get_default(key).unwrap();
            assert!(validate_setting(key, default).is_ok(), "{key}={default}");
        }
    }

    #[test]
    fn test_keys_are_unique() {
        assert_eq!(setting_keys().count(), DEFAULT_SETTINGS.len());
    }
}
