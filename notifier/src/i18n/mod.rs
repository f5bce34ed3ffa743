//! Embedded message catalogs for notification texts.

use std::collections::HashMap;

use notification_curation::Localize;
use serde_json::Value;

const FALLBACK_LOCALE: &str = "en";

const LOCALES: &[(&str, &str)] = &[
    ("en", include_str!("locales/en.json")),
    ("ja", include_str!("locales/ja.json")),
];

#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    #[error("Catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog root must be an object")]
    NotAnObject,
}

/// Flattened `section.key -> message` lookup table.
#[derive(Debug, Clone)]
pub struct Catalog {
    locale: String,
    messages: HashMap<String, String>,
}

impl Catalog {
    /// Embedded catalog for `locale` (`ja-JP` resolves to `ja`).
    /// Unknown locales fall back to English.
    pub fn load(locale: &str) -> Result<Self, LocaleError> {
        let language = locale.split('-').next().unwrap_or(locale);
        let (name, source) = LOCALES
            .iter()
            .find(|(name, _)| *name == language)
            .or_else(|| LOCALES.iter().find(|(name, _)| *name == FALLBACK_LOCALE))
            .copied()
            .unwrap_or((FALLBACK_LOCALE, "{}"));

        if name != language {
            tracing::warn!(requested = locale, "No catalog for locale, using {name}");
        }
        Self::from_json(name, source)
    }

    pub fn from_json(locale: &str, source: &str) -> Result<Self, LocaleError> {
        let root: Value = serde_json::from_str(source)?;
        if !root.is_object() {
            return Err(LocaleError::NotAnObject);
        }

        let mut messages = HashMap::new();
        flatten("", &root, &mut messages);
        Ok(Self {
            locale: locale.to_string(),
            messages,
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Message for `key` with `{n}` replaced by `args[n]`.
    /// Missing keys render as the key itself.
    pub fn translate(&self, key: &str, args: &[&str]) -> String {
        let Some(template) = self.messages.get(key) else {
            tracing::debug!(key, locale = %self.locale, "Missing message");
            return key.to_string();
        };

        args.iter()
            .enumerate()
            .fold(template.clone(), |text, (i, arg)| {
                text.replace(&format!("{{{i}}}"), arg)
            })
    }
}

impl Localize for Catalog {
    fn localize(&self, key: &str, args: &[&str]) -> String {
        self.translate(key, args)
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, child, out);
            }
        }
        Value::String(text) => {
            out.insert(prefix.to_string(), text.clone());
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_locale_has_notification_keys() {
        let keys = [
            "favorited_you",
            "repeated_you",
            "followed_you",
            "migrated_to",
            "follow_request",
            "poll_ended",
            "reacted_with",
        ];
        for (name, _) in LOCALES {
            let catalog = Catalog::load(name).unwrap();
            for key in keys {
                let full = format!("notifications.{key}");
                assert_ne!(catalog.translate(&full, &[]), full, "{name}: {key}");
            }
        }
    }

    #[test]
    fn test_positional_arguments() {
        let catalog = Catalog::load("en").unwrap();
        assert_eq!(
            catalog.translate("notifications.reacted_with", &["🦊"]),
            "reacted with 🦊"
        );
    }

    #[test]
    fn test_region_and_fallback() {
        assert_eq!(Catalog::load("ja-JP").unwrap().locale(), "ja");
        assert_eq!(Catalog::load("xx").unwrap().locale(), "en");
    }

    #[test]
    fn test_missing_key_renders_key() {
        let catalog = Catalog::load("en").unwrap();
        assert_eq!(catalog.localize("notifications.nope", &[]), "notifications.nope");
    }

    #[test]
    fn test_non_object_root_rejected() {
        assert!(matches!(
            Catalog::from_json("en", "[]"),
            Err(LocaleError::NotAnObject)
        ));
    }
}
