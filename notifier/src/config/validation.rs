//! Setting value validation.

use regex::Regex;
use std::sync::LazyLock;

static RE_LOCALE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2}(-[A-Z]{2})?$").unwrap());

const MAX_APP_NAME_LEN: usize = 64;

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "NOTIFIER_LOCALE" => {
            if !RE_LOCALE.is_match(value) {
                return Err("must look like 'en' or 'ja-JP'".into());
            }
        }
        "NOTIFICATION_APP_NAME" => {
            let len = value.chars().count();
            if len == 0 || len > MAX_APP_NAME_LEN {
                return Err(format!("must be 1-{MAX_APP_NAME_LEN} characters"));
            }
        }
        k if is_boolean_setting(k) => {
            if value != "true" && value != "false" {
                return Err("must be 'true' or 'false'".into());
            }
        }
        _ => {}
    }
    Ok(())
}

fn is_boolean_setting(key: &str) -> bool {
    key.starts_with("NOTIFICATION_VISIBILITY_")
        || matches!(key, "WEB_PUSH_HIDE_IF_CW" | "DESKTOP_NOTIFICATIONS_ENABLED")
}
