//! Configuration snapshot read by the curation functions.

use serde::{Deserialize, Serialize};

/// Per-type visibility switches. Missing fields decode as `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationVisibility {
    pub likes: bool,
    pub mentions: bool,
    pub repeats: bool,
    pub follows: bool,
    pub follow_request: bool,
    pub moves: bool,
    pub emoji_reactions: bool,
    pub polls: bool,
}

impl NotificationVisibility {
    /// Every configurable type switched on.
    pub fn all() -> Self {
        Self {
            likes: true,
            mentions: true,
            repeats: true,
            follows: true,
            follow_request: true,
            moves: true,
            emoji_reactions: true,
            polls: true,
        }
    }
}

/// Immutable configuration passed to every pipeline call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub notification_visibility: NotificationVisibility,
    pub mute_words: Vec<String>,
    #[serde(rename = "webPushHideIfCW")]
    pub web_push_hide_if_cw: bool,
}
