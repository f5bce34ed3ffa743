//! Notification type tags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The `type` tag of a notification.
///
/// Unknown tags are kept verbatim in [`NotificationType::Other`] so newer
/// backends do not break decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NotificationType {
    Like,
    Mention,
    Repeat,
    Follow,
    FollowRequest,
    Move,
    EmojiReaction,
    Poll,
    Bite,
    Other(String),
}

impl NotificationType {
    /// Wire name of the tag.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Like => "like",
            Self::Mention => "mention",
            Self::Repeat => "repeat",
            Self::Follow => "follow",
            Self::FollowRequest => "follow_request",
            Self::Move => "move",
            Self::EmojiReaction => "pleroma:emoji_reaction",
            Self::Poll => "poll",
            Self::Bite => "bite",
            Self::Other(tag) => tag.as_str(),
        }
    }

    /// Types that must reference an underlying status.
    pub fn is_status_notification(&self) -> bool {
        matches!(
            self,
            Self::Like | Self::Mention | Self::Repeat | Self::EmojiReaction | Self::Poll
        )
    }
}

impl From<&str> for NotificationType {
    fn from(tag: &str) -> Self {
        match tag {
            "like" => Self::Like,
            "mention" => Self::Mention,
            "repeat" => Self::Repeat,
            "follow" => Self::Follow,
            "follow_request" => Self::FollowRequest,
            "move" => Self::Move,
            "pleroma:emoji_reaction" => Self::EmojiReaction,
            "poll" => Self::Poll,
            "bite" => Self::Bite,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for NotificationType {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<NotificationType> for String {
    fn from(kind: NotificationType) -> Self {
        match kind {
            NotificationType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
