//! Notification data model for a Pleroma/Mastodon-compatible client.
//!
//! [`RawNotification`] mirrors the backend record. [`Notification`] is the
//! validated form: status notifications always carry their [`Status`].

mod de;
pub mod kind;
pub mod raw;
pub mod status;

use serde::{Deserialize, Serialize};

pub use kind::NotificationType;
pub use raw::RawNotification;
pub use status::{Attachment, Profile, Status};

/// A validated notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawNotification", into = "RawNotification")]
pub struct Notification {
    pub id: String,
    pub seen: bool,
    pub from_profile: Profile,
    pub kind: NotificationKind,
}

/// Per-type payload. Status-bearing variants own their status.
#[derive(Debug, Clone, PartialEq)]
pub enum NotificationKind {
    Like(Status),
    Mention(Status),
    Repeat(Status),
    EmojiReaction { status: Status, emoji: Option<String> },
    Poll(Status),
    Follow,
    FollowRequest,
    Move,
    Bite,
    Other {
        tag: String,
        status: Option<Status>,
    },
}

impl Notification {
    pub fn notification_type(&self) -> NotificationType {
        match &self.kind {
            NotificationKind::Like(_) => NotificationType::Like,
            NotificationKind::Mention(_) => NotificationType::Mention,
            NotificationKind::Repeat(_) => NotificationType::Repeat,
            NotificationKind::EmojiReaction { .. } => NotificationType::EmojiReaction,
            NotificationKind::Poll(_) => NotificationType::Poll,
            NotificationKind::Follow => NotificationType::Follow,
            NotificationKind::FollowRequest => NotificationType::FollowRequest,
            NotificationKind::Move => NotificationType::Move,
            NotificationKind::Bite => NotificationType::Bite,
            NotificationKind::Other { tag, .. } => NotificationType::Other(tag.clone()),
        }
    }

    pub fn status(&self) -> Option<&Status> {
        match &self.kind {
            NotificationKind::Like(status)
            | NotificationKind::Mention(status)
            | NotificationKind::Repeat(status)
            | NotificationKind::Poll(status)
            | NotificationKind::EmojiReaction { status, .. } => Some(status),
            NotificationKind::Other { status, .. } => status.as_ref(),
            NotificationKind::Follow
            | NotificationKind::FollowRequest
            | NotificationKind::Move
            | NotificationKind::Bite => None,
        }
    }

    /// The reacted emoji of an emoji reaction.
    pub fn emoji(&self) -> Option<&str> {
        match &self.kind {
            NotificationKind::EmojiReaction { emoji, .. } => emoji.as_deref(),
            _ => None,
        }
    }
}

/// Why a raw record could not become a [`Notification`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidNotification {
    #[error("{notification_type} notification {id} has no status")]
    MissingStatus {
        id: String,
        notification_type: NotificationType,
    },
}

impl TryFrom<RawNotification> for Notification {
    type Error = InvalidNotification;

    fn try_from(raw: RawNotification) -> Result<Self, Self::Error> {
        let RawNotification {
            id,
            notification_type,
            seen,
            status,
            from_profile,
            emoji,
        } = raw;

        let kind = match (notification_type, status) {
            (NotificationType::Like, Some(status)) => NotificationKind::Like(status),
            (NotificationType::Mention, Some(status)) => NotificationKind::Mention(status),
            (NotificationType::Repeat, Some(status)) => NotificationKind::Repeat(status),
            (NotificationType::Poll, Some(status)) => NotificationKind::Poll(status),
            (NotificationType::EmojiReaction, Some(status)) => {
                NotificationKind::EmojiReaction { status, emoji }
            }
            (NotificationType::Follow, _) => NotificationKind::Follow,
            (NotificationType::FollowRequest, _) => NotificationKind::FollowRequest,
            (NotificationType::Move, _) => NotificationKind::Move,
            (NotificationType::Bite, _) => NotificationKind::Bite,
            (NotificationType::Other(tag), status) => NotificationKind::Other { tag, status },
            (notification_type, None) => {
                return Err(InvalidNotification::MissingStatus {
                    id,
                    notification_type,
                });
            }
        };

        Ok(Self {
            id,
            seen,
            from_profile,
            kind,
        })
    }
}

impl From<Notification> for RawNotification {
    fn from(notification: Notification) -> Self {
        let notification_type = notification.notification_type();
        let (status, emoji) = match notification.kind {
            NotificationKind::Like(status)
            | NotificationKind::Mention(status)
            | NotificationKind::Repeat(status)
            | NotificationKind::Poll(status) => (Some(status), None),
            NotificationKind::EmojiReaction { status, emoji } => (Some(status), emoji),
            NotificationKind::Other { status, .. } => (status, None),
            NotificationKind::Follow
            | NotificationKind::FollowRequest
            | NotificationKind::Move
            | NotificationKind::Bite => (None, None),
        };

        Self {
            id: notification.id,
            notification_type,
            seen: notification.seen,
            status,
            from_profile: notification.from_profile,
            emoji,
        }
    }
}
