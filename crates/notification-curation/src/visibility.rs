//! Resolution of the notification types the user wants to see.

use notification_model::NotificationType;

use crate::config::Config;

/// Set of visible notification types, in resolution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleTypes(Vec<NotificationType>);

impl VisibleTypes {
    pub fn contains(&self, kind: &NotificationType) -> bool {
        self.0.contains(kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NotificationType> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<NotificationType> for VisibleTypes {
    fn from_iter<I: IntoIterator<Item = NotificationType>>(iter: I) -> Self {
        let mut types = Vec::new();
        for kind in iter {
            if !types.contains(&kind) {
                types.push(kind);
            }
        }
        Self(types)
    }
}

/// Types enabled by `config`. `bite` is always visible.
pub fn resolve_visible_types(config: &Config) -> VisibleTypes {
    let v = &config.notification_visibility;

    [
        (v.likes, NotificationType::Like),
        (v.mentions, NotificationType::Mention),
        (v.repeats, NotificationType::Repeat),
        (v.follows, NotificationType::Follow),
        (v.follow_request, NotificationType::FollowRequest),
        (v.moves, NotificationType::Move),
        (v.emoji_reactions, NotificationType::EmojiReaction),
        (v.polls, NotificationType::Poll),
        (true, NotificationType::Bite),
    ]
    .into_iter()
    .filter_map(|(enabled, kind)| enabled.then_some(kind))
    .collect()
}
