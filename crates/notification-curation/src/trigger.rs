//! Per-notification decision whether a desktop notification fires.

use notification_model::{Notification, NotificationKind, Status};

use crate::collab::{DesktopNotifier, Localize, MuteWordMatcher};
use crate::config::Config;
use crate::payload::build_display_payload;
use crate::visibility::resolve_visible_types;

/// A status is muted when flagged by the backend or hit by a mute word.
pub fn is_muted<M>(status: &Status, config: &Config, matcher: &M) -> bool
where
    M: MuteWordMatcher + ?Sized,
{
    status.muted || !matcher.hits(status, &config.mute_words).is_empty()
}

/// Decides whether a newly observed notification should reach the OS.
///
/// Only mentions are subject to muting.
pub fn should_notify<M>(notification: &Notification, config: &Config, matcher: &M) -> bool
where
    M: MuteWordMatcher + ?Sized,
{
    if notification.seen {
        return false;
    }

    let kind = notification.notification_type();
    if !resolve_visible_types(config).contains(&kind) {
        tracing::debug!(id = %notification.id, %kind, "Notification type hidden");
        return false;
    }

    if let NotificationKind::Mention(status) = &notification.kind {
        if is_muted(status, config, matcher) {
            tracing::debug!(id = %notification.id, "Mention muted");
            return false;
        }
    }

    true
}

/// Runs the decision and, when it passes, hands the payload to `notifier`.
/// Returns whether a dispatch happened.
pub fn maybe_show_notification<L, M, N>(
    notification: &Notification,
    config: &Config,
    localize: &L,
    matcher: &M,
    notifier: &N,
) -> bool
where
    L: Localize + ?Sized,
    M: MuteWordMatcher + ?Sized,
    N: DesktopNotifier + ?Sized,
{
    if !should_notify(notification, config, matcher) {
        return false;
    }
    notifier.dispatch(build_display_payload(notification, localize, config));
    true
}
