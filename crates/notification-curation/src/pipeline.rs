//! Validation, ordering and type filtering of a notification snapshot.

use notification_model::{Notification, RawNotification};

use crate::config::Config;
use crate::ordering::sort_notifications;
use crate::visibility::{VisibleTypes, resolve_visible_types};

/// A raw record is displayable unless it is a status notification
/// without a status.
pub fn is_valid_notification(raw: &RawNotification) -> bool {
    raw.is_valid()
}

/// Builds the ordered, filtered view of `raw`.
///
/// `raw` is only read; the result is a fresh vector. Types are taken from
/// `explicit_types` when given, otherwise resolved from `config`.
pub fn curate(
    raw: &[RawNotification],
    config: &Config,
    explicit_types: Option<&VisibleTypes>,
) -> Vec<Notification> {
    let mut notifications: Vec<Notification> = raw
        .iter()
        .cloned()
        .filter_map(|record| match Notification::try_from(record) {
            Ok(notification) => Some(notification),
            Err(e) => {
                tracing::debug!(error = %e, "Dropping invalid notification");
                None
            }
        })
        .collect();

    sort_notifications(&mut notifications);

    let resolved;
    let visible = match explicit_types {
        Some(types) => types,
        None => {
            resolved = resolve_visible_types(config);
            &resolved
        }
    };
    notifications.retain(|n| visible.contains(&n.notification_type()));
    notifications
}

/// Curated view restricted to unseen notifications.
pub fn unseen(raw: &[RawNotification], config: &Config) -> Vec<Notification> {
    let mut notifications = curate(raw, config, None);
    notifications.retain(|n| !n.seen);
    notifications
}

/// Badge counter.
pub fn unseen_count(raw: &[RawNotification], config: &Config) -> usize {
    unseen(raw, config).len()
}
