//! Newest-first ordering of notifications by id.
//!
//! Numeric ids are compared as arbitrary-precision integers. Opaque ids
//! (flake ids, federated tokens) always sort after numeric ones and are
//! compared lexicographically among themselves. Mixing both kinds is an
//! approximation: nothing guarantees an opaque id is older.

use std::cmp::Ordering;

use notification_model::Notification;

enum IdKey<'a> {
    /// Decimal digits with leading zeros stripped.
    Numeric(&'a str),
    Opaque(&'a str),
}

fn id_key(id: &str) -> IdKey<'_> {
    let trimmed = id.trim();
    if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        IdKey::Numeric(trimmed.trim_start_matches('0'))
    } else {
        IdKey::Opaque(id)
    }
}

/// `Less` when `a` is newer than `b`.
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    match (id_key(a), id_key(b)) {
        (IdKey::Numeric(x), IdKey::Numeric(y)) => {
            y.len().cmp(&x.len()).then_with(|| y.cmp(x))
        }
        (IdKey::Numeric(_), IdKey::Opaque(_)) => Ordering::Less,
        (IdKey::Opaque(_), IdKey::Numeric(_)) => Ordering::Greater,
        (IdKey::Opaque(x), IdKey::Opaque(y)) => y.cmp(x),
    }
}

pub fn compare(a: &Notification, b: &Notification) -> Ordering {
    compare_ids(&a.id, &b.id)
}

/// Sorts newest first, then moves seen items behind unseen ones.
/// Both passes are stable.
pub fn sort_notifications(notifications: &mut [Notification]) {
    notifications.sort_by(compare);
    notifications.sort_by_key(|n| n.seen);
}
