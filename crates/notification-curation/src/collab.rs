//! Seams to the services the curation core calls out to.

use notification_model::Status;

use crate::payload::DisplayPayload;

/// Message lookup by key with positional arguments (`{0}`, `{1}`, ...).
pub trait Localize {
    fn localize(&self, key: &str, args: &[&str]) -> String;
}

impl<F> Localize for F
where
    F: Fn(&str, &[&str]) -> String,
{
    fn localize(&self, key: &str, args: &[&str]) -> String {
        self(key, args)
    }
}

/// Mute-word predicate. Any returned hit means the status is muted.
pub trait MuteWordMatcher {
    fn hits<'w>(&self, status: &Status, mute_words: &'w [String]) -> Vec<&'w str>;
}

/// OS notification sink. Fire-and-forget: delivery and permission
/// failures stay inside the implementation.
pub trait DesktopNotifier {
    fn dispatch(&self, payload: DisplayPayload);
}
