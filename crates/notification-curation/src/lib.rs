//! Notification curation: visibility, ordering, muting and desktop payloads.
//!
//! Everything here is synchronous and reads only its arguments. The
//! caller supplies the configuration snapshot and the collaborators
//! ([`Localize`], [`MuteWordMatcher`], [`DesktopNotifier`]).

pub mod collab;
pub mod config;
pub mod ordering;
pub mod payload;
pub mod pipeline;
pub mod trigger;
pub mod visibility;

pub use collab::{DesktopNotifier, Localize, MuteWordMatcher};
pub use config::{Config, NotificationVisibility};
pub use ordering::{compare, compare_ids, sort_notifications};
pub use payload::{DisplayPayload, build_display_payload};
pub use pipeline::{curate, is_valid_notification, unseen, unseen_count};
pub use trigger::{is_muted, maybe_show_notification, should_notify};
pub use visibility::{VisibleTypes, resolve_visible_types};
