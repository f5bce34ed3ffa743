//! Desktop notification delivery.
//!
//! [`QueueNotifier`] feeds an OS backend through a worker task;
//! [`LogNotifier`] only logs, for dry runs.

pub mod os;
pub mod queue;

use notification_curation::{DesktopNotifier, DisplayPayload};

pub use os::OsPresenter;
pub use queue::{QueueNotifier, start_worker};

/// Renders one payload. Called from the queue worker.
pub trait Present {
    fn present(&self, payload: &DisplayPayload) -> Result<(), DesktopError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DesktopError {
    #[error("Notification service error: {0}")]
    Service(#[from] notify_rust::error::Error),
}

/// Logs payloads instead of showing them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl DesktopNotifier for LogNotifier {
    fn dispatch(&self, payload: DisplayPayload) {
        tracing::info!(
            tag = %payload.tag,
            title = %payload.title,
            body = payload.body.as_deref().unwrap_or_default(),
            image = payload.image.as_deref().unwrap_or_default(),
            "Desktop notification (dry run)"
        );
    }
}
