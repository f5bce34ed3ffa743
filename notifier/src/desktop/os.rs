//! OS notification backend via notify-rust.
//!
//! Notification daemons only load icons and images from local files, so
//! remote avatar and attachment URLs are left out.

use notification_curation::DisplayPayload;
use notify_rust::Notification;

use super::{DesktopError, Present};

/// Shows payloads through the platform notification service.
#[derive(Debug, Clone)]
pub struct OsPresenter {
    app_name: String,
}

impl OsPresenter {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

impl Present for OsPresenter {
    fn present(&self, payload: &DisplayPayload) -> Result<(), DesktopError> {
        let mut notification = Notification::new();
        notification.appname(&self.app_name).summary(&payload.title);

        if let Some(body) = &payload.body {
            notification.body(body);
        }
        if let Some(icon) = local_resource(&payload.icon) {
            notification.icon(icon);
        }
        if let Some(image) = payload.image.as_deref().and_then(local_resource) {
            attach_image(&mut notification, image);
        }

        notification.show().map(|_| ())?;
        Ok(())
    }
}

/// A plain path, icon name or `file://` URI. Empty values and other
/// schemes yield `None`.
fn local_resource(location: &str) -> Option<&str> {
    if location.is_empty() {
        return None;
    }
    match location.split_once("://") {
        None => Some(location),
        Some((scheme, _)) if scheme.eq_ignore_ascii_case("file") => Some(location),
        Some(_) => {
            tracing::debug!(location, "Skipping remote resource");
            None
        }
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
fn attach_image(notification: &mut Notification, image: &str) {
    notification.hint(notify_rust::Hint::ImagePath(image.to_string()));
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn attach_image(_notification: &mut Notification, _image: &str) {}
