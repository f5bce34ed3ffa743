//! Notification records exactly as they arrive from the backend.

use serde::{Deserialize, Deserializer, Serialize};

use crate::de::null_as_default;
use crate::kind::NotificationType;
use crate::status::{Profile, Status};

/// An undecoded-shape notification record. May violate the status invariant;
/// convert with [`crate::Notification::try_from`] before display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawNotification {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub seen: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub from_profile: Profile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

impl RawNotification {
    /// `false` for a status notification that carries no status.
    pub fn is_valid(&self) -> bool {
        !(self.notification_type.is_status_notification() && self.status.is_none())
    }
}

/// Ids are text, but some backends send them as JSON numbers.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(id) => id,
        Id::Number(id) => id.to_string(),
    })
}
