//! Status, attachment and actor payloads carried by notifications.

use serde::{Deserialize, Serialize};

use crate::de::null_as_default;

/// The post (or poll) a status notification refers to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Status {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    /// Content-warning text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attachments: Vec<Attachment>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nsfw: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub muted: bool,
}

impl Status {
    /// Content warning, if present and non-empty.
    pub fn content_warning(&self) -> Option<&str> {
        self.summary.as_deref().filter(|s| !s.is_empty())
    }
}

/// A media attachment on a status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(default, deserialize_with = "null_as_default")]
    pub mimetype: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Attachment {
    pub fn is_image(&self) -> bool {
        self.mimetype.starts_with("image/")
    }
}

/// The account that triggered a notification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub profile_image_url: String,
}
