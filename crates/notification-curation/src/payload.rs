//! Desktop notification payload construction.

use notification_model::{Notification, NotificationKind, Status};
use serde::Serialize;

use crate::collab::Localize;
use crate::config::Config;

/// Bites have no catalog entry.
const BITE_BODY: &str = "bit";

/// What the OS notifier needs to render one notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayPayload {
    /// Notification id; lets the OS replace duplicates.
    pub tag: String,
    pub title: String,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

pub fn build_display_payload<L>(
    notification: &Notification,
    localize: &L,
    config: &Config,
) -> DisplayPayload
where
    L: Localize + ?Sized,
{
    let template = |key: &str| localize.localize(&format!("notifications.{key}"), &[]);

    let body = match &notification.kind {
        NotificationKind::Like(_) => Some(template("favorited_you")),
        NotificationKind::Repeat(_) => Some(template("repeated_you")),
        NotificationKind::Follow => Some(template("followed_you")),
        NotificationKind::Move => Some(template("migrated_to")),
        NotificationKind::FollowRequest => Some(template("follow_request")),
        NotificationKind::Poll(_) => Some(template("poll_ended")),
        NotificationKind::Bite => Some(BITE_BODY.to_string()),
        NotificationKind::EmojiReaction { emoji, .. } => Some(localize.localize(
            "notifications.reacted_with",
            &[emoji.as_deref().unwrap_or_default()],
        )),
        NotificationKind::Mention(status) => Some(mention_body(status, config)),
        NotificationKind::Other { .. } => None,
    };

    DisplayPayload {
        tag: notification.id.clone(),
        title: notification.from_profile.name.clone(),
        icon: notification.from_profile.profile_image_url.clone(),
        body,
        image: notification.status().and_then(preview_image),
    }
}

fn mention_body(status: &Status, config: &Config) -> String {
    match status.content_warning() {
        Some(summary) if config.web_push_hide_if_cw => summary.to_string(),
        Some(summary) => format!("{summary}:\n{}", status.text),
        None => status.text.clone(),
    }
}

/// Only the first attachment is considered.
fn preview_image(status: &Status) -> Option<String> {
    if status.nsfw {
        return None;
    }
    status
        .attachments
        .first()
        .filter(|a| a.is_image())
        .and_then(|a| a.url.clone())
}

#[cfg(test)]
mod tests {
    use notification_model::RawNotification;
    use serde_json::json;

    use super::*;

    fn notification(value: serde_json::Value) -> Notification {
        let raw: RawNotification = serde_json::from_value(value).unwrap();
        Notification::try_from(raw).unwrap()
    }

    fn echo(key: &str, args: &[&str]) -> String {
        if args.is_empty() {
            format!("<{key}>")
        } else {
            format!("<{key}|{}>", args.join(","))
        }
    }

    fn mention(summary: &str) -> Notification {
        notification(json!({
            "id": "20",
            "type": "mention",
            "from_profile": { "name": "Alice", "profile_image_url": "https://a/av.png" },
            "status": { "text": "body", "summary": summary }
        }))
    }

    #[test]
    fn test_header_fields() {
        let payload = build_display_payload(&mention(""), &echo, &Config::default());
        assert_eq!(payload.tag, "20");
        assert_eq!(payload.title, "Alice");
        assert_eq!(payload.icon, "https://a/av.png");
    }

    #[test]
    fn test_mention_content_warning_branches() {
        let shown = Config::default();
        let hidden = Config {
            web_push_hide_if_cw: true,
            ..Config::default()
        };

        let payload = build_display_payload(&mention("CW"), &echo, &shown);
        assert_eq!(payload.body.as_deref(), Some("CW:\nbody"));

        let payload = build_display_payload(&mention("CW"), &echo, &hidden);
        assert_eq!(payload.body.as_deref(), Some("CW"));

        let payload = build_display_payload(&mention(""), &echo, &hidden);
        assert_eq!(payload.body.as_deref(), Some("body"));
    }

    #[test]
    fn test_template_keys() {
        let cases = [
            (json!({ "id": "1", "type": "like", "status": {} }), "<notifications.favorited_you>"),
            (json!({ "id": "1", "type": "repeat", "status": {} }), "<notifications.repeated_you>"),
            (json!({ "id": "1", "type": "follow" }), "<notifications.followed_you>"),
            (json!({ "id": "1", "type": "move" }), "<notifications.migrated_to>"),
            (json!({ "id": "1", "type": "follow_request" }), "<notifications.follow_request>"),
            (json!({ "id": "1", "type": "poll", "status": {} }), "<notifications.poll_ended>"),
            (json!({ "id": "1", "type": "bite" }), "bit"),
        ];
        for (value, expected) in cases {
            let payload = build_display_payload(&notification(value), &echo, &Config::default());
            assert_eq!(payload.body.as_deref(), Some(expected));
        }
    }

    #[test]
    fn test_emoji_reaction_passes_emoji() {
        let n = notification(json!({
            "id": "1",
            "type": "pleroma:emoji_reaction",
            "emoji": "🦊",
            "status": {}
        }));
        let payload = build_display_payload(&n, &echo, &Config::default());
        assert_eq!(payload.body.as_deref(), Some("<notifications.reacted_with|🦊>"));
    }

    #[test]
    fn test_unknown_type_has_no_body() {
        let n = notification(json!({ "id": "1", "type": "pleroma:chat_mention" }));
        let payload = build_display_payload(&n, &echo, &Config::default());
        assert!(payload.body.is_none());
        assert!(serde_json::to_value(&payload).unwrap().get("body").is_none());
    }

    #[test]
    fn test_first_image_attachment_used() {
        let attachments = json!([
            { "mimetype": "image/png", "url": "u1" },
            { "mimetype": "video/mp4", "url": "u2" }
        ]);
        let safe = notification(json!({
            "id": "1",
            "type": "like",
            "status": { "nsfw": false, "attachments": attachments }
        }));
        let nsfw = notification(json!({
            "id": "1",
            "type": "like",
            "status": { "nsfw": true, "attachments": attachments }
        }));

        let payload = build_display_payload(&safe, &echo, &Config::default());
        assert_eq!(payload.image.as_deref(), Some("u1"));

        let payload = build_display_payload(&nsfw, &echo, &Config::default());
        assert!(payload.image.is_none());
        assert!(serde_json::to_value(&payload).unwrap().get("image").is_none());
    }

    #[test]
    fn test_only_first_attachment_considered() {
        let n = notification(json!({
            "id": "1",
            "type": "mention",
            "status": {
                "text": "t",
                "attachments": [
                    { "mimetype": "video/mp4", "url": "u1" },
                    { "mimetype": "image/png", "url": "u2" }
                ]
            }
        }));
        let payload = build_display_payload(&n, &echo, &Config::default());
        assert!(payload.image.is_none());
    }

    #[test]
    fn test_image_attachment_without_url_is_skipped() {
        let n = notification(json!({
            "id": "1",
            "type": "like",
            "status": { "attachments": [{ "mimetype": "image/png", "url": null }] }
        }));
        let payload = build_display_payload(&n, &echo, &Config::default());
        assert!(payload.image.is_none());
    }
}
