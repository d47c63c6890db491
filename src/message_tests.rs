//! Tests for message payload serialization.

use crate::message::{Attachment, AttachmentField, Message};
use serde_json::json;

mod serialization {
    use super::*;

    #[test]
    fn text_only_message_has_single_field() {
        let value = serde_json::to_value(Message::new("hello")).unwrap();

        assert_eq!(value, json!({"text": "hello"}));
    }

    #[test]
    fn default_message_is_empty_object() {
        let value = serde_json::to_value(Message::default()).unwrap();

        assert_eq!(value, json!({}));
    }

    #[test]
    fn overrides_are_included_when_set() {
        let msg = Message::new("deployed")
            .with_username("deploy-bot")
            .with_icon_emoji(":rocket:")
            .with_channel("#releases")
            .with_thread_ts("1700000000.000100");

        let value = serde_json::to_value(msg).unwrap();

        assert_eq!(
            value,
            json!({
                "text": "deployed",
                "username": "deploy-bot",
                "icon_emoji": ":rocket:",
                "channel": "#releases",
                "thread_ts": "1700000000.000100",
            })
        );
    }

    #[test]
    fn attachments_serialize_with_fields() {
        let msg = Message::default().with_attachment(Attachment {
            fallback: Some("Disk usage at 91%".to_string()),
            color: Some("warning".to_string()),
            title: Some("Disk usage".to_string()),
            fields: vec![AttachmentField {
                title: "Host".to_string(),
                value: "db-1".to_string(),
                short: true,
            }],
            ts: Some(1_700_000_000),
            ..Attachment::default()
        });

        let value = serde_json::to_value(msg).unwrap();

        assert_eq!(
            value,
            json!({
                "attachments": [{
                    "fallback": "Disk usage at 91%",
                    "color": "warning",
                    "title": "Disk usage",
                    "fields": [{"title": "Host", "value": "db-1", "short": true}],
                    "ts": 1_700_000_000,
                }]
            })
        );
    }

    #[test]
    fn mrkdwn_flag_is_serialized_when_disabled() {
        let msg = Message {
            mrkdwn: Some(false),
            ..Message::new("*literal*")
        };

        let value = serde_json::to_value(msg).unwrap();

        assert_eq!(value["mrkdwn"], json!(false));
    }
}

mod deserialization {
    use super::*;

    #[test]
    fn parses_slack_payload() {
        let msg: Message = serde_json::from_value(json!({
            "text": "hi",
            "icon_url": "https://example.com/a.png",
            "attachments": [{"text": "detail", "mrkdwn_in": ["text"]}],
        }))
        .unwrap();

        assert_eq!(msg.text.as_deref(), Some("hi"));
        assert_eq!(msg.icon_url.as_deref(), Some("https://example.com/a.png"));
        assert_eq!(msg.attachments.len(), 1);
        assert_eq!(msg.attachments[0].mrkdwn_in, vec!["text"]);
    }

    #[test]
    fn field_short_defaults_to_false() {
        let field: AttachmentField =
            serde_json::from_value(json!({"title": "a", "value": "b"})).unwrap();

        assert!(!field.short);
    }
}
