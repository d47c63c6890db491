//! Slack message payload types.
//!
//! A local mirror of the fields an Incoming Webhook accepts. The webhook
//! client does not depend on these types: any [`Serialize`] value can be
//! sent, including a raw `serde_json::Value`.

use serde::{Deserialize, Serialize};

/// A message posted through an Incoming Webhook.
///
/// Unset fields are omitted from the JSON body so Slack applies the
/// webhook's own defaults (channel, username, icon).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Plain message body (supports Slack `mrkdwn` unless disabled)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Overrides the display name of the webhook
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Emoji shortcode used as the avatar, e.g. `:ghost:`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<String>,

    /// Image URL used as the avatar
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,

    /// Target channel override (legacy webhooks only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,

    /// Timestamp of the parent message when replying in a thread
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_ts: Option<String>,

    /// Set to `false` to post `text` verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mrkdwn: Option<bool>,

    /// Rich-content blocks shown below the text
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl Message {
    /// Creates a message with the given text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the emoji avatar.
    #[must_use]
    pub fn with_icon_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.icon_emoji = Some(emoji.into());
        self
    }

    /// Sets the image avatar.
    #[must_use]
    pub fn with_icon_url(mut self, url: impl Into<String>) -> Self {
        self.icon_url = Some(url.into());
        self
    }

    /// Sets the channel override.
    #[must_use]
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Posts the message as a reply in the thread of `ts`.
    #[must_use]
    pub fn with_thread_ts(mut self, ts: impl Into<String>) -> Self {
        self.thread_ts = Some(ts.into());
        self
    }

    /// Appends an attachment.
    #[must_use]
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }
}

/// A legacy message attachment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Plain-text summary for clients that cannot render attachments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,

    /// Sidebar color: `good`, `warning`, `danger`, or a hex code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Text shown above the attachment block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pretext: Option<String>,

    /// Small name line shown above the title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,

    /// URL opened when the author name is clicked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_link: Option<String>,

    /// 16px image shown left of the author name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_icon: Option<String>,

    /// Bold heading of the attachment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// URL opened when the title is clicked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_link: Option<String>,

    /// Main attachment body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Table cells shown below the text
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<AttachmentField>,

    /// Full-width image shown at the bottom
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Thumbnail shown to the right of the text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,

    /// Short text shown at the very bottom
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,

    /// Small image shown left of the footer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_icon: Option<String>,

    /// Unix timestamp shown in the footer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<i64>,

    /// Names of fields that should be rendered as `mrkdwn`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mrkdwn_in: Vec<String>,
}

/// A title/value pair rendered as a table cell inside an attachment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentField {
    /// Bold label shown above the value
    pub title: String,
    /// Cell contents
    pub value: String,
    /// Whether the field is narrow enough to sit next to another one
    #[serde(default)]
    pub short: bool,
}
