//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Webhook configuration section
    #[serde(default)]
    pub webhook: WebhookSection,

    /// Message defaults section
    #[serde(default)]
    pub message: MessageSection,
}

/// Webhook configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookSection {
    /// Webhook URL
    pub url: Option<String>,
}

/// Defaults applied to messages built from `--text`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageSection {
    /// Display name override
    pub username: Option<String>,

    /// Channel override (legacy webhooks only)
    pub channel: Option<String>,

    /// Emoji avatar shortcode
    pub icon_emoji: Option<String>,

    /// Image avatar URL
    pub icon_url: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r##"# slackhook configuration file

[webhook]
# Incoming Webhook URL (required, can be overridden by --url)
# Treat this URL as a secret: anyone holding it can post to the channel.
# url = "https://hooks.slack.com/services/T000/B000/XXXX"

[message]
# Defaults for messages sent with --text.
# JSON payloads passed with --payload are sent unchanged.

# Display name override
# username = "deploy-bot"

# Channel override (legacy webhooks only)
# channel = "#alerts"

# Avatar: an emoji shortcode or an image URL
# icon_emoji = ":rocket:"
# icon_url = "https://example.com/avatar.png"
"##
    .to_string()
}
