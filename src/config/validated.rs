//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the binary. All validation is performed during construction.

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Serialize;
use url::Url;

use slackhook::Message;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// The body to post to the webhook.
///
/// Serializes transparently as whichever variant it holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// A message built from `--text` and the configured defaults
    Message(Message),
    /// A JSON document sent unchanged
    Raw(serde_json::Value),
}

/// Fully validated configuration ready for use by the binary.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Webhook URL (required)
    pub url: Url,

    /// Message to send (required)
    pub payload: Payload,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Webhook paths carry the secret token, so only the host is shown
        let payload = match self.payload {
            Payload::Message(_) => "message",
            Payload::Raw(_) => "raw json",
        };

        write!(
            f,
            "Config {{ host: {}, payload: {payload}, verbose: {} }}",
            self.url.host_str().unwrap_or("none"),
            self.verbose,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The URL is missing or invalid
    /// - Neither `--text` nor `--payload` is given
    /// - The payload cannot be read or is not valid JSON
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let url = Self::resolve_url(cli, toml)?;
        let payload = Self::resolve_payload(cli, toml)?;

        Ok(Self {
            url,
            payload,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        let url_str = cli
            .url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.webhook.url.as_deref()))
            .ok_or_else(|| {
                ConfigError::missing(field::URL, "Use --url or set webhook.url in config file")
            })?;

        Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
            url: url_str.to_string(),
            reason: e.to_string(),
        })
    }

    fn resolve_payload(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Payload, ConfigError> {
        if let Some(ref path) = cli.payload {
            return read_payload(path).map(Payload::Raw);
        }

        let text = cli.text.as_deref().ok_or_else(|| {
            ConfigError::missing(field::MESSAGE, "Use --text or --payload to provide a message")
        })?;

        let section = toml.map(|t| &t.message);

        let mut message = Message::new(text);
        message.username = merge(
            cli.username.as_ref(),
            section.and_then(|s| s.username.as_ref()),
        );
        message.channel = merge(
            cli.channel.as_ref(),
            section.and_then(|s| s.channel.as_ref()),
        );
        message.icon_emoji = merge(
            cli.icon_emoji.as_ref(),
            section.and_then(|s| s.icon_emoji.as_ref()),
        );
        message.icon_url = merge(
            cli.icon_url.as_ref(),
            section.and_then(|s| s.icon_url.as_ref()),
        );

        Ok(Payload::Message(message))
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

/// CLI value if given, otherwise the TOML value.
fn merge(cli: Option<&String>, toml: Option<&String>) -> Option<String> {
    cli.or(toml).cloned()
}

fn read_payload(path: &Path) -> Result<serde_json::Value, ConfigError> {
    let read_error = |source| ConfigError::PayloadRead {
        path: path.to_path_buf(),
        source,
    };

    let content = if path == Path::new(defaults::STDIN_PATH) {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(read_error)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(read_error)?
    };

    parse_payload(&content, path)
}

fn parse_payload(content: &str, path: &Path) -> Result<serde_json::Value, ConfigError> {
    serde_json::from_str(content).map_err(|e| ConfigError::PayloadParse {
        path: PathBuf::from(path),
        source: e,
    })
}
