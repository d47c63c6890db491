//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::defaults;

/// slackhook: post a message to a Slack Incoming Webhook
///
/// Sends one message and exits. Values missing from the command line
/// are taken from the configuration file, if one is given.
#[derive(Debug, Parser)]
#[command(name = "slackhook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Webhook URL
    #[arg(long)]
    pub url: Option<String>,

    /// Message text
    #[arg(long, short, conflicts_with = "payload")]
    pub text: Option<String>,

    /// Path to a JSON payload sent as-is ('-' reads standard input).
    /// Message overrides and `[message]` defaults are not applied to it.
    #[arg(long, value_name = "PATH")]
    pub payload: Option<PathBuf>,

    /// Display name override
    #[arg(long, conflicts_with = "payload")]
    pub username: Option<String>,

    /// Channel override (legacy webhooks only)
    #[arg(long, conflicts_with = "payload")]
    pub channel: Option<String>,

    /// Emoji avatar, e.g. ':robot_face:'
    #[arg(long = "icon-emoji", conflicts_with = "payload")]
    pub icon_emoji: Option<String>,

    /// Image avatar URL
    #[arg(long = "icon-url", conflicts_with = "payload")]
    pub icon_url: Option<String>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for slackhook
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    #[cfg(test)]
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Parses CLI arguments from an iterator, returning clap's error.
    #[cfg(test)]
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }
}
