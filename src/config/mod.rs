//! Configuration layer for the `slackhook` binary.
//!
//! This lives in the binary only; the library is configured
//! programmatically through [`slackhook::SlackWebhook`].
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing (`TomlConfig`)
//! - Validated configuration ([`ValidatedConfig`], `Payload`)
//! - Configuration file generation ([`write_default_config`])
//!
//! # Priority
//!
//! Values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **TOML config file**
//!
//! The message itself (`--text` or `--payload`) is CLI-only. Message
//! defaults from `[message]` apply to `--text` only; a `--payload` document
//! is sent unchanged.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod toml_tests;

pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use validated::{ValidatedConfig, write_default_config};
