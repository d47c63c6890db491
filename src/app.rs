//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use crate::config::{ConfigError, field};
use slackhook::WebhookError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid args, missing required fields, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Delivery error (exit code 2) - network failure, rejected message, etc.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn delivery_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::MissingRequired { field: f, .. } if *f == field::URL => {
            eprintln!("\nRun 'slackhook init' to generate a configuration template.");
        }
        ConfigError::FileRead { .. } => {
            eprintln!("\nRun 'slackhook init' to generate a configuration template.");
        }
        _ => {}
    }
}

/// Prints a hint for common Slack rejection reasons.
pub fn print_delivery_hint(error: &WebhookError) {
    let WebhookError::Rejected { body, .. } = error else {
        return;
    };

    match body.trim() {
        "invalid_payload" => {
            eprintln!("\nSlack could not parse the payload; check the JSON structure.");
        }
        "no_service" | "no_team" | "team_disabled" => {
            eprintln!("\nThe webhook is disabled or was removed; create a new one.");
        }
        "channel_not_found" | "channel_is_archived" | "action_prohibited" => {
            eprintln!("\nThe target channel cannot be posted to with this webhook.");
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
