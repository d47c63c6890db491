//! slackhook: Slack Incoming Webhook client
//!
//! Entry point for the slackhook command-line tool.

use slackhook::SlackWebhook;
use std::process::ExitCode;

mod app;
mod config;

use config::{Cli, Command, ValidatedConfig, write_default_config};

use app::{exit_code, print_config_hint, print_delivery_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Handle init subcommand
    if let Some(Command::Init { output }) = &cli.command {
        return handle_init(output);
    }

    // Load and validate configuration
    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    setup_tracing(config.verbose);
    tracing::debug!("{config}");

    send(&config)
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Sends the configured payload once.
#[cfg(not(tarpaulin_include))]
fn send(config: &ValidatedConfig) -> ExitCode {
    let webhook = match SlackWebhook::new(config.url.as_str()) {
        Ok(webhook) => webhook,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return exit_code::CONFIG_ERROR;
        }
    };

    match webhook.send_message(&config.payload) {
        Ok(()) => {
            tracing::info!("Message delivered");
            exit_code::SUCCESS
        }
        Err(e) => {
            tracing::error!("Delivery failed: {e}");
            print_delivery_hint(&e);
            exit_code::delivery_error()
        }
    }
}
