//! slackhook: Slack Incoming Webhook client
//!
//! A small library for posting messages to a Slack Incoming Webhook.
//!
//! The library reads no arguments, environment variables or files; the
//! webhook URL is passed to [`SlackWebhook::new`]. Configuration handling
//! belongs to the `slackhook` binary and is not exported:
//!
//! ```compile_fail
//! use slackhook::config::Cli;
//! ```

pub mod message;
pub mod webhook;

#[cfg(test)]
mod message_tests;

pub use message::{Attachment, AttachmentField, Message};
pub use webhook::{SlackWebhook, WebhookError};
