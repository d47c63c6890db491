//! Webhook layer for posting messages to Slack.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Sending messages to an Incoming Webhook ([`SlackWebhook`])

mod client;
mod error;
mod http;
mod slack;

#[cfg(test)]
mod http_tests;

pub use client::{DEFAULT_TIMEOUT, ReqwestClient};
pub use error::{HttpError, WebhookError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use slack::SlackWebhook;
