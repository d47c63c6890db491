//! Slack Incoming Webhook client.

use http::header::CONTENT_TYPE;
use http::{HeaderValue, StatusCode};
use serde::Serialize;
use url::Url;

use super::{DEFAULT_TIMEOUT, HttpClient, HttpRequest, ReqwestClient, WebhookError};

/// Client for a single Slack Incoming Webhook.
///
/// Holds the normalized webhook URL and the HTTP transport. Both are fixed
/// at construction, so one instance can be shared between threads and
/// used for any number of independent sends.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation (defaults to [`ReqwestClient`])
///
/// # Example
///
/// ```no_run
/// use slackhook::Message;
/// use slackhook::webhook::SlackWebhook;
///
/// # fn example() -> Result<(), slackhook::webhook::WebhookError> {
/// let hook = SlackWebhook::new("https://hooks.slack.com/services/T000/B000/XXX")?;
/// hook.send_message(&Message::new("Deploy finished"))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SlackWebhook<H = ReqwestClient> {
    client: H,
    url: Url,
}

impl SlackWebhook<ReqwestClient> {
    /// Creates a client for `webhook_url` using the default transport.
    ///
    /// The transport bounds every request to [`DEFAULT_TIMEOUT`].
    ///
    /// # Errors
    ///
    /// - [`WebhookError::InvalidUrl`] if `webhook_url` does not parse
    /// - [`WebhookError::Transport`] if the HTTP client cannot be initialized
    pub fn new(webhook_url: &str) -> Result<Self, WebhookError> {
        let url = parse_url(webhook_url)?;
        let client = ReqwestClient::with_timeout(DEFAULT_TIMEOUT)?;

        Ok(Self { client, url })
    }
}

impl<H> SlackWebhook<H> {
    /// Creates a client for `webhook_url` that sends through `client`.
    ///
    /// Only syntax is checked; the scheme is not restricted.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::InvalidUrl`] if `webhook_url` does not parse.
    pub fn with_client(client: H, webhook_url: &str) -> Result<Self, WebhookError> {
        let url = parse_url(webhook_url)?;

        Ok(Self { client, url })
    }

    /// Returns the normalized webhook URL.
    #[must_use]
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn client(&self) -> &H {
        &self.client
    }
}

impl<H: HttpClient> SlackWebhook<H> {
    /// Posts `msg` to the webhook as JSON.
    ///
    /// Exactly one request is made per call. Only status 200 counts as
    /// success; its body is discarded unread.
    ///
    /// # Errors
    ///
    /// - [`WebhookError::Encoding`] if `msg` fails to serialize (nothing is sent)
    /// - [`WebhookError::Transport`] on connection failure or timeout
    /// - [`WebhookError::ResponseRead`] if an error response body cannot be read
    /// - [`WebhookError::Rejected`] for any status other than 200
    pub fn send_message<M>(&self, msg: &M) -> Result<(), WebhookError>
    where
        M: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(msg).map_err(WebhookError::Encoding)?;
        tracing::debug!(bytes = body.len(), "Posting message to Slack webhook");

        let request = HttpRequest::post(self.url.clone())
            .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .with_body(body);

        let response = self.client.request(request)?;
        let status = response.status;

        if status == StatusCode::OK {
            tracing::trace!("Slack webhook accepted message");
            return Ok(());
        }

        let body = response
            .read_body_text()
            .map_err(WebhookError::ResponseRead)?;
        tracing::debug!(status = status.as_u16(), "Slack webhook rejected message");

        Err(WebhookError::Rejected { status, body })
    }
}

fn parse_url(webhook_url: &str) -> Result<Url, WebhookError> {
    Url::parse(webhook_url).map_err(|e| WebhookError::InvalidUrl {
        url: webhook_url.to_string(),
        reason: e.to_string(),
    })
}
