//! Production HTTP client implementation using reqwest.

use std::time::Duration;

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Total time allowed for one request, including connection setup.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Production HTTP client using blocking reqwest.
///
/// This is a thin wrapper around `reqwest::blocking::Client` that
/// implements the [`HttpClient`] trait. The client pools connections, so
/// clones share the pool.
///
/// # Example
///
/// ```no_run
/// use slackhook::webhook::{HttpClient, HttpRequest, ReqwestClient};
/// use url::Url;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::with_timeout(slackhook::webhook::DEFAULT_TIMEOUT)?;
/// let url = Url::parse("https://hooks.slack.com/services/T000/B000/XXX")?;
/// let request = HttpRequest::post(url).with_body(br#"{"text":"hi"}"#.to_vec());
/// let response = client.request(request)?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Creates a new HTTP client whose requests are bounded by `timeout`.
    ///
    /// [`SlackWebhook::new`](super::SlackWebhook::new) uses [`DEFAULT_TIMEOUT`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Connection`] if the client cannot be built,
    /// e.g. when the TLS backend fails to initialize.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        let inner = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HttpError::Connection(Box::new(e)))?;

        Ok(Self { inner })
    }

    /// Creates an HTTP client from an existing reqwest client.
    ///
    /// Useful when you need custom configuration (proxy, TLS, etc.).
    /// The caller is responsible for the timeout of `client`.
    #[must_use]
    pub const fn from_client(client: reqwest::blocking::Client) -> Self {
        Self { inner: client }
    }
}

impl HttpClient for ReqwestClient {
    fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = self.inner.request(req.method, req.url.as_str());

        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder.send().map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else if e.is_builder() {
                HttpError::InvalidUrl(e.to_string())
            } else {
                HttpError::Connection(Box::new(e))
            }
        })?;

        let status = response.status();
        let headers = response.headers().clone();

        // The body stays on the wire until the caller reads it
        Ok(HttpResponse::new(status, headers, response))
    }
}
