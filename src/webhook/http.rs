//! HTTP request/response types and client trait.

use std::fmt;
use std::io::Read;

use super::HttpError;

/// An HTTP request to be sent.
///
/// This is a value type that can be constructed and passed to any
/// [`HttpClient`] implementation. It uses standard `http` crate types
/// for method and headers.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: http::Method,
    /// Target URL
    pub url: url::Url,
    /// HTTP headers to send
    pub headers: http::HeaderMap,
    /// Optional request body
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Creates a new HTTP request with the given method and URL.
    ///
    /// Headers are initialized to an empty map and body is `None`.
    #[must_use]
    pub fn new(method: http::Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: http::HeaderMap::new(),
            body: None,
        }
    }

    /// Creates a POST request to the given URL.
    #[must_use]
    pub fn post(url: url::Url) -> Self {
        Self::new(http::Method::POST, url)
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Adds a header to the request.
    ///
    /// If the header name already exists, the value is appended.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }
}

/// An HTTP response received from a server.
///
/// The body is left unread as a stream owned by the response. Dropping
/// the response releases the stream and the underlying connection, so
/// callers that only care about the status never touch the body.
pub struct HttpResponse {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
    body: Box<dyn Read + Send>,
}

impl HttpResponse {
    /// Creates a new HTTP response around an unread body stream.
    #[must_use]
    pub fn new(
        status: http::StatusCode,
        headers: http::HeaderMap,
        body: impl Read + Send + 'static,
    ) -> Self {
        Self {
            status,
            headers,
            body: Box::new(body),
        }
    }

    /// Creates a response with a fully buffered body.
    #[must_use]
    pub fn buffered(status: http::StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self::new(
            status,
            http::HeaderMap::new(),
            std::io::Cursor::new(body.into()),
        )
    }

    /// Reads the remaining body into a string, consuming the response.
    ///
    /// Invalid UTF-8 sequences are replaced rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns the I/O error raised by the body stream.
    pub fn read_body_text(mut self) -> std::io::Result<String> {
        let mut buf = Vec::new();
        self.body.read_to_end(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

/// Trait for making blocking HTTP requests.
///
/// # Design
///
/// This trait abstracts the HTTP client implementation, enabling:
/// - Dependency injection for testing with mock transports
/// - Swapping HTTP libraries without changing calling code
///
/// # Example
///
/// ```
/// use slackhook::webhook::{HttpClient, HttpError, HttpRequest, HttpResponse};
///
/// struct AlwaysOk;
///
/// impl HttpClient for AlwaysOk {
///     fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::buffered(http::StatusCode::OK, "ok"))
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Sends an HTTP request and returns the response once headers arrive.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when:
    /// - Network connection fails ([`HttpError::Connection`])
    /// - Request times out ([`HttpError::Timeout`])
    /// - The URL cannot be requested ([`HttpError::InvalidUrl`])
    fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError>;
}

impl<T: HttpClient + ?Sized> HttpClient for &T {
    fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).request(req)
    }
}

impl<T: HttpClient + ?Sized> HttpClient for std::sync::Arc<T> {
    fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).request(req)
    }
}
