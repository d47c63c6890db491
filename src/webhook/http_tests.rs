//! Tests for HTTP request/response types.

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

mod http_request {
    use super::*;

    #[test]
    fn new_creates_request_with_method_and_url() {
        let url = url::Url::parse("https://example.com/api").unwrap();
        let req = HttpRequest::new(http::Method::PUT, url.clone());

        assert_eq!(req.method, http::Method::PUT);
        assert_eq!(req.url, url);
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn post_creates_post_request() {
        let url = url::Url::parse("https://example.com/").unwrap();
        let req = HttpRequest::post(url);

        assert_eq!(req.method, http::Method::POST);
    }

    #[test]
    fn with_body_sets_body() {
        let url = url::Url::parse("https://example.com/").unwrap();
        let body = br#"{"text":"hi"}"#.to_vec();
        let req = HttpRequest::post(url).with_body(body.clone());

        assert_eq!(req.body, Some(body));
    }

    #[test]
    fn with_header_appends_multiple_values_for_same_name() {
        let url = url::Url::parse("https://example.com/").unwrap();
        let req = HttpRequest::post(url)
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("text/plain"),
            )
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("application/json"),
            );

        assert_eq!(req.headers.get_all(http::header::ACCEPT).iter().count(), 2);
    }
}

mod http_response {
    use super::*;

    #[test]
    fn buffered_response_reads_back_body() {
        let resp = HttpResponse::buffered(http::StatusCode::BAD_REQUEST, "invalid_payload");

        assert_eq!(resp.status, http::StatusCode::BAD_REQUEST);
        assert_eq!(resp.read_body_text().unwrap(), "invalid_payload");
    }

    #[test]
    fn empty_body_reads_as_empty_string() {
        let resp = HttpResponse::buffered(http::StatusCode::OK, Vec::new());

        assert_eq!(resp.read_body_text().unwrap(), "");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let resp = HttpResponse::buffered(http::StatusCode::OK, vec![0xF0_u8, 0x28, 0x8C, 0x28]);

        assert!(resp.read_body_text().unwrap().contains('\u{FFFD}'));
    }

    #[test]
    fn read_error_is_propagated() {
        struct Broken;
        impl std::io::Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("boom"))
            }
        }

        let resp = HttpResponse::new(http::StatusCode::OK, http::HeaderMap::new(), Broken);

        assert_eq!(resp.read_body_text().unwrap_err().to_string(), "boom");
    }

    #[test]
    fn debug_omits_body() {
        let resp = HttpResponse::buffered(http::StatusCode::OK, "secret body");
        let debug = format!("{resp:?}");

        assert!(debug.contains("HttpResponse"));
        assert!(debug.contains("200"));
        assert!(!debug.contains("secret body"));
    }
}

mod http_client_trait {
    use super::*;
    use std::sync::Arc;

    struct StaticClient(http::StatusCode);

    impl HttpClient for StaticClient {
        fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
            Ok(HttpResponse::buffered(self.0, "ok"))
        }
    }

    fn status_via(client: &impl HttpClient) -> http::StatusCode {
        let url = url::Url::parse("https://example.com/").unwrap();
        client.request(HttpRequest::post(url)).unwrap().status
    }

    #[test]
    fn reference_forwards_to_client() {
        let client = StaticClient(http::StatusCode::ACCEPTED);

        assert_eq!(status_via(&&client), http::StatusCode::ACCEPTED);
    }

    #[test]
    fn arc_forwards_to_client() {
        let client = Arc::new(StaticClient(http::StatusCode::CREATED));

        assert_eq!(status_via(&client), http::StatusCode::CREATED);
    }

    #[test]
    fn errors_display_cause() {
        assert_eq!(HttpError::Timeout.to_string(), "Request timed out");
        assert!(
            HttpError::InvalidUrl("bad scheme".to_string())
                .to_string()
                .contains("bad scheme")
        );
    }
}
