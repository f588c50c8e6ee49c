//! Tests for wire-level value types.

use std::time::Duration;

use super::{WireRequest, WireResponse};

fn test_url() -> url::Url {
    url::Url::parse("https://example.com/webhook").unwrap()
}

mod wire_request {
    use super::*;

    #[test]
    fn new_has_no_headers_and_no_body() {
        let request = WireRequest::new(http::Method::GET, test_url(), Duration::from_secs(120));
        assert!(request.headers.is_empty());
        assert!(request.body.is_none());
        assert_eq!(request.timeout, Duration::from_secs(120));
    }

    #[test]
    fn body_text_reads_utf8_bodies() {
        let mut request = WireRequest::new(http::Method::POST, test_url(), Duration::from_secs(1));
        request.body = Some(b"{\"a\":1}".to_vec());
        assert_eq!(request.body_text(), Some("{\"a\":1}"));
    }

    #[test]
    fn body_text_is_none_for_binary_bodies() {
        let mut request = WireRequest::new(http::Method::POST, test_url(), Duration::from_secs(1));
        request.body = Some(vec![0xFF, 0xFE]);
        assert_eq!(request.body_text(), None);
    }
}

mod wire_response {
    use super::*;

    #[test]
    fn two_hundreds_are_success() {
        assert!(WireResponse::new(http::StatusCode::OK, vec![]).is_success());
        assert!(WireResponse::new(http::StatusCode::CREATED, vec![]).is_success());
    }

    #[test]
    fn redirects_and_errors_are_not_success() {
        assert!(!WireResponse::new(http::StatusCode::FOUND, vec![]).is_success());
        assert!(!WireResponse::new(http::StatusCode::NOT_FOUND, vec![]).is_success());
        assert!(!WireResponse::new(http::StatusCode::INTERNAL_SERVER_ERROR, vec![]).is_success());
    }

    #[test]
    fn body_text_reads_utf8_bodies() {
        let response = WireResponse::new(http::StatusCode::OK, b"accepted".to_vec());
        assert_eq!(response.body_text(), Some("accepted"));
    }
}
