//! Tests for dispatch request value types.

use std::time::Duration;

use serde_json::json;

use super::{DEFAULT_TIMEOUT_SECS, DispatchMethod, DispatchRequest};

fn test_url() -> url::Url {
    url::Url::parse("https://example.com/hook").unwrap()
}

mod method {
    use super::*;

    #[test]
    fn maps_to_wire_methods() {
        assert_eq!(DispatchMethod::Get.http_method(), http::Method::GET);
        assert_eq!(DispatchMethod::Post.http_method(), http::Method::POST);
        assert_eq!(DispatchMethod::Form.http_method(), http::Method::POST);
    }

    #[test]
    fn displays_configuration_names() {
        assert_eq!(DispatchMethod::Get.to_string(), "GET");
        assert_eq!(DispatchMethod::Post.to_string(), "POST");
        assert_eq!(DispatchMethod::Form.to_string(), "FORM");
    }

    #[test]
    fn parses_configuration_names() {
        assert_eq!("GET".parse::<DispatchMethod>().unwrap(), DispatchMethod::Get);
        assert_eq!(
            "POST".parse::<DispatchMethod>().unwrap(),
            DispatchMethod::Post
        );
        assert_eq!(
            "FORM".parse::<DispatchMethod>().unwrap(),
            DispatchMethod::Form
        );
    }

    #[test]
    fn rejects_unknown_names() {
        let error = "PUT".parse::<DispatchMethod>().unwrap_err();
        assert_eq!(error.0, "PUT");
    }

    #[test]
    fn serializes_as_configuration_names() {
        assert_eq!(
            serde_json::to_string(&DispatchMethod::Form).unwrap(),
            r#""FORM""#
        );
        let parsed: DispatchMethod = serde_json::from_str(r#""GET""#).unwrap();
        assert_eq!(parsed, DispatchMethod::Get);
    }
}

mod request {
    use super::*;

    #[test]
    fn new_uses_the_default_timeout_and_empty_payload() {
        let request = DispatchRequest::new(DispatchMethod::Post, test_url());
        assert_eq!(request.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(request.payload, json!({}));
        assert!(request.headers.is_empty());
        assert!(!request.verbose);
    }

    #[test]
    fn builders_set_every_field() {
        let request = DispatchRequest::new(DispatchMethod::Get, test_url())
            .with_payload(json!({"a": 1}))
            .with_headers([("X-Source".to_owned(), "site".to_owned())].into())
            .with_timeout(Duration::from_secs(5))
            .with_verbose(true);

        assert_eq!(request.payload, json!({"a": 1}));
        assert_eq!(request.headers["X-Source"], "site");
        assert_eq!(request.timeout, Duration::from_secs(5));
        assert!(request.verbose);
    }
}
