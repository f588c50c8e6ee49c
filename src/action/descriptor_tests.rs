//! Tests for the action configuration surface.

use std::time::Duration;

use super::{ActionDescriptor, DescriptorError};
use crate::dispatch::DispatchMethod;

fn descriptor() -> ActionDescriptor {
    ActionDescriptor::new(
        DispatchMethod::Post,
        url::Url::parse("https://example.com/hook").unwrap(),
    )
}

mod validation {
    use super::*;

    #[test]
    fn empty_templates_are_valid() {
        assert!(descriptor().validate().is_ok());
    }

    #[test]
    fn json_templates_are_valid() {
        let descriptor = descriptor()
            .with_payload_template(r#"{"url": "${url}"}"#)
            .with_headers_template(r#"{"X-Source": "${site}"}"#);
        assert!(descriptor.validate().is_ok());
    }

    #[test]
    fn malformed_payload_template_is_rejected_with_the_parser_message() {
        let error = descriptor()
            .with_payload_template("{bad json")
            .validate()
            .unwrap_err();
        let DescriptorError::PayloadTemplate(source) = error else {
            panic!("expected PayloadTemplate, got {error:?}");
        };
        assert!(source.to_string().contains("not valid JSON"));
    }

    #[test]
    fn malformed_headers_template_is_rejected() {
        let error = descriptor()
            .with_headers_template("[unterminated")
            .validate()
            .unwrap_err();
        assert!(matches!(error, DescriptorError::HeadersTemplate(_)));
    }

    #[test]
    fn non_object_headers_template_is_rejected() {
        let error = descriptor()
            .with_headers_template(r#"["X-Source"]"#)
            .validate()
            .unwrap_err();
        assert!(matches!(
            error,
            DescriptorError::HeadersNotAnObject { found: "an array" }
        ));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let error = descriptor().with_timeout_secs(0).validate().unwrap_err();
        assert!(matches!(error, DescriptorError::ZeroTimeout));
    }
}

mod serde_surface {
    use super::*;

    #[test]
    fn round_trips_through_json() {
        let original = descriptor()
            .with_payload_template(r#"{"url": "${url}"}"#)
            .with_verbose(true)
            .with_timeout_secs(30);

        let text = serde_json::to_string(&original).unwrap();
        let restored: ActionDescriptor = serde_json::from_str(&text).unwrap();

        assert_eq!(restored, original);
    }

    #[test]
    fn method_serializes_as_its_configuration_name() {
        let text = serde_json::to_string(&descriptor()).unwrap();
        assert!(text.contains(r#""method":"POST""#));
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let restored: ActionDescriptor = serde_json::from_str(
            r#"{"method": "FORM", "url": "https://example.com/hook"}"#,
        )
        .unwrap();

        assert_eq!(restored.method, DispatchMethod::Form);
        assert_eq!(restored.timeout_secs, 120);
        assert!(restored.payload_template.is_empty());
        assert!(restored.headers_template.is_empty());
        assert!(!restored.verbose);
    }
}

mod accessors {
    use super::*;

    #[test]
    fn summary_is_method_then_url() {
        assert_eq!(descriptor().summary(), "POST https://example.com/hook");
    }

    #[test]
    fn timeout_converts_to_a_duration() {
        assert_eq!(
            descriptor().with_timeout_secs(5).timeout(),
            Duration::from_secs(5)
        );
    }

    #[test]
    fn default_timeout_is_two_minutes() {
        assert_eq!(descriptor().timeout(), Duration::from_secs(120));
    }
}
