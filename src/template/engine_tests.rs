//! Tests for the Handlebars-backed default engine.

use serde::Serialize;
use serde_json::json;

use super::{HandlebarsInterpolator, Interpolator};

#[test]
fn renders_tokens_from_the_subject() {
    let interpolator = HandlebarsInterpolator::from_value(json!({
        "title": "Front page",
        "url": "http://nohost/plone/section"
    }));
    assert_eq!(
        interpolator.interpolate("{{title}}: {{url}}"),
        "Front page: http://nohost/plone/section"
    );
}

#[test]
fn renders_nested_subject_fields() {
    let interpolator =
        HandlebarsInterpolator::from_value(json!({"review": {"state": "published"}}));
    assert_eq!(interpolator.interpolate("{{review.state}}"), "published");
}

#[test]
fn unknown_token_renders_empty() {
    let interpolator = HandlebarsInterpolator::from_value(json!({"title": "x"}));
    assert_eq!(interpolator.interpolate("[{{missing}}]"), "[]");
}

#[test]
fn template_without_tokens_passes_through() {
    let interpolator = HandlebarsInterpolator::from_value(json!({}));
    assert_eq!(interpolator.interpolate("plain text"), "plain text");
}

#[test]
fn broken_template_syntax_falls_back_to_the_raw_template() {
    let interpolator = HandlebarsInterpolator::from_value(json!({}));
    // Unclosed block: the render fails, the engine must not.
    assert_eq!(interpolator.interpolate("{{#if x}}"), "{{#if x}}");
}

#[test]
fn binds_any_serializable_subject() {
    #[derive(Serialize)]
    struct Subject {
        title: &'static str,
    }

    let interpolator = HandlebarsInterpolator::new(&Subject { title: "News" }).unwrap();
    assert_eq!(interpolator.interpolate("{{title}}"), "News");
}

#[test]
fn subject_accessor_returns_the_bound_value() {
    let subject = json!({"id": 7});
    let interpolator = HandlebarsInterpolator::from_value(subject.clone());
    assert_eq!(interpolator.subject(), &subject);
}
