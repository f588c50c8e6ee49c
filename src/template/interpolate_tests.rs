//! Tests for the recursive structural interpolation walk.

use std::collections::BTreeMap;

use serde_json::json;

use super::{Interpolator, interpolate_value};

/// Interpolator replacing literal token occurrences from a fixed map.
struct Tokens(BTreeMap<&'static str, &'static str>);

impl Tokens {
    fn new(pairs: &[(&'static str, &'static str)]) -> Self {
        Self(pairs.iter().copied().collect())
    }
}

impl Interpolator for Tokens {
    fn interpolate(&self, template: &str) -> String {
        let mut result = template.to_owned();
        for (token, value) in &self.0 {
            result = result.replace(token, value);
        }
        result
    }
}

#[test]
fn string_leaf_is_substituted() {
    let tokens = Tokens::new(&[("${url}", "http://nohost/plone/section")]);
    let result = interpolate_value(&json!("${url}"), &tokens);
    assert_eq!(result, json!("http://nohost/plone/section"));
}

#[test]
fn substituted_output_is_trimmed() {
    let tokens = Tokens::new(&[("${title}", "  Front page  ")]);
    let result = interpolate_value(&json!("${title}"), &tokens);
    assert_eq!(result, json!("Front page"));
}

#[test]
fn structure_is_preserved() {
    let tokens = Tokens::new(&[("${a}", "A"), ("${b}", "B")]);
    let template = json!({
        "outer": {"inner": "${a}"},
        "list": ["${b}", {"deep": "${a}"}],
        "count": 3
    });
    let result = interpolate_value(&template, &tokens);
    assert_eq!(
        result,
        json!({
            "outer": {"inner": "A"},
            "list": ["B", {"deep": "A"}],
            "count": 3
        })
    );
}

#[test]
fn list_order_is_preserved() {
    let tokens = Tokens::new(&[("${a}", "first"), ("${b}", "second")]);
    let result = interpolate_value(&json!(["${a}", "${b}", "${a}"]), &tokens);
    assert_eq!(result, json!(["first", "second", "first"]));
}

#[test]
fn non_string_leaves_pass_through() {
    let tokens = Tokens::new(&[("${x}", "unused")]);
    let template = json!({"n": 1.5, "b": true, "z": null});
    assert_eq!(interpolate_value(&template, &tokens), template);
}

#[test]
fn object_keys_are_never_substituted() {
    let tokens = Tokens::new(&[("${k}", "replaced")]);
    let result = interpolate_value(&json!({"${k}": "${k}"}), &tokens);
    assert_eq!(result, json!({"${k}": "replaced"}));
}

#[test]
fn each_string_leaf_is_substituted_independently() {
    let tokens = Tokens::new(&[("${id}", "42")]);
    let result = interpolate_value(&json!({"a": "${id}", "b": "id=${id}"}), &tokens);
    assert_eq!(result, json!({"a": "42", "b": "id=42"}));
}
