//! Recursive structural interpolation over JSON values.

use serde_json::Value;

/// A token-substitution engine bound to one triggering event's subject.
///
/// The engine itself is an external collaborator: given a template string
/// it returns the string with every token replaced by a value drawn from
/// the subject. The contract is infallible by design — an engine that
/// cannot substitute should return the template unchanged rather than
/// fail, because substitution runs on the trigger path where an escaping
/// error would abort the host transaction.
///
/// [`HandlebarsInterpolator`](super::HandlebarsInterpolator) is the
/// default implementation; tests substitute their own.
pub trait Interpolator {
    /// Substitutes every token in `template` and returns the result.
    fn interpolate(&self, template: &str) -> String;
}

/// Recursively interpolates every string leaf of a JSON value.
///
/// - Strings are substituted through `interpolator` and trimmed.
/// - Arrays are walked element by element, order preserved.
/// - Objects are walked value by value; keys are never substituted.
/// - All other leaves (numbers, booleans, null) pass through unchanged.
///
/// The result is structurally identical to the input: only string leaves
/// differ.
#[must_use]
pub fn interpolate_value(value: &Value, interpolator: &dyn Interpolator) -> Value {
    match value {
        Value::String(text) => Value::String(interpolator.interpolate(text).trim().to_owned()),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| interpolate_value(item, interpolator))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, item)| (key.clone(), interpolate_value(item, interpolator)))
                .collect(),
        ),
        other => other.clone(),
    }
}
