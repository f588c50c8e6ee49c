//! Trigger-side execution: resolve the call, enlist it transactionally.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use crate::dispatch::{DispatchRequest, Dispatcher, scalar_text};
use crate::template::{self, Interpolator, interpolate_value};
use crate::txn::{HostTransaction, SideEffect};

use super::ActionDescriptor;

/// Resolves the fully interpolated dispatch request for one trigger.
///
/// Parses both templates (empty → empty object), substitutes every
/// string leaf through `interpolator`, and coerces the headers object to
/// a name → value map, rendering non-string values as their plain
/// textual form.
///
/// Returns `None` — with a warning — when a stored template fails to
/// parse or the headers are not an object. Malformed templates are a
/// configuration-time error caught by
/// [`ActionDescriptor::validate`]; at trigger time they are only logged,
/// because an error escaping here would abort the transaction that
/// triggered the rule.
#[must_use]
pub fn resolve_request(
    descriptor: &ActionDescriptor,
    interpolator: &dyn Interpolator,
) -> Option<DispatchRequest> {
    let payload = match template::parse_or_empty(&descriptor.payload_template) {
        Ok(value) => interpolate_value(&value, interpolator),
        Err(error) => {
            tracing::warn!(
                action = %descriptor.summary(),
                %error,
                "Skipping webhook: payload template failed to parse"
            );
            return None;
        }
    };
    let headers = match template::parse_or_empty(&descriptor.headers_template) {
        Ok(value) => header_map(descriptor, &interpolate_value(&value, interpolator))?,
        Err(error) => {
            tracing::warn!(
                action = %descriptor.summary(),
                %error,
                "Skipping webhook: headers template failed to parse"
            );
            return None;
        }
    };
    Some(
        DispatchRequest::new(descriptor.method, descriptor.url.clone())
            .with_payload(payload)
            .with_headers(headers)
            .with_timeout(descriptor.timeout())
            .with_verbose(descriptor.verbose),
    )
}

/// Coerces an interpolated headers value into a name → value map.
fn header_map(descriptor: &ActionDescriptor, value: &Value) -> Option<BTreeMap<String, String>> {
    let Value::Object(map) = value else {
        tracing::warn!(
            action = %descriptor.summary(),
            "Skipping webhook: headers template is not a JSON object"
        );
        return None;
    };
    Some(
        map.iter()
            .map(|(name, item)| {
                let text = match item {
                    Value::String(text) => text.clone(),
                    other => scalar_text(other),
                };
                (name.clone(), text)
            })
            .collect(),
    )
}

/// Executes the webhook action for one triggering event.
///
/// The request is resolved — interpolation included — **now**, at
/// registration time; the enlisted [`SideEffect`] only hands the captured
/// request to `dispatcher` once the transaction reaches a successful
/// commit. If the transaction aborts instead, nothing is ever submitted.
/// Dispatch failures after commit are logged by the pool and never reach
/// the triggering framework.
///
/// Returns `true` to the triggering framework in every case: a malformed
/// template is logged and the webhook skipped, never failing the
/// trigger.
pub fn execute(
    descriptor: &ActionDescriptor,
    interpolator: &dyn Interpolator,
    txn: &mut dyn HostTransaction,
    dispatcher: Arc<dyn Dispatcher>,
) -> bool {
    let Some(request) = resolve_request(descriptor, interpolator) else {
        return true;
    };
    let effect = SideEffect::new(descriptor.summary(), move || {
        dispatcher.submit(request).map_err(Into::into)
    });
    txn.join(Box::new(effect));
    true
}
