//! Builds wire requests from dispatch requests.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use http::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use serde_json::Value;
use url::form_urlencoded;

use crate::template::json_type_name;

use super::{BuildError, DispatchMethod, DispatchRequest, WireRequest};

/// Builds the concrete wire call for a dispatch request.
///
/// Encoding per method variant:
/// - [`Post`](DispatchMethod::Post): JSON-encoded payload body,
///   `Content-Type: application/json`.
/// - [`Form`](DispatchMethod::Form): object payload flattened to
///   URL-encoded form fields,
///   `Content-Type: application/x-www-form-urlencoded`.
/// - [`Get`](DispatchMethod::Get): object payload flattened to query
///   parameters appended to the URL.
///
/// The request's interpolated headers are applied last, so a header
/// template can override the default content type.
///
/// # Errors
///
/// Returns [`BuildError`] when a GET/FORM payload is not a JSON object,
/// or when an interpolated header name or value is not valid HTTP.
pub fn build_wire_request(request: &DispatchRequest) -> Result<WireRequest, BuildError> {
    let mut wire = match request.method {
        DispatchMethod::Post => build_post(request),
        DispatchMethod::Form => build_form(request)?,
        DispatchMethod::Get => build_get(request)?,
    };
    apply_headers(&mut wire, &request.headers)?;
    Ok(wire)
}

fn build_post(request: &DispatchRequest) -> WireRequest {
    let mut wire = WireRequest::new(http::Method::POST, request.url.clone(), request.timeout);
    wire.headers
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    wire.body = Some(request.payload.to_string().into_bytes());
    wire
}

fn build_form(request: &DispatchRequest) -> Result<WireRequest, BuildError> {
    let fields = payload_fields(DispatchMethod::Form, &request.payload)?;
    let mut encoder = form_urlencoded::Serializer::new(String::new());
    for (key, value) in fields {
        encoder.append_pair(&key, &value);
    }
    let mut wire = WireRequest::new(http::Method::POST, request.url.clone(), request.timeout);
    wire.headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/x-www-form-urlencoded"),
    );
    wire.body = Some(encoder.finish().into_bytes());
    Ok(wire)
}

fn build_get(request: &DispatchRequest) -> Result<WireRequest, BuildError> {
    let fields = payload_fields(DispatchMethod::Get, &request.payload)?;
    let mut url = request.url.clone();
    {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in fields {
            pairs.append_pair(&key, &value);
        }
    }
    Ok(WireRequest::new(http::Method::GET, url, request.timeout))
}

/// Flattens an object payload into form/query fields.
fn payload_fields(
    method: DispatchMethod,
    payload: &Value,
) -> Result<Vec<(String, String)>, BuildError> {
    let Value::Object(map) = payload else {
        return Err(BuildError::PayloadNotAnObject {
            method,
            found: json_type_name(payload),
        });
    };
    Ok(map
        .iter()
        .map(|(key, value)| (key.clone(), scalar_text(value)))
        .collect())
}

/// Renders a JSON value as its plain textual form.
///
/// JSON-stringify, then strip surrounding double quotes: scalars lose
/// their quoting (`1` → `1`, `"x"` → `x`, `true` → `true`), while objects
/// and arrays stay raw JSON text. All leading and trailing quote
/// characters of string values are stripped, matching the encoding
/// existing webhook consumers already parse.
#[must_use]
pub fn scalar_text(value: &Value) -> String {
    value.to_string().trim_matches('"').to_owned()
}

fn apply_headers(
    wire: &mut WireRequest,
    headers: &BTreeMap<String, String>,
) -> Result<(), BuildError> {
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
            BuildError::InvalidHeaderName { name: name.clone() }
        })?;
        let header_value =
            HeaderValue::from_str(value).map_err(|_| BuildError::InvalidHeaderValue {
                name: name.clone(),
            })?;
        wire.headers.insert(header_name, header_value);
    }
    Ok(())
}

/// Renders a curl-equivalent command line for verbose dispatch logging.
///
/// Operator-facing only: lets whoever reads the log replay the exact
/// call by hand.
#[must_use]
pub fn curl_command(wire: &WireRequest) -> String {
    let mut command = format!("curl -X {}", wire.method);
    for (name, value) in &wire.headers {
        let value = value.to_str().unwrap_or("<binary>");
        let _ = write!(command, " -H '{name}: {value}'");
    }
    if let Some(body) = wire.body_text() {
        let _ = write!(command, " --data '{body}'");
    }
    let _ = write!(command, " '{}'", wire.url);
    command
}
