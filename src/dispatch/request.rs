//! Resolved dispatch request value types.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::UnknownMethod;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// HTTP call style for a webhook action.
///
/// A closed set: each variant has its own wire encoding, and new styles
/// are added as new variants with an exhaustive match in the request
/// builder — never as open-ended string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DispatchMethod {
    /// `GET` with the payload rendered as query parameters.
    #[serde(rename = "GET")]
    Get,
    /// `POST` with the payload as a JSON body.
    #[serde(rename = "POST")]
    Post,
    /// `POST` with the payload as URL-encoded form fields.
    #[serde(rename = "FORM")]
    Form,
}

impl DispatchMethod {
    /// Wire-level HTTP method for this dispatch style.
    #[must_use]
    pub fn http_method(self) -> http::Method {
        match self {
            Self::Get => http::Method::GET,
            Self::Post | Self::Form => http::Method::POST,
        }
    }

    /// Configuration-surface name: `GET`, `POST`, or `FORM`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Form => "FORM",
        }
    }
}

impl std::fmt::Display for DispatchMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DispatchMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "FORM" => Ok(Self::Form),
            other => Err(UnknownMethod(other.to_owned())),
        }
    }
}

/// A fully resolved webhook call, captured at registration time.
///
/// Built once per triggering event, immediately before enlistment:
/// interpolation has already happened, so state changes between
/// registration and commit cannot alter the dispatched payload. Owned by
/// the transaction hook until commit, then moved to the executor and
/// discarded after dispatch — nothing is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchRequest {
    /// Call style
    pub method: DispatchMethod,
    /// Target URL
    pub url: url::Url,
    /// Fully interpolated extra headers
    pub headers: BTreeMap<String, String>,
    /// Fully interpolated JSON payload
    pub payload: Value,
    /// Hard deadline for the HTTP call
    pub timeout: Duration,
    /// Log the curl-equivalent command and the raw response body
    pub verbose: bool,
}

impl DispatchRequest {
    /// Creates a request with no headers, an empty object payload, the
    /// default timeout, and verbose logging off.
    #[must_use]
    pub fn new(method: DispatchMethod, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: BTreeMap::new(),
            payload: Value::Object(serde_json::Map::new()),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            verbose: false,
        }
    }

    /// Sets the interpolated payload.
    #[must_use]
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = payload;
        self
    }

    /// Sets the interpolated headers.
    #[must_use]
    pub fn with_headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enables or disables verbose dispatch logging.
    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
