//! Webhook action configuration surface.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::dispatch::{DEFAULT_TIMEOUT_SECS, DispatchMethod};
use crate::template;

use super::DescriptorError;

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Immutable configuration for one webhook rule action.
///
/// Created and edited by an external rule-configuration surface,
/// read-only during execution, shared across every invocation of its
/// rule. The templates hold JSON whose string leaves may contain
/// unsubstituted tokens; the surrounding JSON syntax must already be well
/// formed — [`validate`](Self::validate) enforces this when the rule is
/// saved, and the execution path re-checks defensively.
///
/// # Example
///
/// ```
/// use commithook::action::ActionDescriptor;
/// use commithook::dispatch::DispatchMethod;
/// use url::Url;
///
/// let descriptor = ActionDescriptor::new(
///     DispatchMethod::Post,
///     Url::parse("https://example.com/hook").unwrap(),
/// )
/// .with_payload_template(r#"{"url": "{{url}}"}"#);
///
/// assert!(descriptor.validate().is_ok());
/// assert_eq!(descriptor.summary(), "POST https://example.com/hook");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    /// Call style: GET query, POST JSON body, or POST form fields.
    pub method: DispatchMethod,
    /// Webhook target URL.
    pub url: url::Url,
    /// JSON payload template; empty means an empty object.
    #[serde(default)]
    pub payload_template: String,
    /// JSON object template for extra request headers; empty means none.
    #[serde(default)]
    pub headers_template: String,
    /// Log a curl-equivalent command and the raw response body.
    #[serde(default)]
    pub verbose: bool,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ActionDescriptor {
    /// Creates a descriptor with empty templates and default options.
    #[must_use]
    pub fn new(method: DispatchMethod, url: url::Url) -> Self {
        Self {
            method,
            url,
            payload_template: String::new(),
            headers_template: String::new(),
            verbose: false,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Sets the JSON payload template.
    #[must_use]
    pub fn with_payload_template(mut self, template: impl Into<String>) -> Self {
        self.payload_template = template.into();
        self
    }

    /// Sets the JSON headers template.
    #[must_use]
    pub fn with_headers_template(mut self, template: impl Into<String>) -> Self {
        self.headers_template = template.into();
        self
    }

    /// Enables or disables verbose dispatch logging.
    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Sets the per-request timeout in seconds.
    #[must_use]
    pub const fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// One-line summary for rule listings and log context, e.g.
    /// `POST https://example.com/hook`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} {}", self.method, self.url)
    }

    /// Per-request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validates the descriptor at configuration time.
    ///
    /// Both templates must be empty or parse as JSON, the headers
    /// template must parse to an object, and the timeout must be
    /// positive.
    ///
    /// # Errors
    ///
    /// Returns the first [`DescriptorError`] found; the message carries
    /// the JSON parser's diagnostic for template failures.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        template::validate(&self.payload_template).map_err(DescriptorError::PayloadTemplate)?;
        let headers = template::parse_or_empty(&self.headers_template)
            .map_err(DescriptorError::HeadersTemplate)?;
        if !headers.is_object() {
            return Err(DescriptorError::HeadersNotAnObject {
                found: template::json_type_name(&headers),
            });
        }
        if self.timeout_secs == 0 {
            return Err(DescriptorError::ZeroTimeout);
        }
        Ok(())
    }
}
