//! Wire-level request/response types and the HTTP client seam.

use super::HttpError;

/// A concrete HTTP call ready to be performed.
///
/// Built from a [`DispatchRequest`](super::DispatchRequest) by
/// [`build_wire_request`](super::build_wire_request): the method-specific
/// encoding has already happened, so any [`HttpClient`] can send it
/// without knowing about dispatch styles. Uses standard `http` crate
/// types to stay decoupled from the client implementation.
#[derive(Debug, Clone)]
pub struct WireRequest {
    /// Wire-level HTTP method
    pub method: http::Method,
    /// Target URL, query string included for GET dispatch
    pub url: url::Url,
    /// Headers to send
    pub headers: http::HeaderMap,
    /// Request body, if any
    pub body: Option<Vec<u8>>,
    /// Hard deadline for the whole call
    pub timeout: std::time::Duration,
}

impl WireRequest {
    /// Creates a bodiless request with empty headers.
    #[must_use]
    pub fn new(method: http::Method, url: url::Url, timeout: std::time::Duration) -> Self {
        Self {
            method,
            url,
            headers: http::HeaderMap::new(),
            body: None,
            timeout,
        }
    }

    /// Returns the body as a UTF-8 string, if present and valid.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        self.body.as_deref().and_then(|b| std::str::from_utf8(b).ok())
    }
}

/// Response to a dispatched call.
///
/// Only what outcome logging needs: the status code and a fully buffered
/// body.
#[derive(Debug, Clone)]
pub struct WireResponse {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response body (fully buffered)
    pub body: Vec<u8>,
}

impl WireResponse {
    /// Creates a response from its parts.
    #[must_use]
    pub const fn new(status: http::StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the body as a UTF-8 string, if valid.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// Trait for performing HTTP requests.
///
/// Abstracts the client implementation so tests can script responses
/// without a network and cross-cutting concerns can be layered on via
/// decorators. [`ReqwestClient`](super::ReqwestClient) is the production
/// implementation.
pub trait HttpClient: Send + Sync {
    /// Performs the call and returns the buffered response.
    ///
    /// Non-2xx responses are returned as `Ok` — classifying them as
    /// failures is the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failures: connection errors,
    /// timeouts, or an unconstructable request.
    fn perform(
        &self,
        request: WireRequest,
    ) -> impl std::future::Future<Output = Result<WireResponse, HttpError>> + Send;
}
