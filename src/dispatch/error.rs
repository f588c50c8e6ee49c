//! Error types for request building and dispatch.

use thiserror::Error;

use super::DispatchMethod;

/// Error for an unrecognized dispatch method name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown dispatch method '{0}': expected GET, POST, or FORM")]
pub struct UnknownMethod(pub String);

/// Transport-level HTTP failure.
///
/// Describes what went wrong on the wire without dictating recovery:
/// the dispatch layer logs these and moves on.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// Covers DNS resolution failures, connection refused, resets, and
    /// TLS errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The server did not respond within the request's timeout.
    #[error("Request timed out")]
    Timeout,

    /// The client could not construct the request.
    ///
    /// A configuration problem, not a transient failure.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Failure to turn a dispatch request into a wire request.
#[derive(Debug, Error)]
pub enum BuildError {
    /// GET and FORM dispatch flatten the payload into fields, which
    /// requires a JSON object.
    #[error("{method} dispatch requires a JSON object payload, got {found}")]
    PayloadNotAnObject {
        /// The dispatch style being built
        method: DispatchMethod,
        /// What the payload actually was
        found: &'static str,
    },

    /// An interpolated header name is not a valid HTTP header name.
    #[error("Invalid header name '{name}'")]
    InvalidHeaderName {
        /// The offending name
        name: String,
    },

    /// An interpolated header value is not a valid HTTP header value.
    #[error("Invalid header value for '{name}'")]
    InvalidHeaderValue {
        /// Name of the header whose value was rejected
        name: String,
    },
}

/// Umbrella failure for one dispatch attempt.
///
/// Never propagated past the executor boundary: every variant ends up as
/// a log line carrying the target method and URL.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The wire request could not be built.
    #[error("Failed to build request: {0}")]
    Build(#[from] BuildError),

    /// Transport failure while performing the call.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The server answered with a non-success status.
    #[error("Webhook returned {status}")]
    NonSuccessStatus {
        /// The response status code
        status: http::StatusCode,
        /// The response body, if it was valid UTF-8
        body: Option<String>,
    },

    /// The pool's workers are gone; the process is shutting down.
    #[error("Dispatch queue is closed")]
    QueueClosed,
}
