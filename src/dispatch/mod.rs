//! Asynchronous webhook dispatch.
//!
//! This module provides:
//! - The resolved call value types ([`DispatchRequest`], [`DispatchMethod`])
//! - Wire request construction per method ([`build_wire_request`])
//! - Wire-level value types and the client seam ([`WireRequest`],
//!   [`WireResponse`], [`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - The bounded worker pool ([`DispatchPool`], [`Dispatcher`],
//!   [`PoolConfig`])
//! - Failure taxonomy ([`BuildError`], [`HttpError`], [`DispatchError`])
//!
//! Delivery is best effort by design: failures of any kind are logged
//! with the target method and URL and then dropped. There is no retry,
//! no dead-letter queue, and no acknowledgment tracking — by the time a
//! dispatch can fail, the application transaction that requested it has
//! already committed.

mod builder;
mod client;
mod error;
mod executor;
mod http;
mod request;

#[cfg(test)]
mod client_tests;
#[cfg(test)]
mod http_tests;
#[cfg(test)]
mod request_tests;

pub use builder::{build_wire_request, curl_command, scalar_text};
pub use client::ReqwestClient;
pub use error::{BuildError, DispatchError, HttpError, UnknownMethod};
pub use executor::{DispatchOutcome, DispatchPool, Dispatcher, PoolConfig};
pub use http::{HttpClient, WireRequest, WireResponse};
pub use request::{DEFAULT_TIMEOUT_SECS, DispatchMethod, DispatchRequest};
