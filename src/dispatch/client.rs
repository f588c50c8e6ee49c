//! Production HTTP client backed by reqwest.

use super::{HttpClient, HttpError, WireRequest, WireResponse};

/// [`HttpClient`] implementation wrapping a shared [`reqwest::Client`].
///
/// Connection pooling comes from reqwest; the per-request timeout carried
/// by each [`WireRequest`] overrides any client-level default.
///
/// # Example
///
/// ```no_run
/// use commithook::dispatch::{HttpClient, ReqwestClient, WireRequest};
/// use std::time::Duration;
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::new();
/// let url = Url::parse("https://api.example.com/webhook")?;
/// let request = WireRequest::new(http::Method::GET, url, Duration::from_secs(120));
/// let response = client.perform(request).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a client with reqwest's default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Wraps an existing reqwest client.
    ///
    /// Useful when the host application needs custom TLS, proxies, or
    /// connection limits.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl HttpClient for ReqwestClient {
    async fn perform(&self, request: WireRequest) -> Result<WireResponse, HttpError> {
        let mut builder = self
            .inner
            .request(request.method, request.url.as_str())
            .timeout(request.timeout)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else if e.is_builder() {
                HttpError::InvalidRequest(e.to_string())
            } else {
                HttpError::Connection(Box::new(e))
            }
        })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::Connection(Box::new(e)))?
            .to_vec();

        Ok(WireResponse::new(status, body))
    }
}
