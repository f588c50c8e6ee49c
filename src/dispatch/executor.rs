//! Bounded-concurrency dispatch pool.

use std::sync::{Arc, OnceLock};

use tokio::sync::{Mutex, mpsc};

use super::{
    DispatchError, DispatchRequest, HttpClient, ReqwestClient, WireResponse, build_wire_request,
    curl_command,
};

/// Sink for resolved dispatch requests.
///
/// [`submit`](Self::submit) returns once the request is queued; the HTTP
/// call happens later on a pool worker. From the commit hook's point of
/// view dispatch is fire-and-forget — the commit path never waits on the
/// network.
pub trait Dispatcher: Send + Sync {
    /// Enqueues a request for asynchronous delivery.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::QueueClosed`] when the pool's workers are
    /// gone, which only happens during process shutdown.
    fn submit(&self, request: DispatchRequest) -> Result<(), DispatchError>;
}

/// Worker pool configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// Number of concurrent dispatch workers.
    ///
    /// One worker serializes deliveries, keeping dispatch order close to
    /// trigger order. More workers raise throughput but interleave calls
    /// to the same target. Always bounded.
    pub workers: usize,
}

impl PoolConfig {
    /// Default worker count.
    pub const DEFAULT_WORKERS: usize = 1;

    /// Creates a config with the default single worker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            workers: Self::DEFAULT_WORKERS,
        }
    }

    /// Sets the worker count.
    ///
    /// # Panics
    ///
    /// Panics if `workers` is zero.
    #[must_use]
    pub const fn with_workers(mut self, workers: usize) -> Self {
        assert!(workers >= 1, "workers must be at least 1");
        self.workers = workers;
        self
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of one dispatch attempt.
///
/// Ephemeral: produced on the worker, turned into a log line, and
/// dropped. Nothing downstream consumes it.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// The server answered with a 2xx status.
    Delivered {
        /// The response status code
        status: http::StatusCode,
        /// The response body, if it was valid UTF-8
        body: Option<String>,
    },
    /// The request failed to build, failed on the wire, or came back
    /// non-2xx.
    Failed(DispatchError),
}

/// Asynchronous webhook delivery pool.
///
/// A fixed set of workers drains an unbounded queue of
/// [`DispatchRequest`]s; each delivery carries its own timeout, and every
/// failure is logged with the target method and URL, then dropped.
///
/// # Lifecycle
///
/// The process-wide pool ([`global`](Self::global) /
/// [`init_global`](Self::init_global)) is initialized once and never torn
/// down — it lives for the rest of the process, relying on process exit
/// for cleanup. Requests are immutable once built, so no locking exists
/// beyond the queue itself.
#[derive(Debug, Clone)]
pub struct DispatchPool {
    queue: mpsc::UnboundedSender<DispatchRequest>,
}

static GLOBAL: OnceLock<DispatchPool> = OnceLock::new();

impl DispatchPool {
    /// Creates a pool and spawns its workers on the current runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime; the workers have
    /// nowhere to run.
    #[must_use]
    pub fn new<C>(client: C, config: PoolConfig) -> Self
    where
        C: HttpClient + 'static,
    {
        let (queue, rx) = mpsc::unbounded_channel();
        let client = Arc::new(client);
        let rx = Arc::new(Mutex::new(rx));
        for worker in 0..config.workers {
            tokio::spawn(worker_loop(Arc::clone(&client), Arc::clone(&rx), worker));
        }
        Self { queue }
    }

    /// Returns the process-wide pool, initializing it with the defaults
    /// ([`ReqwestClient`], one worker) on first use.
    ///
    /// # Panics
    ///
    /// Panics when the first call happens outside a tokio runtime.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(|| Self::new(ReqwestClient::new(), PoolConfig::default()))
    }

    /// Initializes the process-wide pool with an explicit configuration.
    ///
    /// First call wins: later calls — and [`global`](Self::global) — return
    /// the already-initialized pool unchanged. Call this once at process
    /// start, before anything dispatches.
    ///
    /// # Panics
    ///
    /// Panics when the initializing call happens outside a tokio runtime.
    pub fn init_global(config: PoolConfig) -> &'static Self {
        GLOBAL.get_or_init(|| Self::new(ReqwestClient::new(), config))
    }
}

impl Dispatcher for DispatchPool {
    fn submit(&self, request: DispatchRequest) -> Result<(), DispatchError> {
        self.queue
            .send(request)
            .map_err(|_| DispatchError::QueueClosed)
    }
}

/// Drains the shared queue until it closes.
///
/// The receiver lock is held only while waiting for the next request,
/// never while dispatching one, so idle workers queue up behind the busy
/// ones.
async fn worker_loop<C: HttpClient>(
    client: Arc<C>,
    queue: Arc<Mutex<mpsc::UnboundedReceiver<DispatchRequest>>>,
    worker: usize,
) {
    loop {
        let request = queue.lock().await.recv().await;
        let Some(request) = request else {
            break;
        };
        let method = request.method;
        let url = request.url.clone();
        match dispatch_one(client.as_ref(), request).await {
            DispatchOutcome::Delivered { status, .. } => {
                tracing::debug!(%method, %url, %status, worker, "Webhook delivered");
            }
            DispatchOutcome::Failed(error) => {
                tracing::error!(%method, %url, %error, worker, "Webhook delivery failed");
            }
        }
    }
    tracing::debug!(worker, "Dispatch worker stopped");
}

/// Performs one delivery attempt end to end.
pub(crate) async fn dispatch_one<C: HttpClient>(
    client: &C,
    request: DispatchRequest,
) -> DispatchOutcome {
    let verbose = request.verbose;
    let wire = match build_wire_request(&request) {
        Ok(wire) => wire,
        Err(error) => return DispatchOutcome::Failed(error.into()),
    };
    if verbose {
        tracing::info!(command = %curl_command(&wire), "Dispatching webhook");
    }
    match client.perform(wire).await {
        Ok(response) => classify(verbose, &response),
        Err(error) => DispatchOutcome::Failed(error.into()),
    }
}

fn classify(verbose: bool, response: &WireResponse) -> DispatchOutcome {
    let body = response.body_text().map(ToOwned::to_owned);
    if verbose {
        if let Some(text) = &body {
            tracing::info!(response = %text, "Webhook response");
        }
    }
    if response.is_success() {
        DispatchOutcome::Delivered {
            status: response.status,
            body,
        }
    } else {
        DispatchOutcome::Failed(DispatchError::NonSuccessStatus {
            status: response.status,
            body,
        })
    }
}
