//! Two-phase-commit participant deferring a side effect to commit time.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicU64, Ordering};

use super::VoteError;

/// Error returned by a commit-phase action.
pub type CommitError = Box<dyn std::error::Error + Send + Sync>;

/// Boxed action invoked once at commit time.
pub type CommitAction = Box<dyn FnOnce() -> Result<(), CommitError> + Send>;

/// Boxed pre-commit check; an `Err` aborts the whole transaction.
pub type VoteCheck = Box<dyn FnOnce() -> Result<(), VoteError> + Send>;

/// Boxed best-effort cleanup invoked when the transaction aborts.
pub type AbortHook = Box<dyn FnOnce() + Send>;

/// Lifecycle phase of a transaction participant.
///
/// Exactly one terminal phase is ever reached: `Committed` or `Aborted`.
/// A participant whose transaction never terminates (process crash) stays
/// in a non-terminal phase; that is an accepted non-goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Joined, not yet voted.
    Initial,
    /// Vote phase passed, awaiting the terminal phase.
    Voted,
    /// The bound action was invoked (terminal).
    Committed,
    /// The transaction aborted before commit (terminal).
    Aborted,
}

impl Phase {
    /// Returns true for `Committed` and `Aborted`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Committed | Self::Aborted)
    }
}

/// A participant in a host transaction's two-phase commit protocol.
///
/// The capability surface is deliberately minimal — `vote`, `finish`,
/// `abort`, plus a sort key — so that any coordinator exposing a
/// join-a-participant operation can drive it, regardless of its own
/// object model.
///
/// # Contract
///
/// - `vote` runs before any participant commits; an `Err` aborts the
///   whole transaction.
/// - `finish` runs after every participant voted. Implementations must
///   not fail: other participants have already committed by the time a
///   failure could surface here.
/// - `abort` replaces `finish` when the transaction aborts.
/// - The coordinator drives participants in ascending `sort_key` order
///   within each phase.
pub trait Participant: Send {
    /// Stable key ordering this participant among its co-participants.
    fn sort_key(&self) -> &str;

    /// Pre-commit check; an `Err` vetoes the transaction.
    ///
    /// # Errors
    ///
    /// Returns [`VoteError`] to abort the transaction before any
    /// participant has committed.
    fn vote(&mut self) -> Result<(), VoteError>;

    /// Commit phase: invokes the bound action. Infallible by contract.
    fn finish(&mut self);

    /// Abort phase: best-effort cleanup. Infallible by contract.
    fn abort(&mut self);
}

/// A host unit of work that participants can be enlisted into.
///
/// This is the consumed half of the protocol: the crate never drives the
/// two-phase machinery itself, it only hands participants to whatever
/// coordinator owns the ambient transaction.
pub trait HostTransaction {
    /// Enlists a participant for the remainder of this transaction.
    ///
    /// Callable any number of times; every call adds an independent
    /// participant, never merged or deduplicated.
    fn join(&mut self, participant: Box<dyn Participant>);
}

/// Per-process discriminator for sort keys; also preserves registration
/// order among side effects in the same transaction.
static NEXT_DISCRIMINATOR: AtomicU64 = AtomicU64::new(0);

fn next_sort_key() -> String {
    let seq = NEXT_DISCRIMINATOR.fetch_add(1, Ordering::Relaxed);
    // '~' sorts after the keys of default-priority participants, so data
    // persistence commits before the side effect fires.
    format!("~{seq:020}")
}

/// A deferred side effect enlisted into a host transaction.
///
/// Captures a fully-resolved action at registration time and invokes it
/// exactly once if — and only if — the transaction commits. Built via
/// [`new`](Self::new) plus the optional
/// [`with_vote_check`](Self::with_vote_check) and
/// [`with_abort_hook`](Self::with_abort_hook).
///
/// # Failure containment
///
/// An `Err` or a panic from the bound action is caught and logged with
/// the participant's description, never propagated: a failure escaping
/// the commit phase would poison the coordinator after co-participants
/// have already committed. Abort-hook failures are swallowed.
///
/// # Example
///
/// ```
/// use commithook::txn::{Participant, SideEffect};
///
/// let mut effect = SideEffect::new("POST https://example.com/hook", || {
///     // hand the captured request to the dispatch pool
///     Ok(())
/// });
/// assert!(effect.vote().is_ok());
/// effect.finish();
/// ```
pub struct SideEffect {
    description: String,
    sort_key: String,
    phase: Phase,
    action: Option<CommitAction>,
    vote_check: Option<VoteCheck>,
    abort_hook: Option<AbortHook>,
}

impl SideEffect {
    /// Creates a side effect bound to a commit action.
    ///
    /// `description` identifies the action in failure logs — typically
    /// the descriptor summary, e.g. `POST https://example.com/hook`.
    pub fn new(
        description: impl Into<String>,
        action: impl FnOnce() -> Result<(), CommitError> + Send + 'static,
    ) -> Self {
        Self {
            description: description.into(),
            sort_key: next_sort_key(),
            phase: Phase::Initial,
            action: Some(Box::new(action)),
            vote_check: None,
            abort_hook: None,
        }
    }

    /// Adds a pre-commit check; its `Err` aborts the whole transaction.
    #[must_use]
    pub fn with_vote_check(
        mut self,
        check: impl FnOnce() -> Result<(), VoteError> + Send + 'static,
    ) -> Self {
        self.vote_check = Some(Box::new(check));
        self
    }

    /// Adds a best-effort cleanup hook run if the transaction aborts.
    #[must_use]
    pub fn with_abort_hook(mut self, hook: impl FnOnce() + Send + 'static) -> Self {
        self.abort_hook = Some(Box::new(hook));
        self
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// The description used as log context.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl std::fmt::Debug for SideEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SideEffect")
            .field("description", &self.description)
            .field("sort_key", &self.sort_key)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl Participant for SideEffect {
    fn sort_key(&self) -> &str {
        &self.sort_key
    }

    fn vote(&mut self) -> Result<(), VoteError> {
        if self.phase == Phase::Initial {
            self.phase = Phase::Voted;
        }
        match self.vote_check.take() {
            Some(check) => check(),
            None => Ok(()),
        }
    }

    fn finish(&mut self) {
        if self.phase.is_terminal() {
            return;
        }
        self.phase = Phase::Committed;
        let Some(action) = self.action.take() else {
            return;
        };
        match catch_unwind(AssertUnwindSafe(action)) {
            Ok(Ok(())) => {}
            Ok(Err(error)) => {
                tracing::error!(
                    participant = %self.description,
                    %error,
                    "Commit-phase action failed"
                );
            }
            Err(panic) => {
                tracing::error!(
                    participant = %self.description,
                    panic = panic_message(panic.as_ref()),
                    "Commit-phase action panicked"
                );
            }
        }
    }

    fn abort(&mut self) {
        if self.phase.is_terminal() {
            return;
        }
        self.phase = Phase::Aborted;
        let Some(hook) = self.abort_hook.take() else {
            return;
        };
        if catch_unwind(AssertUnwindSafe(hook)).is_err() {
            tracing::debug!(participant = %self.description, "Abort hook panicked");
        }
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> &str {
    panic
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| panic.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<non-string panic payload>")
}
