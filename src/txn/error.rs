//! Error types for transaction participation.

use thiserror::Error;

/// A participant's pre-commit veto.
///
/// Unlike commit-phase failures, which are caught and logged, a vote
/// failure propagates to the host transaction coordinator and aborts the
/// whole transaction — no participant has committed yet, so aborting is
/// still safe.
#[derive(Debug, Error)]
#[error("Pre-commit vote rejected: {reason}")]
pub struct VoteError {
    /// Why the participant vetoed the commit
    pub reason: String,
}

impl VoteError {
    /// Creates a vote error with the given reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
