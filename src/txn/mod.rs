//! Transactional side-effect hook.
//!
//! This module provides:
//! - The participant abstraction for a host two-phase commit protocol
//!   ([`Participant`], [`Phase`])
//! - The consumed coordinator interface ([`HostTransaction`])
//! - A deferred side effect enlisted into a transaction ([`SideEffect`])
//! - The pre-commit veto error ([`VoteError`])
//!
//! A [`SideEffect`] guarantees its bound action runs if and only if the
//! enclosing unit of work reaches a successful commit, and runs at most
//! once. Any host transaction system that can join a participant and
//! drive `vote` / `finish` / `abort` in its commit ordering can drive it.
//!
//! Save points are not supported: rolling back to a save point does not
//! unregister an already-joined participant, which still resolves with
//! the enclosing transaction's terminal phase.

mod error;
mod participant;


pub use error::VoteError;
pub use participant::{
    AbortHook, CommitAction, CommitError, HostTransaction, Participant, Phase, SideEffect,
    VoteCheck,
};
