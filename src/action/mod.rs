//! Webhook action: configuration surface and trigger-side execution.
//!
//! This module provides:
//! - The rule configuration resolved for one action ([`ActionDescriptor`])
//! - Configuration-time validation errors ([`DescriptorError`])
//! - The trigger path: template parsing, interpolation, and transactional
//!   enlistment ([`execute`], [`resolve_request`])
//!
//! The descriptor is created and persisted by an external
//! rule-configuration surface and is read-only during execution; one
//! descriptor serves every invocation of its rule.

mod descriptor;
mod error;
mod executor;

#[cfg(test)]
mod descriptor_tests;

pub use descriptor::ActionDescriptor;
pub use error::DescriptorError;
pub use executor::{execute, resolve_request};
