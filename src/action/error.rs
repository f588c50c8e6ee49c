//! Error types for action configuration.

use thiserror::Error;

use crate::template::TemplateError;

/// Validation failure for an [`ActionDescriptor`](super::ActionDescriptor).
///
/// Raised at configuration time when the rule is edited; surfaced to the
/// configuring user and blocks saving. Never raised on the trigger path.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// The payload template is not valid JSON.
    #[error("Invalid payload template: {0}")]
    PayloadTemplate(#[source] TemplateError),

    /// The headers template is not valid JSON.
    #[error("Invalid headers template: {0}")]
    HeadersTemplate(#[source] TemplateError),

    /// The headers template parsed, but not to an object of header values.
    #[error("Headers template must be a JSON object, got {found}")]
    HeadersNotAnObject {
        /// What the template actually was
        found: &'static str,
    },

    /// A zero timeout would fail every dispatch.
    #[error("Timeout must be at least 1 second")]
    ZeroTimeout,
}
