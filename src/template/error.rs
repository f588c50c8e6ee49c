//! Error types for template handling.

use thiserror::Error;

/// Error type for JSON template operations.
///
/// Raised at configuration time when a rule is edited, and defensively on
/// the execution path when a stored template no longer parses.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The template text is not valid JSON.
    ///
    /// Carries the parser's diagnostic so the configuration surface can
    /// show the user what is wrong with the template.
    #[error("Template is not valid JSON: {message}")]
    InvalidJson {
        /// The JSON parser's diagnostic message
        message: String,
    },

    /// The interpolation subject could not be represented as JSON.
    #[error("Interpolation subject is not JSON-representable: {message}")]
    InvalidSubject {
        /// The serializer's diagnostic message
        message: String,
    },
}
