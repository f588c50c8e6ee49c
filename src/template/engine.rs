//! Default token-substitution engine backed by Handlebars.

use handlebars::Handlebars;
use serde::Serialize;
use serde_json::Value;

use super::{Interpolator, TemplateError};

/// [`Interpolator`] implementation rendering Handlebars tokens against a
/// JSON subject.
///
/// The subject is captured once per triggering event; every
/// [`interpolate`](Interpolator::interpolate) call renders against the
/// same snapshot. Render failures fall back to the raw template — the
/// interpolation contract is infallible, and a broken token must not
/// abort the transaction that triggered the rule.
///
/// # Example
///
/// ```
/// use commithook::template::{HandlebarsInterpolator, Interpolator};
/// use serde_json::json;
///
/// let interpolator =
///     HandlebarsInterpolator::from_value(json!({"title": "Front page"}));
/// assert_eq!(interpolator.interpolate("{{title}}"), "Front page");
/// ```
#[derive(Debug, Clone)]
pub struct HandlebarsInterpolator {
    subject: Value,
}

impl HandlebarsInterpolator {
    /// Binds the engine to a serializable subject.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::InvalidSubject`] when the subject cannot
    /// be represented as JSON (e.g. a map with non-string keys).
    pub fn new(subject: &impl Serialize) -> Result<Self, TemplateError> {
        let subject = serde_json::to_value(subject).map_err(|e| TemplateError::InvalidSubject {
            message: e.to_string(),
        })?;
        Ok(Self::from_value(subject))
    }

    /// Binds the engine to an already-built JSON subject.
    #[must_use]
    pub const fn from_value(subject: Value) -> Self {
        Self { subject }
    }

    /// Returns the bound subject.
    #[must_use]
    pub const fn subject(&self) -> &Value {
        &self.subject
    }
}

impl Interpolator for HandlebarsInterpolator {
    fn interpolate(&self, template: &str) -> String {
        let registry = Handlebars::new();
        match registry.render_template(template, &self.subject) {
            Ok(rendered) => rendered,
            Err(error) => {
                tracing::warn!(%error, template, "Template render failed, passing through unsubstituted");
                template.to_owned()
            }
        }
    }
}
