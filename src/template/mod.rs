//! JSON templates: validation, token interpolation, and the default engine.
//!
//! This module provides:
//! - Configuration-time template validation ([`validate`])
//! - Execution-time template parsing ([`parse_or_empty`])
//! - The token-substitution seam ([`Interpolator`])
//! - Recursive structural interpolation ([`interpolate_value`])
//! - A Handlebars-backed default engine ([`HandlebarsInterpolator`])
//!
//! Templates are JSON documents whose string leaves may contain
//! unsubstituted tokens. The JSON syntax around the tokens must be well
//! formed at edit time already; substitution never changes the structure,
//! only the string leaves.

mod engine;
mod error;
mod interpolate;
mod validate;

#[cfg(test)]
mod engine_tests;
#[cfg(test)]
mod interpolate_tests;

pub use engine::HandlebarsInterpolator;
pub use error::TemplateError;
pub use interpolate::{Interpolator, interpolate_value};
pub use validate::{parse_or_empty, validate};

pub(crate) use validate::json_type_name;
