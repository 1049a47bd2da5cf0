//! Error types for the outcome crate.
//!
//! The statically typed setters on [`crate::Outcome`] cannot fail. Only the
//! conversions that accept untyped JSON report errors, and they do so with
//! [`OutcomeError`].

use serde_json::Value;
use thiserror::Error;

/// Errors raised when untyped input cannot populate an outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutcomeError {
    /// A container was required but a different JSON value was supplied.
    #[error("{target} must be passed {expected}, found {found}")]
    InvalidArgument {
        /// The setter or conversion that rejected the value.
        target: &'static str,
        /// Description of the accepted shapes.
        expected: &'static str,
        /// The JSON kind that was supplied instead.
        found: &'static str,
    },
}

/// Name the JSON kind of `value` for diagnostics.
pub(crate) const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
