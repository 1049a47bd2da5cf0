//! The outcome value object.
//!
//! An [`Outcome`] records whether an operation succeeded together with an
//! optional [`Code`], a message, structured [`Errors`], and [`Extras`]. The
//! success flag is fixed when the outcome is constructed; everything else can
//! be refined through fluent setters before the outcome is handed back to the
//! caller.

use std::fmt;

use serde_json::Value;
use tracing::debug;

use crate::code::Code;
use crate::error::OutcomeError;
use crate::errors::{ErrorKey, Errors};
use crate::extras::Extras;

/// Outcome of an operation performed by calling code.
///
/// ## Invariants
/// - The success flag never changes after construction.
/// - `errors` and `extras` are always present, possibly empty.
///
/// # Examples
/// ```
/// use outcome::{Code, Outcome};
/// use serde_json::json;
///
/// let mut outcome = Outcome::success();
/// outcome
///     .set_code(Code::Created)
///     .set_message("walk saved")
///     .set_extra("id", 42);
///
/// assert!(outcome.is_success());
/// assert_eq!(outcome.code_str(), "created");
/// assert_eq!(outcome.extra("id"), Some(&json!(42)));
/// assert_eq!(outcome.extra("missing"), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    success: bool,
    code: Option<Code>,
    message: String,
    errors: Errors,
    extras: Extras,
}

impl Outcome {
    /// Flag value carried by successful outcomes.
    pub const SUCCESS: bool = true;
    /// Flag value carried by failed outcomes.
    pub const FAIL: bool = false;

    /// Create an outcome with the given success flag and no other data.
    #[must_use]
    pub fn new(success: bool) -> Self {
        Self {
            success,
            code: None,
            message: String::new(),
            errors: Errors::new(),
            extras: Extras::new(),
        }
    }

    /// Create an empty successful outcome.
    #[must_use]
    pub fn success() -> Self {
        Self::new(Self::SUCCESS)
    }

    /// Create an empty failed outcome.
    #[must_use]
    pub fn fail() -> Self {
        Self::new(Self::FAIL)
    }

    /// Create a successful outcome populated from the given parts.
    ///
    /// Empty parts are skipped and leave the corresponding default in place.
    ///
    /// # Examples
    /// ```
    /// use outcome::{Errors, Extras, Outcome};
    ///
    /// let outcome = Outcome::success_with("updated", "", Errors::new(), Extras::from([("id", 3)]));
    /// assert_eq!(outcome.code_str(), "updated");
    /// assert_eq!(outcome.message(), "");
    /// assert_eq!(outcome.extras().len(), 1);
    /// ```
    #[must_use]
    pub fn success_with(
        code: impl Into<Code>,
        message: impl Into<String>,
        errors: impl Into<Errors>,
        extras: impl Into<Extras>,
    ) -> Self {
        Self::populated(Self::SUCCESS, code.into(), message.into(), errors.into(), extras.into())
    }

    /// Create a failed outcome populated from the given parts.
    ///
    /// Empty parts are skipped and leave the corresponding default in place.
    #[must_use]
    pub fn fail_with(
        code: impl Into<Code>,
        message: impl Into<String>,
        errors: impl Into<Errors>,
        extras: impl Into<Extras>,
    ) -> Self {
        Self::populated(Self::FAIL, code.into(), message.into(), errors.into(), extras.into())
    }

    fn populated(success: bool, code: Code, message: String, errors: Errors, extras: Extras) -> Self {
        let mut outcome = Self::new(success);
        if !code.is_empty() {
            outcome.set_code(code);
        }
        if !message.is_empty() {
            outcome.set_message(message);
        }
        if !errors.is_empty() {
            outcome.set_errors(errors);
        }
        if !extras.is_empty() {
            outcome.set_extras(extras);
        }
        outcome
    }

    /// Returns `true` when the flag equals [`Outcome::SUCCESS`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success == Self::SUCCESS
    }

    /// Returns `true` when the flag equals [`Outcome::FAIL`].
    #[must_use]
    pub const fn is_fail(&self) -> bool {
        self.success == Self::FAIL
    }

    /// Current code, if one has been set.
    #[must_use]
    pub const fn code(&self) -> Option<&Code> {
        self.code.as_ref()
    }

    /// Current code as a string; empty when unset.
    #[must_use]
    pub fn code_str(&self) -> &str {
        self.code.as_ref().map_or("", Code::as_str)
    }

    /// Human-readable message; empty when unset.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// All error details in insertion order.
    #[must_use]
    pub const fn errors(&self) -> &Errors {
        &self.errors
    }

    /// Returns `true` when at least one error detail is present.
    #[must_use]
    pub const fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Look up a single error detail.
    #[must_use]
    pub fn error(&self, key: &ErrorKey) -> Option<&Value> {
        self.errors.get(key)
    }

    /// All extra payload data.
    #[must_use]
    pub const fn extras(&self) -> &Extras {
        &self.extras
    }

    /// Look up one extra entry; `None` when the key is absent.
    #[must_use]
    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.extras.get(key)
    }

    /// Replace the code.
    pub fn set_code(&mut self, code: impl Into<Code>) -> &mut Self {
        self.code = Some(code.into());
        self
    }

    /// Replace the message.
    pub fn set_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.message = message.into();
        self
    }

    /// Replace every error detail.
    pub fn set_errors(&mut self, errors: impl Into<Errors>) -> &mut Self {
        self.errors = errors.into();
        self
    }

    /// Replace every error detail from untyped JSON.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::InvalidArgument`] unless `errors` is a JSON
    /// object or array. The current errors are left untouched on failure.
    pub fn try_set_errors(&mut self, errors: Value) -> Result<&mut Self, OutcomeError> {
        let parsed = Errors::try_from(errors).inspect_err(log_rejection)?;
        Ok(self.set_errors(parsed))
    }

    /// Add one error detail.
    ///
    /// JSON objects and arrays are merged entry by entry, keeping any key
    /// already present; object members named with canonical decimal integers
    /// count as positional keys. Any other value is appended under the next
    /// positional key, or dropped once positional keys are exhausted.
    ///
    /// # Examples
    /// ```
    /// use outcome::Outcome;
    /// use serde_json::json;
    ///
    /// let mut outcome = Outcome::fail();
    /// outcome
    ///     .add_error("foobar")
    ///     .add_error(json!({"field": ["Required Field"]}));
    ///
    /// assert_eq!(outcome.errors().at(0), Some(&json!("foobar")));
    /// assert_eq!(outcome.errors().field("field"), Some(&json!(["Required Field"])));
    /// ```
    pub fn add_error(&mut self, error: impl Into<Value>) -> &mut Self {
        match error.into() {
            Value::Array(values) => {
                self.errors.merge(Errors::from(values));
            }
            Value::Object(fields) => {
                self.errors.merge(Errors::from(fields));
            }
            scalar => {
                self.errors.push(scalar);
            }
        }
        self
    }

    /// Replace all extra payload data.
    pub fn set_extras(&mut self, extras: impl Into<Extras>) -> &mut Self {
        self.extras = extras.into();
        self
    }

    /// Replace all extra payload data from untyped JSON.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::InvalidArgument`] unless `extras` is a JSON
    /// object. The current extras are left untouched on failure.
    pub fn try_set_extras(&mut self, extras: Value) -> Result<&mut Self, OutcomeError> {
        let parsed = Extras::try_from(extras).inspect_err(log_rejection)?;
        Ok(self.set_extras(parsed))
    }

    /// Set or overwrite a single extra entry.
    pub fn set_extra(&mut self, key: impl Into<String>, data: impl Into<Value>) -> &mut Self {
        self.extras.insert(key, data);
        self
    }

    /// Builder form of [`Outcome::set_code`].
    #[must_use]
    pub fn with_code(mut self, code: impl Into<Code>) -> Self {
        self.set_code(code);
        self
    }

    /// Builder form of [`Outcome::set_message`].
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.set_message(message);
        self
    }

    /// Builder form of [`Outcome::set_errors`].
    #[must_use]
    pub fn with_errors(mut self, errors: impl Into<Errors>) -> Self {
        self.set_errors(errors);
        self
    }

    /// Builder form of [`Outcome::add_error`].
    #[must_use]
    pub fn with_error(mut self, error: impl Into<Value>) -> Self {
        self.add_error(error);
        self
    }

    /// Builder form of [`Outcome::set_extras`].
    #[must_use]
    pub fn with_extras(mut self, extras: impl Into<Extras>) -> Self {
        self.set_extras(extras);
        self
    }

    /// Builder form of [`Outcome::set_extra`].
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, data: impl Into<Value>) -> Self {
        self.set_extra(key, data);
        self
    }
}

fn log_rejection(error: &OutcomeError) {
    let OutcomeError::InvalidArgument { target, found, .. } = error;
    debug!(container = *target, found = *found, "rejected non-container value");
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_success() { "success" } else { "fail" })?;
        if let Some(code) = self.code.as_ref().filter(|code| !code.is_empty()) {
            write!(f, " [{code}]")?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
