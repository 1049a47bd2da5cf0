//! Machine-readable outcome codes.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Short machine-readable label describing how an operation ended.
///
/// The named variants cover the codes callers reach for most often. Any
/// other string is carried verbatim in [`Code::Custom`], so the set is open.
///
/// # Example
///
/// ```
/// use outcome::Code;
///
/// assert_eq!(Code::from("not_found"), Code::NotFound);
/// assert_eq!(Code::NotFound.as_str(), "not_found");
/// assert_eq!(Code::from("rate_limited"), Code::Custom("rate_limited".to_owned()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Code {
    /// A resource was created.
    Created,
    /// A resource was updated.
    Updated,
    /// A resource was saved.
    Saved,
    /// A resource was deleted.
    Deleted,
    /// Input failed validation.
    Validation,
    /// The caller is authorised.
    Auth,
    /// The caller is not authorised.
    NotAuth,
    /// The requested resource was found.
    Found,
    /// The requested resource does not exist.
    NotFound,
    /// An unexpected error occurred.
    Error,
    /// The operation failed.
    Failed,
    /// The operation was accepted and is still running.
    Processing,
    /// Any caller-defined code.
    Custom(String),
}

impl Code {
    /// All named variants, in declaration order.
    pub const WELL_KNOWN: [Self; 12] = [
        Self::Created,
        Self::Updated,
        Self::Saved,
        Self::Deleted,
        Self::Validation,
        Self::Auth,
        Self::NotAuth,
        Self::Found,
        Self::NotFound,
        Self::Error,
        Self::Failed,
        Self::Processing,
    ];

    /// Returns the string form of the code.
    ///
    /// # Example
    ///
    /// ```
    /// use outcome::Code;
    ///
    /// assert_eq!(Code::Auth.as_str(), "authorised");
    /// assert_eq!(Code::NotAuth.as_str(), "not_authorised");
    /// ```
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Saved => "saved",
            Self::Deleted => "deleted",
            Self::Validation => "validation",
            Self::Auth => "authorised",
            Self::NotAuth => "not_authorised",
            Self::Found => "found",
            Self::NotFound => "not_found",
            Self::Error => "error",
            Self::Failed => "failed",
            Self::Processing => "processing",
            Self::Custom(code) => code.as_str(),
        }
    }

    /// Returns `true` for every variant except [`Code::Custom`].
    #[must_use]
    pub const fn is_well_known(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    /// Returns `true` when the string form is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    fn well_known(code: &str) -> Option<Self> {
        Self::WELL_KNOWN
            .iter()
            .find(|candidate| candidate.as_str() == code)
            .cloned()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for Code {
    fn from(value: &str) -> Self {
        Self::well_known(value).unwrap_or_else(|| Self::Custom(value.to_owned()))
    }
}

impl From<String> for Code {
    fn from(value: String) -> Self {
        Self::well_known(&value).unwrap_or_else(|| Self::Custom(value))
    }
}

impl From<&Code> for Code {
    fn from(value: &Code) -> Self {
        value.clone()
    }
}

impl FromStr for Code {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl PartialEq<str> for Code {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Code {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
