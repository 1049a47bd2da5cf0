//! Ordered container for structured error details.
//!
//! Entries are keyed either by a field name or by a position. Positional keys
//! are assigned automatically when a bare value is pushed, continuing one past
//! the largest index seen so far. Once `u64::MAX` is taken no further
//! positional key can be assigned and pushes are refused.

use std::fmt;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::{OutcomeError, json_kind};

/// Key of a single error entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorKey {
    /// Automatically assigned or explicit positional key.
    Index(u64),
    /// Named key, typically the field the error refers to.
    Field(String),
}

impl fmt::Display for ErrorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Field(name) => f.write_str(name),
        }
    }
}

impl From<u64> for ErrorKey {
    fn from(value: u64) -> Self {
        Self::Index(value)
    }
}

impl From<&str> for ErrorKey {
    fn from(value: &str) -> Self {
        Self::Field(value.to_owned())
    }
}

impl From<String> for ErrorKey {
    fn from(value: String) -> Self {
        Self::Field(value)
    }
}

impl ErrorKey {
    /// Key for a JSON object member.
    ///
    /// Canonical non-negative decimal names (`"0"`, `"5"`, but not `"05"` or
    /// `"-1"`) become positional keys; everything else stays a field.
    ///
    /// # Examples
    /// ```
    /// use outcome::ErrorKey;
    ///
    /// assert_eq!(ErrorKey::from_object_key("5".to_owned()), ErrorKey::Index(5));
    /// assert_eq!(ErrorKey::from_object_key("05".to_owned()), ErrorKey::from("05"));
    /// ```
    #[must_use]
    pub fn from_object_key(name: String) -> Self {
        canonical_index(&name).map_or(Self::Field(name), Self::Index)
    }
}

fn canonical_index(name: &str) -> Option<u64> {
    let digits_only = !name.is_empty() && name.bytes().all(|byte| byte.is_ascii_digit());
    let leading_zero = name.len() > 1 && name.starts_with('0');
    if digits_only && !leading_zero {
        name.parse().ok()
    } else {
        None
    }
}

/// Insertion-ordered error details.
///
/// ## Invariants
/// - Keys are unique.
/// - Entries keep the position of their first insertion.
/// - `next_index` is `None` once `Index(u64::MAX)` has been used.
///
/// # Examples
/// ```
/// use outcome::Errors;
/// use serde_json::json;
///
/// let mut errors = Errors::new();
/// errors.push("foobar");
/// errors.insert("field", json!(["Required Field"]));
///
/// assert_eq!(errors.at(0), Some(&json!("foobar")));
/// assert_eq!(errors.field("field"), Some(&json!(["Required Field"])));
/// assert_eq!(errors.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Errors {
    entries: Vec<(ErrorKey, Value)>,
    next_index: Option<u64>,
}

impl Default for Errors {
    fn default() -> Self {
        Self::new()
    }
}

impl Errors {
    /// Create an empty container.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_index: Some(0),
        }
    }

    /// Number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no entries are present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by key.
    #[must_use]
    pub fn get(&self, key: &ErrorKey) -> Option<&Value> {
        self.position(key)
            .and_then(|position| self.entries.get(position))
            .map(|(_, value)| value)
    }

    /// Look up a named entry.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(key, _)| matches!(key, ErrorKey::Field(field) if field == name))
            .map(|(_, value)| value)
    }

    /// Look up a positional entry.
    #[must_use]
    pub fn at(&self, index: u64) -> Option<&Value> {
        self.get(&ErrorKey::Index(index))
    }

    /// Returns `true` when `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &ErrorKey) -> bool {
        self.position(key).is_some()
    }

    /// Append `value` under the next positional key and return that key.
    ///
    /// Returns `None`, leaving the container unchanged, when every positional
    /// key up to `u64::MAX` has already been handed out.
    pub fn push(&mut self, value: impl Into<Value>) -> Option<u64> {
        let Some(index) = self.next_index else {
            debug!("positional error keys exhausted; value not appended");
            return None;
        };
        self.entries.push((ErrorKey::Index(index), value.into()));
        self.next_index = index.checked_add(1);
        Some(index)
    }

    /// Insert or overwrite an entry, returning the previous value.
    ///
    /// Overwriting keeps the entry's original position.
    pub fn insert(&mut self, key: impl Into<ErrorKey>, value: impl Into<Value>) -> Option<Value> {
        let error_key = key.into();
        let error_value = value.into();
        if let Some(slot) = self
            .position(&error_key)
            .and_then(|position| self.entries.get_mut(position))
        {
            return Some(std::mem::replace(&mut slot.1, error_value));
        }
        self.track_index(&error_key);
        self.entries.push((error_key, error_value));
        None
    }

    /// Append the entries of `other` whose keys are not already present.
    ///
    /// Existing entries always win. Returns the number of entries skipped.
    pub fn merge(&mut self, other: Self) -> usize {
        let mut skipped = 0_usize;
        for (key, value) in other.entries {
            if self.contains_key(&key) {
                skipped += 1;
                continue;
            }
            self.track_index(&key);
            self.entries.push((key, value));
        }
        if skipped > 0 {
            trace!(skipped, "kept existing error entries while merging");
        }
        skipped
    }

    /// Iterate over entries in insertion order.
    #[must_use]
    pub fn iter(&self) -> ErrorsIter<'_> {
        ErrorsIter(self.entries.iter())
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &ErrorKey> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Iterate over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, value)| value)
    }

    fn position(&self, key: &ErrorKey) -> Option<usize> {
        self.entries.iter().position(|(existing, _)| existing == key)
    }

    fn track_index(&mut self, key: &ErrorKey) {
        if let ErrorKey::Index(index) = key {
            self.next_index = self
                .next_index
                .zip(index.checked_add(1))
                .map(|(current, candidate)| current.max(candidate));
        }
    }
}

impl PartialEq for Errors {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

/// Borrowing iterator over [`Errors`] entries.
#[derive(Debug, Clone)]
pub struct ErrorsIter<'a>(std::slice::Iter<'a, (ErrorKey, Value)>);

impl<'a> Iterator for ErrorsIter<'a> {
    type Item = (&'a ErrorKey, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(key, value)| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for ErrorsIter<'_> {}

impl<'a> IntoIterator for &'a Errors {
    type Item = (&'a ErrorKey, &'a Value);
    type IntoIter = ErrorsIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Errors {
    type Item = (ErrorKey, Value);
    type IntoIter = std::vec::IntoIter<(ErrorKey, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Errors
where
    K: Into<ErrorKey>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut errors = Self::new();
        for (key, value) in iter {
            errors.insert(key, value);
        }
        errors
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Errors
where
    K: Into<ErrorKey>,
    V: Into<Value>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl From<Vec<Value>> for Errors {
    fn from(values: Vec<Value>) -> Self {
        (0_u64..).zip(values).collect()
    }
}

/// Object members keyed with [`ErrorKey::from_object_key`].
impl From<Map<String, Value>> for Errors {
    fn from(fields: Map<String, Value>) -> Self {
        fields
            .into_iter()
            .map(|(name, value)| (ErrorKey::from_object_key(name), value))
            .collect()
    }
}

impl TryFrom<Value> for Errors {
    type Error = OutcomeError;

    /// Accept a JSON array (positional keys) or object (member keys).
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(values) => Ok(Self::from(values)),
            Value::Object(fields) => Ok(Self::from(fields)),
            other => Err(OutcomeError::InvalidArgument {
                target: "errors",
                expected: "an object or array",
                found: json_kind(&other),
            }),
        }
    }
}
