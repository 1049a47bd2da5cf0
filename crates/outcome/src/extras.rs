//! Auxiliary payload attached to an outcome.

use serde_json::{Map, Value};

use crate::error::{OutcomeError, json_kind};

/// String-keyed payload data, kept in first-insertion order.
///
/// Typical entries are identifiers of resources an operation created.
///
/// # Examples
/// ```
/// use outcome::Extras;
/// use serde_json::json;
///
/// let mut extras = Extras::new();
/// extras.insert("id", 42);
/// extras.insert("slug", "first-walk");
///
/// assert_eq!(extras.get("id"), Some(&json!(42)));
/// assert_eq!(extras.get("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extras(Map<String, Value>);

impl Extras {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no entries are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up an entry.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` when `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Insert or overwrite an entry, returning the previous value.
    ///
    /// Overwriting keeps the key's original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Iterate over entries in insertion order.
    #[must_use]
    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.0.iter()
    }

    /// Borrow the underlying JSON map.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume the mapping, returning the underlying JSON map.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Extras {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Extras {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Extras
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut extras = Self::new();
        for (key, value) in iter {
            extras.insert(key, value);
        }
        extras
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Extras
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl From<Map<String, Value>> for Extras {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Extras> for Value {
    fn from(extras: Extras) -> Self {
        Self::Object(extras.0)
    }
}

impl TryFrom<Value> for Extras {
    type Error = OutcomeError;

    /// Accept a JSON object; every other shape is rejected.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(OutcomeError::InvalidArgument {
                target: "extras",
                expected: "an object",
                found: json_kind(&other),
            }),
        }
    }
}
