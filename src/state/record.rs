use std::fmt;
use std::ops::Index;

use indexmap::IndexMap;

use super::State;

/// An insertion-ordered record of string keys to values.
///
/// `Record` is the flat key-value shape for stores whose state has no fixed
/// struct. Keys keep the order they were first inserted in, and shallow
/// merge overwrites matching keys while appending new ones.
///
/// ```
/// use ripple::{Record, State};
///
/// let state = Record::from([("x", 1), ("y", 2), ("z", 3)]);
/// let next = state.merge(Record::from([("x", 2)]));
///
/// assert_eq!(next, Record::from([("x", 2), ("y", 2), ("z", 3)]));
/// assert_eq!(state["x"], 1);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Record<V> {
    entries: IndexMap<String, V>,
}

impl<V> Record<V> {
    /// Create an empty record.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Insert a value under `key`, returning the value it displaced.
    ///
    /// An existing key keeps its position; a new key is appended.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        self.entries.insert(key.into(), value)
    }

    /// Look up the value under `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the record has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }
}

impl<V: Clone> State for Record<V> {
    type Partial = Record<V>;

    fn merge(&self, partial: Record<V>) -> Self {
        let mut merged = self.clone();
        for (key, value) in partial.entries {
            merged.entries.insert(key, value);
        }
        merged
    }
}

impl<V> Default for Record<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Record<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        }
    }
}

impl<K: Into<String>, V, const N: usize> From<[(K, V); N]> for Record<V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<V> IntoIterator for Record<V> {
    type Item = (String, V);
    type IntoIter = indexmap::map::IntoIter<String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<V> Index<&str> for Record<V> {
    type Output = V;

    fn index(&self, key: &str) -> &V {
        self.entries
            .get(key)
            .unwrap_or_else(|| panic!("no key {key:?} in record"))
    }
}

impl<V: fmt::Debug> fmt::Debug for Record<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}
