use crate::value::Value;
use derive_more::Deref;
use serde::{Deserialize, Deserializer, Serialize};

///
/// Key
///
/// Collection key: a dense or sparse integer index, or a text key.
/// A collection whose keys are exactly `Int(0..n)` in order is a list;
/// one whose keys are all `Text` is a map.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Key {
    Int(i64),
    Text(String),
}

impl Key {
    /// Returns true if the key is a text key.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    #[must_use]
    pub const fn as_text(&self) -> Option<&str> {
        if let Self::Text(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

///
/// Assoc
///
/// Insertion-ordered `(Key, T)` entries with unique keys.
/// Replacing an existing key keeps its original position; `push` appends
/// under the next free non-negative integer key.
///
/// Mutation is explicit; `Assoc` does not expose `DerefMut` to avoid
/// accidental bypass of key uniqueness.
///

#[repr(transparent)]
#[derive(Clone, Debug, Deref, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Assoc<T = Value>(Vec<(Key, T)>);

impl<T> Assoc<T> {
    /// Create an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a collection from `(key, value)` entries, keeping the last
    /// value for each duplicate key.
    #[must_use]
    pub fn from_entries(entries: Vec<(Key, T)>) -> Self {
        let mut assoc = Self::new();
        for (key, value) in entries {
            assoc.insert(key, value);
        }

        assoc
    }

    /// Build a list-shaped collection from values, keyed `0..n`.
    #[must_use]
    pub fn from_values(values: Vec<T>) -> Self {
        Self(
            (0i64..)
                .zip(values)
                .map(|(i, value)| (Key::Int(i), value))
                .collect(),
        )
    }

    /// Return the number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the collection has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the keys are exactly `Int(0..n)` in order.
    #[must_use]
    pub fn is_list(&self) -> bool {
        self.0
            .iter()
            .enumerate()
            .all(|(i, (key, _))| matches!(key, Key::Int(k) if usize::try_from(*k) == Ok(i)))
    }

    /// Returns true if every key is a text key.
    #[must_use]
    pub fn is_string_keyed(&self) -> bool {
        self.0.iter().all(|(key, _)| key.is_text())
    }

    /// Return a reference to the value for `key` if present.
    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&T> {
        self.find_index(key).map(|idx| &self.0[idx].1)
    }

    /// Insert or replace a value for `key`, returning the old value if
    /// present. Replacement keeps the entry's original position.
    pub fn insert(&mut self, key: Key, value: T) -> Option<T> {
        match self.find_index(&key) {
            Some(index) => Some(std::mem::replace(&mut self.0[index].1, value)),
            None => {
                self.0.push((key, value));
                None
            }
        }
    }

    /// Append a value under the next free non-negative integer key.
    pub fn push(&mut self, value: T) {
        let next = self
            .0
            .iter()
            .filter_map(|(key, _)| match key {
                Key::Int(i) if *i >= 0 => Some(*i + 1),
                _ => None,
            })
            .max()
            .unwrap_or(0);

        self.0.push((Key::Int(next), value));
    }

    /// Return an iterator over `(key, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &T)> {
        self.0.iter().map(|(k, v)| (k, v))
    }

    /// Return an iterator over keys in entry order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.0.iter().map(|(k, _)| k)
    }

    /// Return an iterator over values in entry order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter().map(|(_, v)| v)
    }

    /// Consume the collection, discarding keys.
    #[must_use]
    pub fn into_values(self) -> Vec<T> {
        self.0.into_iter().map(|(_, v)| v).collect()
    }

    // Locate a key by linear scan; entries keep insertion order, not key order.
    fn find_index(&self, key: &Key) -> Option<usize> {
        self.0.iter().position(|(candidate, _)| candidate == key)
    }
}

impl<T> Default for Assoc<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IntoIterator for Assoc<T> {
    type Item = (Key, T);
    type IntoIter = std::vec::IntoIter<(Key, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Assoc<T> {
    type Item = &'a (Key, T);
    type IntoIter = std::slice::Iter<'a, (Key, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> FromIterator<(Key, T)> for Assoc<T> {
    fn from_iter<I: IntoIterator<Item = (Key, T)>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().collect())
    }
}

impl<'de, T> Deserialize<'de> for Assoc<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::<(Key, T)>::deserialize(deserializer)?;

        Ok(Self::from_entries(entries))
    }
}
