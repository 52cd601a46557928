use crate::coerce;
use crate::value::Value;
use derive_more::{Deref, IntoIterator};
use serde::{Deserialize, Serialize};

///
/// TypedList
///
/// Dense, typed list extracted from an untyped collection, either
/// fail-fast (`of`) or leniently (`filtered`).
///
/// Mutation is not exposed; transformation goes through `map`/`filter`/
/// `slice`, which build fresh lists.
///

#[repr(transparent)]
#[derive(Clone, Debug, Default, Deref, Deserialize, Eq, IntoIterator, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TypedList<T>(Vec<T>);

impl<T> TypedList<T> {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a list from an existing vector.
    #[must_use]
    pub const fn from_vec(values: Vec<T>) -> Self {
        Self(values)
    }

    /// Coerce every element of `value` through `ensure`, fail-fast.
    ///
    /// Absent unless `value` is a collection whose every element is
    /// non-null and coercible; survivors are re-indexed densely.
    #[must_use]
    pub fn of<F>(ensure: F, value: &Value) -> Option<Self>
    where
        F: Fn(&Value) -> Option<T>,
    {
        coerce::list_of(ensure, value).map(Self)
    }

    /// Coerce leniently, dropping unconvertible elements.
    #[must_use]
    pub fn filtered<F>(ensure: F, value: &Value) -> Self
    where
        F: Fn(&Value) -> Option<T>,
    {
        Self(coerce::filter(ensure, value).into_values())
    }

    /// Returns `true` if the list has elements.
    #[must_use]
    pub fn is_not_empty(&self) -> bool {
        !self.0.is_empty()
    }

    /// The element at `index`, or `default` when out of bounds.
    #[must_use]
    pub fn get_at(&self, index: usize, default: T) -> T
    where
        T: Clone,
    {
        self.0.get(index).cloned().unwrap_or(default)
    }

    /// Build a new list by transforming every element.
    #[must_use]
    pub fn map<U>(self, transform: impl FnMut(T) -> U) -> TypedList<U> {
        TypedList(self.0.into_iter().map(transform).collect())
    }

    /// Build a new list keeping only elements matching `predicate`.
    #[must_use]
    pub fn filter(self, mut predicate: impl FnMut(&T) -> bool) -> Self {
        Self(self.0.into_iter().filter(|value| predicate(value)).collect())
    }

    /// Build a new list from a subrange, clamped to the list bounds.
    #[must_use]
    pub fn slice(&self, offset: usize, length: Option<usize>) -> Self
    where
        T: Clone,
    {
        let start = offset.min(self.0.len());
        let end = length.map_or(self.0.len(), |len| (start + len).min(self.0.len()));

        Self(self.0[start..end].to_vec())
    }

    /// Consume the list into its backing vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}
