//! Module: coerce::collection
//! Responsibility: fail-fast homogeneous collection coercion.
//! Any single unconvertible or null element makes the whole result
//! absent; the lenient counterparts live in `coerce::lenient`.

use crate::value::{Assoc, Value};

/// Coerce to a collection: the input's entries if it is one, else absent.
#[must_use]
pub fn collection(value: &Value) -> Option<Assoc> {
    value.as_collection().cloned()
}

/// Coerce every element through `ensure`, preserving keys and order.
///
/// Absent unless the input is a collection and every element is non-null
/// and coercible. An empty collection is present and empty, not absent.
#[must_use]
pub fn collection_of<T, F>(ensure: F, value: &Value) -> Option<Assoc<T>>
where
    F: Fn(&Value) -> Option<T>,
{
    coerce_entries(&ensure, value.as_collection()?)
}

/// As `collection_of`, additionally absent when the result is empty.
#[must_use]
pub fn collection_of_non_empty<T, F>(ensure: F, value: &Value) -> Option<Assoc<T>>
where
    F: Fn(&Value) -> Option<T>,
{
    collection_of(ensure, value).filter(|entries| !entries.is_empty())
}

/// As `collection_of`, additionally requiring every key to be text.
#[must_use]
pub fn map_of<T, F>(ensure: F, value: &Value) -> Option<Assoc<T>>
where
    F: Fn(&Value) -> Option<T>,
{
    collection_of(ensure, value).filter(Assoc::is_string_keyed)
}

/// As `map_of`, additionally absent when the result is empty.
#[must_use]
pub fn map_of_non_empty<T, F>(ensure: F, value: &Value) -> Option<Assoc<T>>
where
    F: Fn(&Value) -> Option<T>,
{
    map_of(ensure, value).filter(|entries| !entries.is_empty())
}

/// As `collection_of`, re-indexed to a dense sequence discarding keys.
#[must_use]
pub fn list_of<T, F>(ensure: F, value: &Value) -> Option<Vec<T>>
where
    F: Fn(&Value) -> Option<T>,
{
    collection_of(ensure, value).map(Assoc::into_values)
}

/// As `list_of`, additionally absent when the result is empty.
#[must_use]
pub fn list_of_non_empty<T, F>(ensure: F, value: &Value) -> Option<Vec<T>>
where
    F: Fn(&Value) -> Option<T>,
{
    list_of(ensure, value).filter(|values| !values.is_empty())
}

// Shared fail-fast traversal; also the second pass of `lenient::filter_map`.
pub(in crate::coerce) fn coerce_entries<T, F>(ensure: &F, entries: &Assoc) -> Option<Assoc<T>>
where
    F: Fn(&Value) -> Option<T>,
{
    let mut output = Vec::with_capacity(entries.len());
    for (key, element) in entries.iter() {
        if element.is_null() {
            return None;
        }

        output.push((key.clone(), ensure(element)?));
    }

    Some(Assoc::from_entries(output))
}
