//! Module: coerce::lenient
//! Responsibility: best-effort collection extraction and traversal
//! helpers. Nothing here fails the whole call; unconvertible elements
//! are dropped, and non-collection inputs yield empty results.

use crate::coerce::{self, collection::coerce_entries};
use crate::value::{Assoc, Key, Number, Scalar, Value};

/// Character set trimmed by default: ASCII whitespace plus NUL and
/// vertical tab, the platform-conventional trim set.
pub const DEFAULT_TRIM_CHARSET: &str = " \t\n\r\0\x0B";

/// Keep only the non-null, coercible elements, preserving their keys.
///
/// The lenient counterpart to `collection_of`'s fail-fast policy.
#[must_use]
pub fn filter<T, F>(ensure: F, value: &Value) -> Assoc<T>
where
    F: Fn(&Value) -> Option<T>,
{
    let Some(entries) = value.as_collection() else {
        return Assoc::new();
    };

    entries
        .iter()
        .filter(|(_, element)| !element.is_null())
        .filter_map(|(key, element)| ensure(element).map(|coerced| (key.clone(), coerced)))
        .collect()
}

/// `filter`, then `transform` each survivor, then re-validate the
/// transformed values fail-fast; an invalid second pass yields empty.
#[must_use]
pub fn filter_map<T, F, M>(ensure: F, value: &Value, transform: M) -> Assoc<T>
where
    T: Into<Value>,
    F: Fn(&Value) -> Option<T>,
    M: Fn(T) -> T,
{
    let transformed: Assoc = filter(&ensure, value)
        .into_iter()
        .map(|(key, survivor)| (key, transform(survivor).into()))
        .collect();

    coerce_entries(&ensure, &transformed).unwrap_or_default()
}

///
/// TYPED-LIST SHORTHANDS
///
/// Best-effort extraction of homogeneously-typed elements: unconvertible
/// elements are dropped and the survivors re-indexed densely.
///

#[must_use]
pub fn ints(value: &Value) -> Vec<i64> {
    filter(coerce::int, value).into_values()
}

#[must_use]
pub fn floats(value: &Value) -> Vec<f64> {
    filter(coerce::float, value).into_values()
}

#[must_use]
pub fn bools(value: &Value) -> Vec<bool> {
    filter(coerce::bool, value).into_values()
}

#[must_use]
pub fn strings(value: &Value) -> Vec<String> {
    filter(coerce::string, value).into_values()
}

#[must_use]
pub fn scalars(value: &Value) -> Vec<Scalar> {
    filter(coerce::scalar, value).into_values()
}

#[must_use]
pub fn numbers(value: &Value) -> Vec<Number> {
    filter(coerce::number, value).into_values()
}

///
/// QUANTIFIERS
///

/// Universal quantifier, short-circuiting on the first failure.
pub fn all<T>(values: impl IntoIterator<Item = T>, mut predicate: impl FnMut(&T) -> bool) -> bool {
    values.into_iter().all(|value| predicate(&value))
}

/// Existential quantifier, short-circuiting on the first match.
pub fn any<T>(values: impl IntoIterator<Item = T>, mut predicate: impl FnMut(&T) -> bool) -> bool {
    values.into_iter().any(|value| predicate(&value))
}

///
/// RECURSIVE TRIM
///

/// `trim_recursive_with` using [`DEFAULT_TRIM_CHARSET`].
#[must_use]
pub fn trim_recursive(entries: &Assoc) -> Assoc {
    trim_recursive_with(entries, DEFAULT_TRIM_CHARSET)
}

/// Trim `charset` from every text value and every text key at every
/// nesting depth. Non-text values pass through; nested collections
/// recurse. Keys that collide after trimming keep the last value.
#[must_use]
pub fn trim_recursive_with(entries: &Assoc, charset: &str) -> Assoc {
    entries
        .iter()
        .map(|(key, value)| {
            let key = match key {
                Key::Text(s) => Key::Text(trim_set(s, charset)),
                other => other.clone(),
            };
            let value = match value {
                Value::Text(s) => Value::Text(trim_set(s, charset)),
                Value::Collection(inner) => Value::Collection(trim_recursive_with(inner, charset)),
                other => other.clone(),
            };

            (key, value)
        })
        .collect()
}

fn trim_set(s: &str, charset: &str) -> String {
    s.trim_matches(|c| charset.contains(c)).to_string()
}
