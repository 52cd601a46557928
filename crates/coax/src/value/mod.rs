mod assoc;
mod export;
mod scalar;
mod typed_list;


use serde::{Deserialize, Serialize};

// re-exports
pub use assoc::{Assoc, Key};
pub use scalar::{Number, Scalar};
pub use typed_list::TypedList;

///
/// Value
///
/// Closed sum over the runtime shapes an untyped input can take.
///
/// `Null` models absence at the input boundary; coercers communicate
/// their own failure through `Option`, never through `Null`.
///

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Collection(Assoc),
}

impl Value {
    ///
    /// CONSTRUCTION
    ///

    /// Build a list-shaped collection from a slice literal.
    ///
    /// Intended for tests and inline construction.
    /// Requires `Clone` because items are borrowed.
    pub fn from_slice<T>(items: &[T]) -> Self
    where
        T: Into<Self> + Clone,
    {
        Self::from_list(items.iter().cloned().collect())
    }

    /// Build a list-shaped collection from owned items, keyed `0..n`.
    pub fn from_list<T>(items: Vec<T>) -> Self
    where
        T: Into<Self>,
    {
        Self::Collection(Assoc::from_values(
            items.into_iter().map(Into::into).collect(),
        ))
    }

    /// Build a collection from owned `(key, value)` entries.
    ///
    /// Duplicate keys keep the last value at the first occurrence's position.
    pub fn from_entries<K, T>(entries: Vec<(K, T)>) -> Self
    where
        K: Into<Key>,
        T: Into<Self>,
    {
        Self::Collection(Assoc::from_entries(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        ))
    }

    ///
    /// TYPES
    ///

    /// Returns true if the value is `Null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true if the value is one of the scalar variants.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        match self {
            Self::Null | Self::Collection(_) => false,
            _ => true,
        }
    }

    /// Returns true if the value is a collection.
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::Collection(_))
    }

    ///
    /// CONVERSION
    ///

    #[must_use]
    pub const fn as_text(&self) -> Option<&str> {
        if let Self::Text(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_collection(&self) -> Option<&Assoc> {
        if let Self::Collection(entries) = self {
            Some(entries)
        } else {
            None
        }
    }
}

macro_rules! impl_from_for {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for! {
    bool   => Bool,
    i8     => Int,
    i16    => Int,
    i32    => Int,
    i64    => Int,
    u8     => Int,
    u16    => Int,
    u32    => Int,
    f32    => Float,
    f64    => Float,
    &str   => Text,
    String => Text,
    Assoc  => Collection,
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::from_list(items)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Self>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Int(i) => Self::Int(i),
            Number::Float(f) => Self::Float(f),
        }
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        match s {
            Scalar::Int(i) => Self::Int(i),
            Scalar::Float(f) => Self::Float(f),
            Scalar::Bool(b) => Self::Bool(b),
            Scalar::Text(t) => Self::Text(t),
        }
    }
}
