//! Defaulted-policy wrappers: every soft coercer restated with a
//! caller-supplied fallback substituted on absence. Collection variants
//! take a default collection; `*_or_empty` conveniences default to
//! empty.

use crate::{
    coerce,
    value::{Assoc, Number, Scalar, Value},
};

macro_rules! fallback_scalars {
    ( $( $name:ident => $ret:ty );* $(;)? ) => {
        $(
            #[must_use]
            pub fn $name(value: &Value, default: $ret) -> $ret {
                coerce::$name(value).unwrap_or(default)
            }
        )*
    };
}

fallback_scalars! {
    int       => i64;
    intify    => i64;
    float     => f64;
    floatify  => f64;
    bool      => bool;
    boolify   => bool;
    string    => String;
    stringify => String;
    number    => Number;
    scalar    => Scalar;
    unsigned  => i64;
    signed    => i64;
    positive  => i64;
    negative  => i64;
}

#[must_use]
pub fn collection(value: &Value, default: Assoc) -> Assoc {
    coerce::collection(value).unwrap_or(default)
}

macro_rules! fallback_collections {
    ( $( $name:ident / $name_empty:ident => $ret:ty, $empty:expr );* $(;)? ) => {
        $(
            #[must_use]
            pub fn $name<T, F>(ensure: F, value: &Value, default: $ret) -> $ret
            where
                F: Fn(&Value) -> Option<T>,
            {
                coerce::$name(ensure, value).unwrap_or(default)
            }

            #[must_use]
            pub fn $name_empty<T, F>(ensure: F, value: &Value) -> $ret
            where
                F: Fn(&Value) -> Option<T>,
            {
                coerce::$name(ensure, value).unwrap_or_else(|| $empty)
            }
        )*
    };
}

fallback_collections! {
    collection_of / collection_of_or_empty => Assoc<T>, Assoc::new();
    map_of        / map_of_or_empty        => Assoc<T>, Assoc::new();
    list_of       / list_of_or_empty       => Vec<T>, Vec::new();
}
