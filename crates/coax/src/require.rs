//! Loud-policy wrappers: every soft coercer restated as
//! `Result<T, CastError>`, raising on absence instead of returning
//! `None`.
//!
//! The wrappers are generated from one shape per arity rather than
//! hand-duplicated; the soft layer stays the single source of coercion
//! semantics. `message` overrides the default `<input> must be <phrase>`
//! rendering when supplied.

use crate::{
    coerce,
    error::{CastError, Requirement},
    value::{Assoc, Number, Scalar, Value},
};

macro_rules! require_scalars {
    ( $( $name:ident => $ret:ty, $req:ident );* $(;)? ) => {
        $(
            pub fn $name(value: &Value, message: Option<&str>) -> Result<$ret, CastError> {
                coerce::$name(value)
                    .ok_or_else(|| CastError::new(value, Requirement::$req, message))
            }
        )*
    };
}

require_scalars! {
    int       => i64, Int;
    intify    => i64, Int;
    float     => f64, Float;
    floatify  => f64, Float;
    bool      => bool, Bool;
    boolify   => bool, Bool;
    string    => String, Text;
    stringify => String, Text;
    number    => Number, Number;
    scalar    => Scalar, Scalar;
    unsigned  => i64, Unsigned;
    signed    => i64, Signed;
    positive  => i64, Positive;
    negative  => i64, Negative;
}

pub fn collection(value: &Value, message: Option<&str>) -> Result<Assoc, CastError> {
    coerce::collection(value).ok_or_else(|| CastError::new(value, Requirement::Collection, message))
}

macro_rules! require_collections {
    ( $( $name:ident => $ret:ty, $req:ident );* $(;)? ) => {
        $(
            pub fn $name<T, F>(
                ensure: F,
                value: &Value,
                message: Option<&str>,
            ) -> Result<$ret, CastError>
            where
                F: Fn(&Value) -> Option<T>,
            {
                coerce::$name(ensure, value)
                    .ok_or_else(|| CastError::new(value, Requirement::$req, message))
            }
        )*
    };
}

require_collections! {
    collection_of           => Assoc<T>, Collection;
    collection_of_non_empty => Assoc<T>, CollectionNonEmpty;
    map_of                  => Assoc<T>, Collection;
    map_of_non_empty        => Assoc<T>, CollectionNonEmpty;
    list_of                 => Vec<T>, List;
    list_of_non_empty       => Vec<T>, ListNonEmpty;
}
