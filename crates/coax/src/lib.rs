//! Coercion and validation primitives for untyped values: interpret a
//! dynamically-shaped [`value::Value`] as a target primitive type or a
//! homogeneous collection thereof, under three policies.
//!
//! ## Crate layout
//! - `value`: the input data model — `Value`, keys, collections, and the
//!   scalar/number result sums.
//! - `coerce`: the soft-policy core — pure `&Value -> Option<T>`
//!   coercers and their collection combinators.
//! - `require`: the loud policy — absence becomes a [`error::CastError`].
//! - `fallback`: the defaulted policy — absence becomes a caller default.
//! - `catch`: opt-in conversion of raised failures into absence.
//!
//! Everything is synchronous, deterministic, and free of shared state;
//! every function is safe to call concurrently.

pub mod catch;
pub mod coerce;
pub mod error;
pub mod fallback;
pub mod require;
pub mod value;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// The policy modules are meant to be used by path (`coerce::int`,
/// `require::int`, `fallback::int`) and are not re-exported here.
///

pub mod prelude {
    pub use crate::{
        coerce::ScalarPolicy,
        error::{CastError, Requirement},
        value::{Assoc, Key, Number, Scalar, TypedList, Value},
    };
}
