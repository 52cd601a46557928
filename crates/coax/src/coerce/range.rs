//! Module: coerce::range
//! Responsibility: sign-constrained integer narrowing over `number`.
//! Truncation is toward zero, so `0.5` narrows to 0 before the range
//! check is applied.

use crate::coerce::number;
use crate::value::{Number, Value};

/// Coerce to an integer kept only when `>= 0`.
#[must_use]
pub fn unsigned(value: &Value) -> Option<i64> {
    number(value).map(Number::trunc).filter(|n| *n >= 0)
}

/// Coerce to an integer kept only when `<= 0`.
#[must_use]
pub fn signed(value: &Value) -> Option<i64> {
    number(value).map(Number::trunc).filter(|n| *n <= 0)
}

/// Coerce to an integer kept only when `> 0`.
#[must_use]
pub fn positive(value: &Value) -> Option<i64> {
    number(value).map(Number::trunc).filter(|n| *n > 0)
}

/// Coerce to an integer kept only when `< 0`.
#[must_use]
pub fn negative(value: &Value) -> Option<i64> {
    number(value).map(Number::trunc).filter(|n| *n < 0)
}
