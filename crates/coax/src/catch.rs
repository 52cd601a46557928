//! Opt-in conversion of raised failures into absence.
//!
//! The library never catches failures from caller-supplied closures on
//! its own; these combinators are the explicit opt-in. `absorb`'s
//! predicate plays the role of an exception-class allow-list.

/// Run a fallible operation, converting any failure into absence.
pub fn trying<T, E>(operation: impl FnOnce() -> Result<T, E>) -> Option<T> {
    operation().ok()
}

/// As `trying`, handing the failure to `handler` before discarding it.
pub fn trying_with<T, E>(
    operation: impl FnOnce() -> Result<T, E>,
    handler: impl FnOnce(&E),
) -> Option<T> {
    match operation() {
        Ok(value) => Some(value),
        Err(err) => {
            handler(&err);
            None
        }
    }
}

/// Convert only allowed failures into absence; re-raise the rest.
pub fn absorb<T, E>(
    operation: impl FnOnce() -> Result<T, E>,
    allowed: impl FnOnce(&E) -> bool,
) -> Result<Option<T>, E> {
    match operation() {
        Ok(value) => Ok(Some(value)),
        Err(err) if allowed(&err) => Ok(None),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Requirement, require, value::Value};

    #[test]
    fn trying_optionalizes_failures() {
        assert_eq!(trying(|| require::int(&Value::Int(1), None)), Some(1));
        assert_eq!(trying(|| require::int(&Value::Null, None)), None);
    }

    #[test]
    fn trying_with_hands_the_failure_over() {
        let mut seen = None;
        let out = trying_with(
            || require::positive(&Value::Int(-3), None),
            |err| seen = Some(err.to_string()),
        );
        assert_eq!(out, None);
        assert_eq!(seen.as_deref(), Some("-3 must be > 0"));
    }

    #[test]
    fn absorb_reraises_disallowed_failures() {
        let absorbed = absorb(
            || require::unsigned(&Value::Int(-1), None),
            |err| err.requirement == Requirement::Unsigned,
        );
        assert_eq!(absorbed.unwrap(), None);

        let reraised = absorb(
            || require::negative(&Value::Int(1), None),
            |err| err.requirement == Requirement::Unsigned,
        );
        assert!(reraised.is_err());

        let passed = absorb(|| require::int(&Value::Int(7), None), |_| false);
        assert_eq!(passed.unwrap(), Some(7));
    }
}
