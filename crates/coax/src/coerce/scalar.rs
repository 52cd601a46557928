//! Module: coerce::scalar
//! Responsibility: strict and loose scalar coercers plus scalar reduction.
//! Does not own: range narrowing or collection traversal.
//! Boundary: consumed by the range/collection coercers and policy wrappers.

use crate::value::{Number, Scalar, Value};

/// Text literals recognized as `true` by the strict boolean coercer.
const TRUTHY_LITERALS: &[&str] = &["true", "yes", "on", "1"];

/// Text literals recognized as `false` by the strict boolean coercer.
const FALSY_LITERALS: &[&str] = &["false", "no", "off", "0"];

///
/// ScalarPolicy
///
/// Resolution order for scalar reduction. Two orderings coexist in the
/// lineages this library generalizes; both are supported, and the choice
/// is explicit rather than implied.
///
/// Under both policies `Null` reduces to nothing (fail-fast null
/// handling; see DESIGN.md).
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ScalarPolicy {
    /// Numeric-looking values (including fully-numeric text) resolve to a
    /// number first, booleans stay boolean, remaining text stays text.
    #[default]
    NumericFirst,
    /// Number, else strict boolean, else text: a textual `"true"`/`"yes"`
    /// literal resolves to a boolean before falling through to raw text,
    /// and `true`/`false` themselves resolve numerically.
    BoolFirst,
}

///
/// STRICT COERCERS
///

/// Coerce to an integer.
///
/// Integers pass through; integral in-range floats narrow; `true` is 1;
/// text must fully parse as a signed decimal integer after trimming
/// surrounding whitespace. Everything else is absent.
#[must_use]
pub fn int(value: &Value) -> Option<i64> {
    match value {
        Value::Int(i) => Some(*i),
        Value::Float(f) => int_from_float(*f),
        Value::Bool(true) => Some(1),
        Value::Text(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Coerce to a float.
///
/// Floats pass through; integers widen; `true` is 1.0; text must fully
/// parse as a finite float after trimming. Everything else is absent.
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn float(value: &Value) -> Option<f64> {
    match value {
        Value::Float(f) => Some(*f),
        Value::Int(i) => Some(*i as f64),
        Value::Bool(true) => Some(1.0),
        Value::Text(s) => parse_float_strict(s),
        _ => None,
    }
}

/// Coerce to a boolean.
///
/// Booleans pass through. Positive numbers are true, zero is false,
/// negative numbers are absent. Text is matched case-insensitively
/// against the fixed literal tables. `Null` is absent, never false.
#[must_use]
pub fn bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Int(i) => match i.signum() {
            1 => Some(true),
            0 => Some(false),
            _ => None,
        },
        Value::Float(f) => {
            if *f > 0.0 {
                Some(true)
            } else if *f == 0.0 {
                Some(false)
            } else {
                // negative and NaN
                None
            }
        }
        Value::Text(s) => bool_literal(s.trim()),
        _ => None,
    }
}

/// Coerce to a string: text passes through, nothing else does.
///
/// Numbers are intentionally not stringified here; that is `stringify`.
#[must_use]
pub fn string(value: &Value) -> Option<String> {
    value.as_text().map(ToString::to_string)
}

///
/// LOOSE (*IFY) COERCERS
///

/// `int`, else scalar reduction narrowed toward zero.
///
/// Booleans narrow to 1/0, floats truncate, text takes its leading
/// numeric prefix (0 when there is none). Absent only when the input
/// reduces to no scalar at all.
#[must_use]
pub fn intify(value: &Value) -> Option<i64> {
    intify_with(ScalarPolicy::default(), value)
}

#[must_use]
pub fn intify_with(policy: ScalarPolicy, value: &Value) -> Option<i64> {
    int(value).or_else(|| scalar_with(policy, value).map(|s| s.to_int_lossy()))
}

/// `float`, else scalar reduction narrowed to a float.
#[must_use]
pub fn floatify(value: &Value) -> Option<f64> {
    floatify_with(ScalarPolicy::default(), value)
}

#[must_use]
pub fn floatify_with(policy: ScalarPolicy, value: &Value) -> Option<f64> {
    float(value).or_else(|| scalar_with(policy, value).map(|s| s.to_float_lossy()))
}

/// `bool`, else scalar reduction cast by general truthiness.
#[must_use]
pub fn boolify(value: &Value) -> Option<bool> {
    boolify_with(ScalarPolicy::default(), value)
}

#[must_use]
pub fn boolify_with(policy: ScalarPolicy, value: &Value) -> Option<bool> {
    bool(value).or_else(|| scalar_with(policy, value).map(|s| s.is_truthy()))
}

/// `string`, else scalar reduction rendered textually.
#[must_use]
pub fn stringify(value: &Value) -> Option<String> {
    stringify_with(ScalarPolicy::default(), value)
}

#[must_use]
pub fn stringify_with(policy: ScalarPolicy, value: &Value) -> Option<String> {
    string(value).or_else(|| scalar_with(policy, value).map(|s| s.render()))
}

///
/// DERIVED COMBINATORS
///

/// Coerce to a number: integer representation wins over float.
#[must_use]
pub fn number(value: &Value) -> Option<Number> {
    int(value)
        .map(Number::Int)
        .or_else(|| float(value).map(Number::Float))
}

/// Reduce to a scalar under the default policy.
#[must_use]
pub fn scalar(value: &Value) -> Option<Scalar> {
    scalar_with(ScalarPolicy::default(), value)
}

/// Reduce to a scalar under an explicit resolution policy.
#[must_use]
pub fn scalar_with(policy: ScalarPolicy, value: &Value) -> Option<Scalar> {
    match policy {
        ScalarPolicy::NumericFirst => match value {
            Value::Int(_) | Value::Float(_) => number(value).map(Scalar::from),
            Value::Bool(b) => Some(Scalar::Bool(*b)),
            Value::Text(s) => number(value)
                .map(Scalar::from)
                .or_else(|| Some(Scalar::Text(s.clone()))),
            _ => None,
        },
        ScalarPolicy::BoolFirst => number(value)
            .map(Scalar::from)
            .or_else(|| bool(value).map(Scalar::Bool))
            .or_else(|| string(value).map(Scalar::Text)),
    }
}

///
/// PARSING HELPERS
///

#[expect(clippy::cast_possible_truncation)]
fn int_from_float(f: f64) -> Option<i64> {
    #[expect(clippy::cast_precision_loss)]
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;

    (f.is_finite() && f.fract() == 0.0 && in_range).then_some(f as i64)
}

fn parse_float_strict(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }

    // f64's parser admits "inf"/"nan" tokens; only finite literals count.
    t.parse::<f64>().ok().filter(|f| f.is_finite())
}

fn bool_literal(s: &str) -> Option<bool> {
    if TRUTHY_LITERALS.iter().any(|lit| s.eq_ignore_ascii_case(lit)) {
        Some(true)
    } else if FALSY_LITERALS.iter().any(|lit| s.eq_ignore_ascii_case(lit)) {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    fn v_txt(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    fn empty() -> Value {
        Value::from_list(Vec::<Value>::new())
    }

    // ---- strict int ----------------------------------------------------

    #[test]
    fn int_accepts_integers_and_integer_text() {
        assert_eq!(int(&Value::Int(42)), Some(42));
        assert_eq!(int(&v_txt("42")), Some(42));
        assert_eq!(int(&v_txt("  42  ")), Some(42));
        assert_eq!(int(&v_txt("-1")), Some(-1));
        assert_eq!(int(&v_txt("  -1")), Some(-1));
        assert_eq!(int(&v_txt("+42")), Some(42));
        assert_eq!(int(&v_txt("0")), Some(0));
        assert_eq!(int(&Value::Int(-1)), Some(-1));
    }

    #[test]
    fn int_rejects_everything_else() {
        assert_eq!(int(&Value::Float(4.2)), None);
        assert_eq!(int(&v_txt("4.2")), None);
        assert_eq!(int(&v_txt("42a")), None);
        assert_eq!(int(&v_txt("a42")), None);
        assert_eq!(int(&v_txt("- 1")), None);
        assert_eq!(int(&v_txt("  - 1")), None);
        assert_eq!(int(&v_txt("abc")), None);
        assert_eq!(int(&Value::Null), None);
        assert_eq!(int(&empty()), None);
    }

    #[test]
    fn int_maps_booleans_asymmetrically() {
        assert_eq!(int(&Value::Bool(true)), Some(1));
        assert_eq!(int(&Value::Bool(false)), None);
    }

    #[test]
    fn int_accepts_only_integral_in_range_floats() {
        assert_eq!(int(&Value::Float(4.0)), Some(4));
        assert_eq!(int(&Value::Float(-0.0)), Some(0));
        assert_eq!(int(&Value::Float(4.5)), None);
        assert_eq!(int(&Value::Float(1e30)), None);
        assert_eq!(int(&Value::Float(f64::NAN)), None);
        assert_eq!(int(&Value::Float(f64::INFINITY)), None);
    }

    // ---- intify --------------------------------------------------------

    #[test]
    fn intify_narrows_through_scalar_reduction() {
        assert_eq!(intify(&Value::Int(42)), Some(42));
        assert_eq!(intify(&Value::Float(4.2)), Some(4));
        assert_eq!(intify(&v_txt("4.2")), Some(4));
        assert_eq!(intify(&v_txt("42a")), Some(42));
        assert_eq!(intify(&v_txt("a42")), Some(0));
        assert_eq!(intify(&v_txt("abc")), Some(0));
        assert_eq!(intify(&v_txt("- 1")), Some(0));
        assert_eq!(intify(&Value::Bool(true)), Some(1));
        assert_eq!(intify(&Value::Bool(false)), Some(0));
        assert_eq!(intify(&v_txt("-1")), Some(-1));
    }

    #[test]
    fn intify_is_absent_without_a_scalar() {
        assert_eq!(intify(&Value::Null), None);
        assert_eq!(intify(&empty()), None);
    }

    #[test]
    fn intify_policy_decides_textual_bool_literals() {
        assert_eq!(intify_with(ScalarPolicy::NumericFirst, &v_txt("true")), Some(0));
        assert_eq!(intify_with(ScalarPolicy::BoolFirst, &v_txt("true")), Some(1));
        assert_eq!(intify_with(ScalarPolicy::BoolFirst, &v_txt("no")), Some(0));
    }

    // ---- strict float --------------------------------------------------

    #[test]
    fn float_accepts_numbers_and_numeric_text() {
        assert_eq!(float(&Value::Int(42)), Some(42.0));
        assert_eq!(float(&Value::Float(4.2)), Some(4.2));
        assert_eq!(float(&v_txt("4.2")), Some(4.2));
        assert_eq!(float(&v_txt("  4.2  ")), Some(4.2));
        assert_eq!(float(&v_txt("42")), Some(42.0));
        assert_eq!(float(&v_txt("-1")), Some(-1.0));
        assert_eq!(float(&v_txt("0")), Some(0.0));
        assert_eq!(float(&Value::Bool(true)), Some(1.0));
    }

    #[test]
    fn float_rejects_partial_and_non_numeric_text() {
        assert_eq!(float(&v_txt("4.2a")), None);
        assert_eq!(float(&v_txt("a4.2")), None);
        assert_eq!(float(&v_txt("- 1")), None);
        assert_eq!(float(&v_txt("abc")), None);
        assert_eq!(float(&v_txt("inf")), None);
        assert_eq!(float(&v_txt("nan")), None);
        assert_eq!(float(&Value::Bool(false)), None);
        assert_eq!(float(&Value::Null), None);
        assert_eq!(float(&empty()), None);
    }

    // ---- floatify ------------------------------------------------------

    #[test]
    fn floatify_narrows_through_scalar_reduction() {
        assert_eq!(floatify(&v_txt("4.2a")), Some(4.2));
        assert_eq!(floatify(&v_txt("a4.2")), Some(0.0));
        assert_eq!(floatify(&Value::Bool(false)), Some(0.0));
        assert_eq!(floatify(&v_txt("abc")), Some(0.0));
        assert_eq!(floatify(&Value::Null), None);
        assert_eq!(floatify(&empty()), None);
    }

    // ---- strict bool ---------------------------------------------------

    #[test]
    fn bool_recognizes_the_literal_tables() {
        for lit in ["true", "yes", "on", "1", "TRUE", "Yes", " on "] {
            assert_eq!(bool(&v_txt(lit)), Some(true), "literal {lit:?}");
        }
        for lit in ["false", "no", "off", "0", "FALSE", "No", " off "] {
            assert_eq!(bool(&v_txt(lit)), Some(false), "literal {lit:?}");
        }
    }

    #[test]
    fn bool_treats_negative_numbers_as_unrecognized() {
        assert_eq!(bool(&Value::Int(1)), Some(true));
        assert_eq!(bool(&Value::Int(42)), Some(true));
        assert_eq!(bool(&Value::Int(0)), Some(false));
        assert_eq!(bool(&Value::Int(-1)), None);
        assert_eq!(bool(&Value::Float(4.2)), Some(true));
        assert_eq!(bool(&Value::Float(0.0)), Some(false));
        assert_eq!(bool(&Value::Float(-0.0)), Some(false));
        assert_eq!(bool(&Value::Float(-4.2)), None);
        assert_eq!(bool(&Value::Float(f64::NAN)), None);
    }

    #[test]
    fn bool_is_absent_for_null_and_unrecognized_text() {
        assert_eq!(bool(&Value::Null), None);
        assert_eq!(bool(&v_txt("abc")), None);
        assert_eq!(bool(&v_txt("-1")), None);
        assert_eq!(bool(&v_txt("- 1")), None);
        assert_eq!(bool(&empty()), None);
        assert_eq!(bool(&Value::Bool(false)), Some(false));
    }

    // ---- boolify -------------------------------------------------------

    #[test]
    fn boolify_falls_back_to_truthiness() {
        assert_eq!(boolify(&Value::Int(-1)), Some(true));
        assert_eq!(boolify(&v_txt("-1")), Some(true));
        assert_eq!(boolify(&v_txt("- 1")), Some(true));
        assert_eq!(boolify(&v_txt("abc")), Some(true));
        assert_eq!(boolify(&v_txt("0")), Some(false));
        assert_eq!(boolify(&Value::Float(-4.2)), Some(true));
        assert_eq!(boolify(&Value::Bool(false)), Some(false));
        assert_eq!(boolify(&Value::Null), None);
        assert_eq!(boolify(&empty()), None);
    }

    // ---- string / stringify --------------------------------------------

    #[test]
    fn string_passes_text_through_only() {
        assert_eq!(string(&v_txt("abc")), Some("abc".to_string()));
        assert_eq!(string(&Value::Int(42)), None);
        assert_eq!(string(&Value::Bool(true)), None);
        assert_eq!(string(&Value::Null), None);
        assert_eq!(string(&empty()), None);
    }

    #[test]
    fn stringify_renders_scalars() {
        assert_eq!(stringify(&v_txt("abc")), Some("abc".to_string()));
        assert_eq!(stringify(&Value::Int(42)), Some("42".to_string()));
        assert_eq!(stringify(&Value::Float(4.2)), Some("4.2".to_string()));
        assert_eq!(stringify(&Value::Bool(true)), Some("1".to_string()));
        assert_eq!(stringify(&Value::Bool(false)), Some(String::new()));
        assert_eq!(stringify(&Value::Null), None);
        assert_eq!(stringify(&empty()), None);
    }

    // ---- number / scalar -----------------------------------------------

    #[test]
    fn number_prefers_the_integer_representation() {
        assert_eq!(number(&Value::Int(42)), Some(Number::Int(42)));
        assert_eq!(number(&v_txt("42")), Some(Number::Int(42)));
        assert_eq!(number(&Value::Float(4.2)), Some(Number::Float(4.2)));
        assert_eq!(number(&v_txt("4.2")), Some(Number::Float(4.2)));
        assert_eq!(number(&Value::Bool(true)), Some(Number::Int(1)));
        assert_eq!(number(&Value::Bool(false)), None);
        assert_eq!(number(&v_txt("abc")), None);
        assert_eq!(number(&Value::Null), None);
    }

    #[test]
    fn scalar_policies_diverge_on_textual_bool_literals() {
        let lit = v_txt("true");
        assert_eq!(
            scalar_with(ScalarPolicy::NumericFirst, &lit),
            Some(Scalar::Text("true".to_string()))
        );
        assert_eq!(
            scalar_with(ScalarPolicy::BoolFirst, &lit),
            Some(Scalar::Bool(true))
        );

        // numeric text resolves to a number under both
        for policy in [ScalarPolicy::NumericFirst, ScalarPolicy::BoolFirst] {
            assert_eq!(scalar_with(policy, &v_txt("42")), Some(Scalar::Int(42)));
            assert_eq!(scalar_with(policy, &Value::Null), None);
            assert_eq!(scalar_with(policy, &empty()), None);
        }
    }

    #[test]
    fn scalar_keeps_bools_boolean_under_numeric_first() {
        assert_eq!(scalar(&Value::Bool(true)), Some(Scalar::Bool(true)));
        assert_eq!(
            scalar_with(ScalarPolicy::BoolFirst, &Value::Bool(true)),
            Some(Scalar::Int(1))
        );
    }
}
