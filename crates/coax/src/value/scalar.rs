use serde::{Deserialize, Serialize};

///
/// Number
///
/// Result sum for numeric coercion; an integer-representable input is
/// always carried as `Int`, never widened to `Float`.
///

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Narrow to an integer, truncating floats toward zero.
    ///
    /// Out-of-range floats saturate at the `i64` bounds; NaN narrows to 0.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn trunc(self) -> i64 {
        match self {
            Self::Int(i) => i,
            Self::Float(f) => f as i64,
        }
    }
}

///
/// Scalar
///
/// Result sum for scalar reduction: the widest shape a loose (`*ify`)
/// coercer narrows from.
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl Scalar {
    /// General truthiness: nonzero numbers, `true`, and any text other
    /// than `""` and `"0"` are truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Int(i) => *i != 0,
            Self::Float(f) => *f != 0.0,
            Self::Bool(b) => *b,
            Self::Text(s) => !s.is_empty() && s != "0",
        }
    }

    /// Lossy narrowing to an integer, truncating toward zero.
    ///
    /// Text takes its leading numeric prefix; text with no numeric prefix
    /// narrows to 0.
    #[must_use]
    pub fn to_int_lossy(&self) -> i64 {
        match self {
            Self::Int(i) => *i,
            Self::Float(f) => Number::Float(*f).trunc(),
            Self::Bool(b) => i64::from(*b),
            Self::Text(s) => Number::Float(text_numeric_prefix(s)).trunc(),
        }
    }

    /// Lossy narrowing to a float.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn to_float_lossy(&self) -> f64 {
        match self {
            Self::Int(i) => *i as f64,
            Self::Float(f) => *f,
            Self::Bool(b) => f64::from(u8::from(*b)),
            Self::Text(s) => text_numeric_prefix(s),
        }
    }

    /// Textual rendering in the platform cast convention: integers in
    /// decimal, floats in shortest display form, `true` as `"1"`,
    /// `false` as `""`.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Int(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Bool(true) => "1".to_string(),
            Self::Bool(false) => String::new(),
            Self::Text(s) => s.clone(),
        }
    }
}

impl From<Number> for Scalar {
    fn from(n: Number) -> Self {
        match n {
            Number::Int(i) => Self::Int(i),
            Number::Float(f) => Self::Float(f),
        }
    }
}

/// Parse the longest leading numeric prefix of `s` as a float.
///
/// Leading ASCII whitespace is skipped; a bare sign, lone dot, or empty
/// prefix parses to 0. Mirrors the cast convention of lenient numeric
/// narrowing from text: `"42abc"` is 42.0, `"4.2e3x"` is 4200.0,
/// `"- 1"` is 0.
fn text_numeric_prefix(s: &str) -> f64 {
    let t = s.trim_start();
    let b = t.as_bytes();
    let mut end = 0;
    let mut digits = false;

    if end < b.len() && (b[end] == b'+' || b[end] == b'-') {
        end += 1;
    }
    while end < b.len() && b[end].is_ascii_digit() {
        end += 1;
        digits = true;
    }
    if end < b.len() && b[end] == b'.' {
        let mut j = end + 1;
        let fraction_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > fraction_start {
            end = j;
            digits = true;
        } else if digits {
            // trailing dot after digits, as in "4."
            end = j;
        }
    }
    if digits && end < b.len() && (b[end] == b'e' || b[end] == b'E') {
        let mut j = end + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exponent_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exponent_start {
            end = j;
        }
    }

    if !digits {
        return 0.0;
    }

    t[..end].parse().unwrap_or(0.0)
}
