//! Canonical literal-export rendering for `Value`.
//!
//! One stable rendering, used by loud-policy failure messages and golden
//! tests. Changing any of these forms is a breaking change.

use crate::value::{Key, Value};
use std::fmt;

impl Value {
    /// Render the value in the canonical literal-export form:
    /// `NULL`, `true`/`false`, decimal integers, floats with a decimal
    /// point, single-quoted text, bracketed `key => value` collections.
    #[must_use]
    pub fn export(&self) -> String {
        match self {
            Self::Null => "NULL".to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => export_float(*f),
            Self::Text(s) => export_text(s),
            Self::Collection(entries) => {
                let body = entries
                    .iter()
                    .map(|(key, value)| format!("{} => {}", export_key(key), value.export()))
                    .collect::<Vec<_>>()
                    .join(", ");

                format!("[{body}]")
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.export())
    }
}

fn export_key(key: &Key) -> String {
    match key {
        Key::Int(i) => i.to_string(),
        Key::Text(s) => export_text(s),
    }
}

// Integral floats keep a trailing ".0" so Float and Int exports stay distinct.
fn export_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 {
        format!("{f:.1}")
    } else {
        f.to_string()
    }
}

fn export_text(s: &str) -> String {
    let escaped = s.replace('\\', "\\\\").replace('\'', "\\'");

    format!("'{escaped}'")
}
