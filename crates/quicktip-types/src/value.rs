//! The dynamically-typed scalar value model.
//!
//! Four variants, a fixed literal coercion order, and the loose/strict
//! equality policy the comparison operators build on. Evaluation never
//! fails on a type mismatch — values that cannot act as numbers coerce
//! to NaN and flow through IEEE-754 arithmetic instead.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A tooltip expression value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Value {
    String(String),
    Number(f64),
    Bool(bool),
    /// The not-found / unresolvable marker. Stringifies to `undefined`.
    Undefined,
}

impl Value {
    /// Coerce raw literal text into a typed value.
    ///
    /// Order matters:
    /// 1. a matching pair of surrounding quotes (`'`, `"`, `` ` ``) →
    ///    [`Value::String`] with the quotes stripped;
    /// 2. case-insensitive `true` / `false` → [`Value::Bool`];
    /// 3. the first numeric span in the text → [`Value::Number`]
    ///    (`3.5abc` coerces to `3.5` — a documented quirk);
    /// 4. anything else stays raw [`Value::String`] text.
    pub fn coerce(text: &str) -> Value {
        if let Some(inner) = quicktip_scan::quoted_inner(text) {
            return Value::String(inner.to_string());
        }
        if text.eq_ignore_ascii_case("true") {
            return Value::Bool(true);
        }
        if text.eq_ignore_ascii_case("false") {
            return Value::Bool(false);
        }
        if let Some(n) = quicktip_scan::numeric_match(text) {
            return Value::Number(n);
        }
        Value::String(text.to_string())
    }

    /// Truthiness for ternary conditions: everything is truthy except
    /// explicit `false` and `Undefined`. Empty string and zero ARE
    /// truthy under this model.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Bool(false) | Value::Undefined)
    }

    /// Numeric coercion for arithmetic and ordering.
    ///
    /// Bools are 1/0, an empty or whitespace-only string is 0, a fully
    /// numeric string parses, anything else (including `Undefined`) is
    /// NaN and poisons the surrounding arithmetic.
    pub fn as_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            Value::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse().unwrap_or(f64::NAN)
                }
            }
            Value::Undefined => f64::NAN,
        }
    }

    /// Loose equality (`==` / `!=`): same-variant values compare
    /// directly, `Undefined` equals only itself, and mixed variants
    /// compare numerically (NaN on either side is never equal).
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Undefined, Value::Undefined) => true,
            (Value::Undefined, _) | (_, Value::Undefined) => false,
            _ => {
                let (a, b) = (self.as_number(), other.as_number());
                !a.is_nan() && !b.is_nan() && a == b
            }
        }
    }

    /// Strict equality (`===` / `!==`): same variant and equal.
    /// NaN never equals NaN.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Undefined, Value::Undefined) => true,
            _ => false,
        }
    }

    /// Ordering for `<`, `<=`, `>`, `>=`: two strings compare
    /// lexicographically, everything else compares numerically.
    /// `None` when a NaN operand makes the sides unordered — the
    /// comparison operators then yield `false`.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        if let (Value::String(a), Value::String(b)) = (self, other) {
            return Some(a.cmp(b));
        }
        self.as_number().partial_cmp(&other.as_number())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{s}"),
            Value::Number(n) => {
                if n.is_nan() {
                    write!(f, "NaN")
                } else if n.is_infinite() {
                    write!(f, "{}Infinity", if *n < 0.0 { "-" } else { "" })
                } else if n.fract() == 0.0 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            Value::Bool(b) => write!(f, "{b}"),
            Value::Undefined => write!(f, "undefined"),
        }
    }
}
