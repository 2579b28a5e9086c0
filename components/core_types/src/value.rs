//! Runtime value representation for the tree-walking interpreter.
//!
//! The value model is deliberately closed: five variants, all immutable once
//! constructed. Objects, functions and `null` are not part of it.

use serde::Serialize;
use std::fmt;

/// Represents any runtime value.
///
/// `NaN` is its own variant rather than a `Number(f64::NAN)`: the coercion
/// rules treat "not a number" as a distinct outcome that poisons every
/// operator except string concatenation.
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// let number = Value::Number(42.0);
/// assert_eq!(number.type_name(), "Number");
/// assert_eq!(number.to_string(), "42");
/// assert!(number.is_real());
/// assert!(!Value::NaN.is_real());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    /// The `undefined` value
    Undefined,
    /// The not-a-number value
    NaN,
    /// IEEE 754 double-precision number
    Number(f64),
    /// String value
    String(String),
    /// Boolean value
    Boolean(bool),
}

/// Borrowed view of a [`Value`] that has a numeric or textual
/// representation usable in coercive arithmetic and concatenation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RealValue<'a> {
    /// Number payload
    Number(f64),
    /// String payload
    String(&'a str),
    /// Boolean payload
    Boolean(bool),
}

impl Value {
    /// Name of the variant, as used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "Undefined",
            Value::NaN => "NaN",
            Value::Number(_) => "Number",
            Value::String(_) => "String",
            Value::Boolean(_) => "Boolean",
        }
    }

    /// True for `Number`, `String` and `Boolean`
    pub fn is_real(&self) -> bool {
        self.as_real().is_some()
    }

    /// View this value as a [`RealValue`], if it is one
    pub fn as_real(&self) -> Option<RealValue<'_>> {
        match self {
            Value::Number(n) => Some(RealValue::Number(*n)),
            Value::String(s) => Some(RealValue::String(s)),
            Value::Boolean(b) => Some(RealValue::Boolean(*b)),
            Value::Undefined | Value::NaN => None,
        }
    }
}

impl From<RealValue<'_>> for Value {
    fn from(real: RealValue<'_>) -> Self {
        match real {
            RealValue::Number(n) => Value::Number(n),
            RealValue::String(s) => Value::String(s.to_string()),
            RealValue::Boolean(b) => Value::Boolean(b),
        }
    }
}

/// Render a number the way `String(number)` does for everyday values.
///
/// ```
/// use core_types::format_number;
///
/// assert_eq!(format_number(3.0), "3");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// assert_eq!(format_number(-0.0), "0");
/// ```
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if n == 0.0 {
        // -0 prints as 0
        "0".to_string()
    } else {
        format!("{}", n)
    }
}

impl fmt::Display for RealValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RealValue::Number(n) => f.write_str(&format_number(*n)),
            RealValue::String(s) => f.write_str(s),
            RealValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// Textual representation used by string concatenation.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_real() {
            Some(real) => real.fmt(f),
            None => match self {
                Value::NaN => f.write_str("NaN"),
                _ => f.write_str("undefined"),
            },
        }
    }
}
