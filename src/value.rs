//! Input values accepted by the rounder, formatter and words converter.

use std::fmt;

/// A value that can be rounded, formatted or spelled out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// A floating point value
    Number(f64),
    /// An exact integer
    Integer(i64),
    /// A numeric string, e.g. "12.50" coming from a form field
    Text(&'a str),
    /// A boolean value (never numeric here)
    Bool(bool),
    /// A missing or null value
    Empty,
    /// A JSON array or object
    Structured(&'static str),
}

impl<'a> From<f64> for Value<'a> {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl<'a> From<f32> for Value<'a> {
    fn from(n: f32) -> Self {
        Value::Number(n as f64)
    }
}

impl<'a> From<i64> for Value<'a> {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl<'a> From<i32> for Value<'a> {
    fn from(n: i32) -> Self {
        Value::Integer(n as i64)
    }
}

impl<'a> From<u32> for Value<'a> {
    fn from(n: u32) -> Self {
        Value::Integer(n as i64)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Text(s)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(s: &'a String) -> Self {
        Value::Text(s.as_str())
    }
}

impl<'a> From<bool> for Value<'a> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<'a> From<()> for Value<'a> {
    fn from(_: ()) -> Self {
        Value::Empty
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Empty, Into::into)
    }
}

impl<'a> From<&'a serde_json::Value> for Value<'a> {
    fn from(v: &'a serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Empty,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                // u64 beyond i64::MAX and all fractional numbers
                None => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Text(s.as_str()),
            serde_json::Value::Array(_) => Value::Structured("array"),
            serde_json::Value::Object(_) => Value::Structured("object"),
        }
    }
}

impl<'a> Value<'a> {
    /// Returns the value as a float if it is numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Returns the value as text if it is text.
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true for `Number` and `Integer`.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Number(_) | Value::Integer(_))
    }

    /// Returns true if this value is empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    /// Returns a type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "float",
            Value::Integer(_) => "integer",
            Value::Text(_) => "text",
            Value::Bool(_) => "boolean",
            Value::Empty => "empty",
            Value::Structured(kind) => kind,
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) if n.is_nan() => f.write_str("nan"),
            Value::Number(n) if n.is_infinite() => {
                f.write_str(if n.is_sign_positive() { "inf" } else { "-inf" })
            }
            Value::Number(n) => write!(f, "{}", n),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Text(s) => f.write_str(s),
            Value::Bool(true) => f.write_str("true"),
            Value::Bool(false) => f.write_str("false"),
            Value::Empty => f.write_str("None"),
            Value::Structured(kind) => write!(f, "<{}>", kind),
        }
    }
}
