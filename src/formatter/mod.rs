//! pt-PT number and words rendering.
//!
//! Both the formatter and the words converter start from the same split of a
//! rounded value into sign, integer digits and a two-digit cents part, so a
//! value never shows "1.000,00" in figures and "novecentos e noventa e nove"
//! in words.

mod number;
mod words;

pub use number::format_number_pt;
pub use words::{num_to_words_pt, try_num_to_words_pt};

use crate::error::NumberError;
use crate::rounding::{round_value, Rounded, DECIMAL_PLACES};
use crate::value::Value;

/// A value rounded half-up to two decimals, split for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Parts {
    /// Never set for values that round to zero
    pub negative: bool,
    /// Integer digits without sign or separators
    pub integer: String,
    /// 0-99
    pub cents: u32,
}

impl Parts {
    /// The signed integer part, when it fits in an `i64`.
    pub fn integer_value(&self) -> Option<i64> {
        let magnitude: i64 = self.integer.parse().ok()?;
        Some(if self.negative { -magnitude } else { magnitude })
    }
}

/// Round a numeric value and split it into integer and cents parts.
///
/// Only floats and integers are accepted; text, booleans and empty values are
/// a type mismatch here even if they would parse.
pub(crate) fn split_number_parts(value: &Value<'_>) -> Result<Parts, NumberError> {
    if !value.is_numeric() {
        return Err(NumberError::TypeMismatch {
            expected: "number",
            got: value.type_name(),
        });
    }

    match round_value(value)? {
        Rounded::Exact(d) => {
            let mut magnitude = d.abs();
            magnitude.rescale(DECIMAL_PLACES);
            let fixed = magnitude.to_string();
            let (integer, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "0"));
            Ok(Parts {
                negative: d.is_sign_negative() && !d.is_zero(),
                integer: integer.to_string(),
                cents: cents.parse().unwrap_or(0),
            })
        }
        Rounded::Integral(f) => Ok(Parts {
            negative: f < 0.0,
            integer: format!("{:.0}", f.abs()),
            cents: 0,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(v: impl Into<Value<'static>>) -> (bool, String, u32) {
        let p = split_number_parts(&v.into()).unwrap();
        (p.negative, p.integer, p.cents)
    }

    #[test]
    fn test_split_basic() {
        assert_eq!(split(1000), (false, "1000".to_string(), 0));
        assert_eq!(split(1000.0), (false, "1000".to_string(), 0));
        assert_eq!(split(1234.56), (false, "1234".to_string(), 56));
        assert_eq!(split(0), (false, "0".to_string(), 0));
        assert_eq!(split(-1234.56), (true, "1234".to_string(), 56));
    }

    #[test]
    fn test_split_edge_cases() {
        assert_eq!(split(1e12), (false, "1000000000000".to_string(), 0));
        assert_eq!(split(0.0001), (false, "0".to_string(), 0));
        assert_eq!(split(-0.001), (false, "0".to_string(), 0));
        assert_eq!(split(1.999), (false, "2".to_string(), 0));
        assert_eq!(split(0.05), (false, "0".to_string(), 5));
    }

    #[test]
    fn test_split_rejects_non_numbers() {
        assert!(matches!(
            split_number_parts(&Value::Empty),
            Err(NumberError::TypeMismatch { got: "empty", .. })
        ));
        assert!(matches!(
            split_number_parts(&Value::Text("12")),
            Err(NumberError::TypeMismatch { got: "text", .. })
        ));
    }

    #[test]
    fn test_integer_value() {
        let p = split_number_parts(&Value::Number(-12.5)).unwrap();
        assert_eq!(p.integer_value(), Some(-12));
    }
}
