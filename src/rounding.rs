//! Half-up rounding to two decimal places on an exact decimal representation.
//!
//! Floats are first rendered to their shortest round-trip string ("1.005"),
//! parsed into a `Decimal` and quantized there. Rounding the binary value
//! directly would turn 1.005 into 1.00, because its nearest `f64` is
//! 1.00499999999999989...

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::NumberError;
use crate::value::Value;

/// Number of fractional digits every monetary amount is rounded to.
pub const DECIMAL_PLACES: u32 = 2;

/// Floats at or above 2^52 have no fractional bits left.
const INTEGRAL_FLOAT_THRESHOLD: f64 = 4_503_599_627_370_496.0;

/// Floats below this magnitude round to zero at two decimal places.
const NEGLIGIBLE_FLOAT_THRESHOLD: f64 = 1e-6;

/// The outcome of rounding a value: either an exact decimal, or a float too
/// large for `Decimal` that is already integral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Rounded {
    Exact(Decimal),
    Integral(f64),
}

impl Rounded {
    pub(crate) fn to_f64(self) -> Result<f64, NumberError> {
        match self {
            Rounded::Integral(f) => Ok(f),
            // Going through the string keeps the conversion correctly rounded
            Rounded::Exact(d) => {
                let s = d.to_string();
                s.parse::<f64>()
                    .map_err(|_| NumberError::InvalidNumber { input: s })
            }
        }
    }
}

/// Convert a value to a number rounded half-up to two decimal places.
///
/// Accepts floats, integers and numeric strings. Strings are trimmed and may
/// use scientific notation.
///
/// # Errors
/// * `NumberError::Infinite` for positive or negative infinity
/// * `NumberError::InvalidNumber` for anything that does not parse as a decimal
///
/// # Examples
/// ```
/// use ptfmt::to_number;
///
/// assert_eq!(to_number(1.005).unwrap(), 1.01);
/// assert_eq!(to_number(1.004).unwrap(), 1.0);
/// assert_eq!(to_number("12.345").unwrap(), 12.35);
/// ```
pub fn to_number<'a>(value: impl Into<Value<'a>>) -> Result<f64, NumberError> {
    round_value(&value.into())?.to_f64()
}

/// Multiply quantity by unit cost and round the result half-up to two decimals.
///
/// Both inputs must be numeric (`Value::Number` or `Value::Integer`).
///
/// # Errors
/// * `NumberError::TypeMismatch` if either input is not numeric
/// * `NumberError::Infinite` if the product overflows to infinity
///
/// # Examples
/// ```
/// use ptfmt::process_total_cost;
///
/// assert_eq!(process_total_cost(3, 33.333).unwrap(), 100.0);
/// assert!(process_total_cost((), 10).is_err());
/// ```
pub fn process_total_cost<'a, 'b>(
    qty: impl Into<Value<'a>>,
    cost_per_unit: impl Into<Value<'b>>,
) -> Result<f64, NumberError> {
    let qty = qty.into();
    let cost_per_unit = cost_per_unit.into();

    for value in [&qty, &cost_per_unit] {
        if !value.is_numeric() {
            return Err(NumberError::TypeMismatch {
                expected: "numeric quantity and cost per unit",
                got: value.type_name(),
            });
        }
    }

    let product = match (qty, cost_per_unit) {
        (Value::Integer(a), Value::Integer(b)) => match a.checked_mul(b) {
            Some(exact) => Value::Integer(exact),
            None => Value::Number(a as f64 * b as f64),
        },
        (a, b) => Value::Number(
            a.as_number().unwrap_or(f64::NAN) * b.as_number().unwrap_or(f64::NAN),
        ),
    };

    to_number(product)
}

/// Round a value half-up to two decimal places.
pub(crate) fn round_value(value: &Value<'_>) -> Result<Rounded, NumberError> {
    match value {
        Value::Integer(i) => Ok(Rounded::Exact(Decimal::from(*i))),
        Value::Number(f) => round_float(*f),
        Value::Text(s) => parse_decimal(s).map(|d| Rounded::Exact(quantize(d))),
        other => Err(NumberError::InvalidNumber {
            input: other.to_string(),
        }),
    }
}

fn round_float(f: f64) -> Result<Rounded, NumberError> {
    if f.is_infinite() {
        return Err(NumberError::Infinite);
    }
    if f.is_nan() {
        return Err(NumberError::InvalidNumber {
            input: "nan".to_string(),
        });
    }
    if f.abs() >= INTEGRAL_FLOAT_THRESHOLD {
        return Ok(Rounded::Integral(f));
    }
    if f.abs() < NEGLIGIBLE_FLOAT_THRESHOLD {
        return Ok(Rounded::Exact(Decimal::ZERO));
    }

    // Display for f64 is the shortest round-trip form and never uses exponents
    let repr = f.to_string();
    let d = Decimal::from_str(&repr).map_err(|_| NumberError::InvalidNumber { input: repr })?;
    Ok(Rounded::Exact(quantize(d)))
}

fn parse_decimal(input: &str) -> Result<Decimal, NumberError> {
    let s = input.trim();
    let unsigned = s.trim_start_matches(['+', '-']).to_ascii_lowercase();
    if unsigned == "inf" || unsigned == "infinity" {
        return Err(NumberError::Infinite);
    }

    let parsed = if s.contains(['e', 'E']) {
        Decimal::from_scientific(s)
    } else {
        Decimal::from_str(s)
    };

    parsed.map_err(|_| NumberError::InvalidNumber {
        input: input.to_string(),
    })
}

fn quantize(d: Decimal) -> Decimal {
    d.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}
