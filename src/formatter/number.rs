//! pt-PT figures: "1.234,56 €".

use super::split_number_parts;
use crate::error::NumberError;
use crate::locale::Locale;
use crate::options::FormatOptions;
use crate::value::Value;

/// Format a number in Portuguese style.
///
/// The value is rounded half-up to two decimals, the integer part gets a `.`
/// every three digits and the decimal part follows a `,`. A non-empty
/// currency symbol is appended after a single space.
///
/// # Errors
/// * `NumberError::TypeMismatch` for empty, text or boolean values
/// * `NumberError::Infinite` for infinite floats
/// * `NumberError::InvalidNumber` for NaN
///
/// # Examples
/// ```
/// use ptfmt::{format_number_pt, FormatOptions};
///
/// let opts = FormatOptions::default();
/// assert_eq!(format_number_pt(1234.56, &opts).unwrap(), "1.234,56 €");
/// assert_eq!(format_number_pt(-1000, &opts).unwrap(), "-1.000,00 €");
/// assert_eq!(format_number_pt(1000, &FormatOptions::plain()).unwrap(), "1.000,00");
/// ```
pub fn format_number_pt<'a>(
    value: impl Into<Value<'a>>,
    opts: &FormatOptions,
) -> Result<String, NumberError> {
    let parts = split_number_parts(&value.into())?;
    let locale = Locale::pt_pt();

    let mut result = String::new();
    if parts.negative {
        result.push('-');
    }
    result.push_str(&group_thousands(&parts.integer, locale.thousands_separator));

    if opts.show_decimals {
        result.push(locale.decimal_separator);
        result.push_str(&format!("{:02}", parts.cents));
    }

    if !opts.currency_symbol.is_empty() {
        result.push(' ');
        result.push_str(&opts.currency_symbol);
    }

    Ok(result)
}

/// Insert `separator` every three digits from the right.
fn group_thousands(digits: &str, separator: char) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            result.push(separator);
        }
        result.push(digit);
    }

    result
}
