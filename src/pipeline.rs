//! Derived template variables: the date line and the cost fields.
//!
//! Every step takes the caller's map by reference and returns a new one, so
//! the input is never touched and unknown keys pass through unchanged.

use chrono::NaiveDate;
use tracing::debug;

use crate::date::{format_date_pt, today};
use crate::error::{NumberError, ProcessError};
use crate::formatter::{format_number_pt, num_to_words_pt};
use crate::options::{FormatOptions, Lang};
use crate::rounding::{process_total_cost, to_number};
use crate::value::Value;
use crate::variables::Variables;

pub const DATE_KEY: &str = "date";
pub const QTY_KEY: &str = "qty";
pub const COST_PER_UNIT_KEY: &str = "cost_per_unit";
pub const TOTAL_COST_KEY: &str = "total_cost";
pub const TOTAL_COST_WORDS_KEY: &str = "total_cost_words";

/// Currency noun used for the spelled-out total.
pub const CURRENCY_NOUN: &str = "euro";

/// Set `date` to the current local month and year in Portuguese.
pub fn process_date(variables: &Variables) -> Variables {
    process_date_at(variables, today())
}

/// Set `date` to `on`'s month and year in Portuguese.
pub fn process_date_at(variables: &Variables, on: NaiveDate) -> Variables {
    let mut variables = variables.clone();
    variables.insert(DATE_KEY.to_string(), format_date_pt(on).into());
    variables
}

/// Compute the derived variables for a document, dated today.
///
/// See [`process_costs_and_dates_at`].
pub fn process_costs_and_dates(variables: &Variables) -> Result<Variables, ProcessError> {
    process_costs_and_dates_at(variables, today())
}

/// Compute the derived variables for a document.
///
/// Always sets `date`. When both `qty` and `cost_per_unit` are present they
/// are rounded half-up to two decimals, multiplied, and the map gets:
/// - `total_cost`: "1.234,56 €"
/// - `total_cost_words`: "mil, duzentos e trinta e quatro euros e cinquenta e seis centavos"
/// - `qty`: "10,00" (no currency symbol)
/// - `cost_per_unit`: "123,46 €"
///
/// When either is missing no cost field is added or rewritten.
///
/// # Errors
/// `ProcessError::Variable` naming the first key whose value is not numeric.
pub fn process_costs_and_dates_at(
    variables: &Variables,
    on: NaiveDate,
) -> Result<Variables, ProcessError> {
    let mut variables = process_date_at(variables, on);

    let (Some(qty), Some(cost_per_unit)) = (
        variables.get(QTY_KEY),
        variables.get(COST_PER_UNIT_KEY),
    ) else {
        debug!("qty or cost_per_unit missing, skipping cost fields");
        return Ok(variables);
    };

    let qty = rounded(QTY_KEY, qty)?;
    let cost_per_unit = rounded(COST_PER_UNIT_KEY, cost_per_unit)?;
    let total_cost = process_total_cost(qty, cost_per_unit).map_err(|source| {
        ProcessError::Variable {
            key: TOTAL_COST_KEY,
            source,
        }
    })?;

    debug!(qty, cost_per_unit, total_cost, "computed total cost");

    let with_symbol = FormatOptions::default();
    let without_symbol = FormatOptions::plain();

    let fields = [
        (
            TOTAL_COST_KEY,
            formatted(TOTAL_COST_KEY, total_cost, &with_symbol)?,
        ),
        (
            TOTAL_COST_WORDS_KEY,
            num_to_words_pt(total_cost, Some(CURRENCY_NOUN), Lang::PtPt),
        ),
        (QTY_KEY, formatted(QTY_KEY, qty, &without_symbol)?),
        (
            COST_PER_UNIT_KEY,
            formatted(COST_PER_UNIT_KEY, cost_per_unit, &with_symbol)?,
        ),
    ];

    for (key, value) in fields {
        variables.insert(key.to_string(), value.into());
    }

    Ok(variables)
}

fn rounded(key: &'static str, value: &serde_json::Value) -> Result<f64, ProcessError> {
    to_number(Value::from(value)).map_err(|source| ProcessError::Variable { key, source })
}

fn formatted(key: &'static str, value: f64, opts: &FormatOptions) -> Result<String, ProcessError> {
    format_number_pt(value, opts).map_err(|source: NumberError| ProcessError::Variable { key, source })
}
