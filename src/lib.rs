//! ptfmt - Portuguese (pt-PT) numbers, currency, words and dates for document templates
//!
//! This crate turns raw quantity and unit-cost inputs into the derived
//! variables a permit document needs: half-up rounded amounts, figures such
//! as "1.234,56 €", the same amount spelled out ("mil, duzentos e trinta e
//! quatro euros e cinquenta e seis centavos") and the date line
//! ("março de 2026").

pub mod cardinal;
pub mod date;
pub mod error;
pub mod options;
pub mod pipeline;
pub mod value;
pub mod variables;

mod formatter;
mod locale;
mod rounding;

pub use error::{NumberError, ProcessError, VariablesError, WordsError};
pub use formatter::{format_number_pt, num_to_words_pt, try_num_to_words_pt};
pub use locale::{get_portuguese_month, Locale};
pub use options::{FormatOptions, Lang};
pub use pipeline::{process_costs_and_dates, process_costs_and_dates_at, process_date, process_date_at};
pub use rounding::{process_total_cost, to_number, DECIMAL_PLACES};
pub use value::Value;
pub use variables::{drop_empty, load_variables, parse_variables, save_variables, Variables};

/// Format a value with the default options: two decimals and a trailing " €".
///
/// # Examples
/// ```
/// assert_eq!(ptfmt::format_default(1_000_000).unwrap(), "1.000.000,00 €");
/// ```
pub fn format_default<'a>(value: impl Into<Value<'a>>) -> Result<String, NumberError> {
    format_number_pt(value, &FormatOptions::default())
}
