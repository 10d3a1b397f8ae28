//! Portuguese month/year rendering for the document date line.

use chrono::{Datelike, Local, NaiveDate};

use crate::locale::Locale;

/// Render a date as "<month> de <year>", e.g. "março de 2026".
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use ptfmt::date::format_date_pt;
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
/// assert_eq!(format_date_pt(date), "março de 2026");
/// ```
pub fn format_date_pt(date: NaiveDate) -> String {
    let locale = Locale::pt_pt();
    let month = locale.month_name(date.month()).unwrap_or("");
    format!("{} {} {}", month, locale.date_connector, date.year())
}

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
