//! Locale data: separators, month names and cardinal-number vocabularies.

mod builtin;

pub use builtin::{Locale, Vocabulary};

use crate::options::Lang;

/// Convert a month number (1-12) to its lowercase pt-PT name.
///
/// Any other value yields an empty string.
///
/// # Examples
/// ```
/// use ptfmt::get_portuguese_month;
///
/// assert_eq!(get_portuguese_month(3), "março");
/// assert_eq!(get_portuguese_month(13), "");
/// ```
pub fn get_portuguese_month(month_number: u32) -> &'static str {
    Locale::pt_pt().month_name(month_number).unwrap_or("")
}

/// Returns the cardinal-number vocabulary for a language variant.
pub fn vocabulary(lang: Lang) -> &'static Vocabulary {
    match lang {
        Lang::PtPt => &builtin::PT_PT_WORDS,
        Lang::PtBr => &builtin::PT_BR_WORDS,
    }
}
