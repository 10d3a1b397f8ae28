//! Numbers spelled out in Portuguese, with currency and cents clauses.

use tracing::warn;

use super::split_number_parts;
use crate::cardinal;
use crate::error::{NumberError, WordsError};
use crate::locale::vocabulary;
use crate::options::Lang;
use crate::value::Value;

const CENT_SINGULAR: &str = "centavo";
const CENT_PLURAL: &str = "centavos";

/// Convert a number to Portuguese words, falling back to its plain string form.
///
/// This never fails: when the value cannot be converted (text, infinity,
/// NaN, ...) a warning is logged and the input is returned as a string, so
/// one malformed number does not abort a whole document.
///
/// # Examples
/// ```
/// use ptfmt::{num_to_words_pt, Lang};
///
/// assert_eq!(num_to_words_pt(1, Some("euro"), Lang::PtPt), "um euro");
/// assert_eq!(num_to_words_pt(1.5, Some("euro"), Lang::PtPt), "um euro e cinquenta centavos");
/// assert_eq!(num_to_words_pt(1234, None, Lang::PtPt), "mil, duzentos e trinta e quatro");
/// assert_eq!(num_to_words_pt("abc", None, Lang::PtPt), "abc");
/// ```
pub fn num_to_words_pt<'a>(
    value: impl Into<Value<'a>>,
    currency: Option<&str>,
    lang: Lang,
) -> String {
    let value = value.into();
    match try_num_to_words_pt(value, currency, lang) {
        Ok(words) => words,
        Err(err) => {
            warn!(input = %value, error = %err, "error converting number to words");
            value.to_string()
        }
    }
}

/// Convert a number to Portuguese words.
///
/// The integer part is spelled out with a comma after a "mil" that is
/// followed by more words. With a currency noun the result reads
/// "<words> <currency>" (plural "s" unless the integer is exactly one)
/// followed by " e <cents> centavos" when there are cents; without one the
/// cents follow a comma.
pub fn try_num_to_words_pt<'a>(
    value: impl Into<Value<'a>>,
    currency: Option<&str>,
    lang: Lang,
) -> Result<String, WordsError> {
    let parts = split_number_parts(&value.into())?;
    let int_part = parts.integer_value().ok_or_else(|| NumberError::InvalidNumber {
        input: parts.integer.clone(),
    })?;

    let mut int_words = cardinal::to_words(int_part, lang);
    if int_part > 1000 && int_part % 1000 != 0 {
        int_words = comma_after_thousand(&int_words, lang);
    }

    let mut result = int_words;
    match currency.filter(|c| !c.is_empty()) {
        Some(currency) => {
            result.push(' ');
            result.push_str(currency);
            if int_part != 1 {
                result.push('s');
            }

            if parts.cents > 0 {
                let noun = if parts.cents == 1 {
                    CENT_SINGULAR
                } else {
                    CENT_PLURAL
                };
                result.push_str(&format!(
                    " e {} {}",
                    cardinal::to_words(parts.cents as i64, lang),
                    noun
                ));
            }
        }
        None => {
            if parts.cents > 0 {
                result.push_str(", ");
                result.push_str(&cardinal::to_words(parts.cents as i64, lang));
            }
        }
    }

    Ok(result)
}

/// Put a comma after every standalone "mil" that is followed by another word,
/// unless that word is a scale noun ("mil milhões" stays as is).
fn comma_after_thousand(words: &str, lang: Lang) -> String {
    let vocab = vocabulary(lang);
    let tokens: Vec<&str> = words.split(' ').collect();

    let mut result = String::with_capacity(words.len() + 2);
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push_str(token);

        if *token == vocab.thousand {
            if let Some(next) = tokens.get(i + 1) {
                if !vocab.is_scale_noun(next) {
                    result.push(',');
                }
            }
        }
    }

    result
}
