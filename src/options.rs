//! Formatting options and configuration.

use std::str::FromStr;

use crate::error::WordsError;

/// Cardinal-word vocabulary used when spelling numbers out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    /// European Portuguese (long scale: "mil milhões", "bilião")
    #[default]
    PtPt,
    /// Brazilian Portuguese (short scale: "bilhão", "trilhão")
    PtBr,
}

impl Lang {
    /// Returns the canonical language code.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::PtPt => "pt_PT",
            Lang::PtBr => "pt_BR",
        }
    }
}

impl FromStr for Lang {
    type Err = WordsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "pt" | "pt_pt" => Ok(Lang::PtPt),
            "pt_br" => Ok(Lang::PtBr),
            _ => Err(WordsError::UnsupportedLanguage {
                lang: s.to_string(),
            }),
        }
    }
}

/// Options for `format_number_pt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Append the two-digit decimal part after a comma.
    pub show_decimals: bool,
    /// Symbol appended after a single space; empty means no symbol.
    pub currency_symbol: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            show_decimals: true,
            currency_symbol: "€".to_string(),
        }
    }
}

impl FormatOptions {
    /// Two decimals, no currency symbol.
    pub fn plain() -> Self {
        FormatOptions {
            show_decimals: true,
            currency_symbol: String::new(),
        }
    }

    /// Returns a copy with `show_decimals` replaced.
    pub fn with_decimals(mut self, show_decimals: bool) -> Self {
        self.show_decimals = show_decimals;
        self
    }

    /// Returns a copy with the currency symbol replaced.
    pub fn with_currency(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }
}
