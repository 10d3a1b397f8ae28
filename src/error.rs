//! Error types for rounding, formatting, words and the variables pipeline.

use thiserror::Error;

/// Errors that can occur when rounding or formatting a numeric value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumberError {
    #[error("cannot convert '{input}' to a decimal number")]
    InvalidNumber { input: String },

    #[error("cannot convert infinity values to numbers")]
    Infinite,

    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },
}

/// Errors that can occur when spelling a number out in words.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WordsError {
    #[error(transparent)]
    Number(#[from] NumberError),

    #[error("unsupported language '{lang}'")]
    UnsupportedLanguage { lang: String },
}

/// Errors raised by the cost/date pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProcessError {
    #[error("invalid value for variable '{key}'")]
    Variable {
        key: &'static str,
        #[source]
        source: NumberError,
    },
}

/// Errors that can occur when reading or writing a variables file.
#[derive(Debug, Error)]
pub enum VariablesError {
    #[error("variables file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid variables JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("variables document must be a JSON object, got {got}")]
    NotAnObject { got: &'static str },
}
