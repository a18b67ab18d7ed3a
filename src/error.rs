//! Error types for tokenizing and parsing
//!
//! The tokenizer and the parser never fail on ordinary text. These errors cover
//! caller misuse of the tokenizer and the date checks that are only enforced when
//! the parser runs with [`DateValidation::strict`](crate::settings::DateValidation).

use thiserror::Error;

/// Misuse of a [`Tokenizer`](crate::parsing::Tokenizer)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizerError {
    /// `tokenize` was called again without `reset` in between
    #[error("tokenizer was already used; call reset() before tokenizing another text")]
    NotReset,
}

/// Problems found while decoding a `dd/mm/yyyy` literal
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// The literal does not have three numeric `/`-separated parts
    #[error("malformed date literal '{0}'")]
    Malformed(String),
    /// Day component above 31
    #[error("invalid day {0}")]
    InvalidDay(u32),
    /// Month component above 12 (months are 1-based)
    #[error("invalid month {0}")]
    InvalidMonth(u32),
    /// Components are in range but the calendar has no such day (e.g. 31/02)
    #[error("{day:02}/{month:02}/{year:04} is not a calendar date")]
    NonexistentDate { day: u32, month: u32, year: i32 },
    /// Year lies before the year of the reference date
    #[error("year {year} is before the current year {current}")]
    YearInPast { year: i32, current: i32 },
}

/// Error returned by [`DiagnosticsParser::parse`](crate::parsing::DiagnosticsParser::parse)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),
    /// A date literal failed strict validation
    #[error("invalid date '{literal}' at {line}:{column}: {source}")]
    InvalidDate {
        line: usize,
        column: usize,
        literal: String,
        #[source]
        source: DateError,
    },
}
