//! Common test utilities for integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use deadline_diagnostics::{DiagnosticsParser, ParserOptions, Token, Tokenizer};

/// Shorthand for a calendar date
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Collect every token of `text` with a fresh tokenizer
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new();
    tokenizer.tokenize(text).unwrap().collect()
}

/// Collect every token of `text` with its literal and end position
pub fn tokenize_with_positions(text: &str) -> Vec<(Token, String, usize, usize)> {
    let mut tokenizer = Tokenizer::new();
    let mut tokens = tokenizer.tokenize(text).unwrap();
    let mut result = Vec::new();
    while let Some(token) = tokens.next() {
        result.push((
            token,
            tokens.text().to_string(),
            tokens.line(),
            tokens.line_offset(),
        ));
    }
    result
}

/// Create a parser with "today" pinned and default thresholds
pub fn pinned_parser(today: NaiveDate) -> DiagnosticsParser {
    DiagnosticsParser::new(ParserOptions {
        today: Some(today),
        ..Default::default()
    })
}
