//! Tokenizing and parsing of checklist documents
//!
//! This module contains the scanner and the deadline parser built on top of it.
//! It is split into submodules:
//! - `token`: Lexical categories
//! - `tokenizer`: Line/column tracking scanner producing a lazy token stream
//! - `date_util`: Decoding of `dd/mm/yyyy` literals and day arithmetic
//! - `visitor`: Hooks fired while a document is parsed
//! - `parser`: Severity grading of dates against a reference date

pub mod date_util;
mod parser;
mod token;
mod tokenizer;
mod visitor;

// Re-export all public types
pub use date_util::local_date_today;
pub use parser::{DiagnosticsParser, ParserOptions, check_diagnostic_severity};
pub use token::Token;
pub use tokenizer::{SECTION_END, Tokenizer, Tokens};
pub use visitor::{NoopVisitor, ParserVisitor, Section};
