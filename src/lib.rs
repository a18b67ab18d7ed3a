//! Deadline diagnostics for markdown checklists
//!
//! This library scans plain-text documents that use `- [ ]` / `+ [ ]` checklist
//! items grouped under `dd/mm/yyyy` deadline dates, and grades every date
//! against a reference "today": overdue, critical, approaching or upcoming.
//!
//! # Architecture
//!
//! The library is layered leaves-first:
//! - **Tokenizer**: `parsing::Tokenizer` - Lazy, position-tracking token stream
//! - **Parser**: `parsing::DiagnosticsParser` - Date decoding and severity grading
//! - **Collaborators**: `decorations` - Per-line annotations built from parser hooks
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use deadline_diagnostics::{DiagnosticsParser, ParserOptions, Severity};
//!
//! let mut parser = DiagnosticsParser::new(ParserOptions {
//!     today: NaiveDate::from_ymd_opt(2020, 1, 5),
//!     ..Default::default()
//! });
//! let diagnostics = parser.parse("- [ ] Hello, world!\n01/01/2020\n").unwrap();
//! assert_eq!(diagnostics[0].severity, Severity::Error);
//! ```

pub mod decorations;
pub mod diagnostic;
pub mod error;
pub mod formatting;
pub mod parsing;
pub mod settings;

// Re-export commonly used types
pub use decorations::{Decoration, DecorationVisitor};
pub use diagnostic::{Diagnostic, Position, Range, Severity};
pub use error::{DateError, ParseError, TokenizerError};
pub use parsing::{DiagnosticsParser, ParserOptions, ParserVisitor, Section, Token, Tokenizer};
pub use settings::{Config, DateValidation, DaySettings};
