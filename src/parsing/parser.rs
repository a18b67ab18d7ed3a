use super::date_util::{decode_date, diff_in_days, local_date_today};
use super::token::Token;
use super::tokenizer::Tokenizer;
use super::visitor::{NoopVisitor, ParserVisitor, Section};
use crate::diagnostic::{Diagnostic, Range, Severity};
use crate::error::ParseError;
use crate::settings::{DateValidation, DaySettings};
use chrono::NaiveDate;

/// Constructor options for [`DiagnosticsParser`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Severity thresholds, `{2, 4, 7}` when absent
    pub day_settings: Option<DaySettings>,
    /// Pin "today" for the lifetime of the parser
    pub today: Option<NaiveDate>,
    pub validation: DateValidation,
}

/// Turns the dates of a checklist document into deadline diagnostics
///
/// Dates in `dd/mm/yyyy` literals are assumed to have their month starting at 1.
/// Each [`parse`](Self::parse) call is one session: the tokenizer is reset and,
/// unless "today" was pinned, the reference date is read again from the local
/// clock.
#[derive(Debug)]
pub struct DiagnosticsParser {
    settings: DaySettings,
    today: NaiveDate,
    is_using_controlled_date: bool,
    validation: DateValidation,
    tokenizer: Tokenizer,
}

impl Default for DiagnosticsParser {
    fn default() -> Self {
        Self::new(ParserOptions::default())
    }
}

impl DiagnosticsParser {
    pub fn new(options: ParserOptions) -> Self {
        Self {
            settings: options.day_settings.unwrap_or_default(),
            today: options.today.unwrap_or_else(local_date_today),
            is_using_controlled_date: options.today.is_some(),
            validation: options.validation,
            tokenizer: Tokenizer::new(),
        }
    }

    /// Reference date used by the last (or next, if pinned) session
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn settings(&self) -> &DaySettings {
        &self.settings
    }

    /// Parse a document and return its diagnostics
    ///
    /// # Errors
    /// Only in strict mode, for the first date literal that fails validation.
    pub fn parse(&mut self, text: &str) -> Result<Vec<Diagnostic>, ParseError> {
        self.parse_with_visitor(text, &mut NoopVisitor)
    }

    /// Parse a document, reporting session and date events to `visitor`
    ///
    /// Diagnostics are only handed back once the whole document was scanned, so
    /// anything the visitor builds is complete by the time the caller sees them.
    pub fn parse_with_visitor(
        &mut self,
        text: &str,
        visitor: &mut dyn ParserVisitor,
    ) -> Result<Vec<Diagnostic>, ParseError> {
        self.tokenizer.reset();
        if !self.is_using_controlled_date {
            self.today = local_date_today();
        }
        let today = self.today;
        let settings = self.settings;
        let validation = self.validation;

        visitor.on_parse_begin();

        let mut diagnostics = Vec::new();
        // Date on the line being scanned, with the column where its literal ends
        let mut pending: Option<(Section, usize)> = None;

        let mut tokens = self.tokenizer.tokenize(text)?;
        while let Some(token) = tokens.next() {
            match token {
                Token::Date => {
                    let literal = tokens.text();
                    let line = tokens.line();
                    let end = tokens.line_offset();
                    let start = end - literal.chars().count();

                    let date = match decode_date(literal, today, validation) {
                        Ok(date) => date,
                        Err(source) if validation == DateValidation::strict => {
                            return Err(ParseError::InvalidDate {
                                line,
                                column: start,
                                literal: literal.to_string(),
                                source,
                            });
                        }
                        Err(e) => {
                            tracing::warn!(
                                "ignoring date '{}' at {}:{}: {}",
                                literal,
                                line,
                                start,
                                e
                            );
                            continue;
                        }
                    };
                    tracing::debug!("date {} at {}:{}", date, line, start);

                    if let Some((severity, message)) =
                        check_diagnostic_severity(date, today, &settings)
                    {
                        diagnostics.push(Diagnostic {
                            range: Range::new(line, start, line, end),
                            message,
                            severity,
                        });
                    }
                    pending = Some((Section { date, line }, end));
                }
                Token::NewLine => {
                    if let Some((section, line_end)) = pending.take() {
                        visitor.on_new_line_at_date(&section, section.line, line_end);
                    }
                }
                Token::TodoItem | Token::SectionEnd | Token::LineEnd => {}
            }
        }
        if let Some((section, line_end)) = pending.take() {
            visitor.on_end_line_at_date(&section, section.line, line_end);
        }

        tracing::debug!(
            "parsed {} line(s) against {}: {} diagnostic(s)",
            text.lines().count(),
            today,
            diagnostics.len()
        );
        Ok(diagnostics)
    }
}

/// Map the distance to a deadline onto a severity and message
///
/// Thresholds are checked from most to least urgent and the first match wins.
/// Returns `None` when the deadline is far enough away.
pub fn check_diagnostic_severity(
    date: NaiveDate,
    today: NaiveDate,
    settings: &DaySettings,
) -> Option<(Severity, String)> {
    let diff_days = diff_in_days(date, today);
    if diff_days < 0 {
        return Some((Severity::Error, "This is overdue!".to_string()));
    }
    if diff_days < settings.critical {
        return Some((
            Severity::Warning,
            format!("Deadline is only like {} days away!", diff_days),
        ));
    }
    if diff_days < settings.deadline_approaching {
        return Some((
            Severity::Information,
            "The deadline is approaching.".to_string(),
        ));
    }
    if diff_days < settings.should_probably_begin_working_on_this {
        return Some((
            Severity::Hint,
            "If you haven't already, start working on this.".to_string(),
        ));
    }
    None
}
