use chrono::NaiveDate;

/// The deadline that opens a section of checklist items
///
/// Sections themselves are tracked by whoever listens to the parser; this is
/// only the part the parser knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// Decoded deadline
    pub date: NaiveDate,
    /// 0-based line holding the date literal
    pub line: usize,
}

/// Hooks fired while a document is parsed
///
/// All methods default to doing nothing. Date hooks fire once per decoded date,
/// whatever its severity, with the column where the date literal ends.
pub trait ParserVisitor {
    /// A parse session starts; per-line state from the last session is stale
    fn on_parse_begin(&mut self) {}

    /// The line holding a date is followed by another line
    fn on_new_line_at_date(&mut self, _section: &Section, _line: usize, _line_end: usize) {}

    /// The line holding a date is the last line of the document
    fn on_end_line_at_date(&mut self, _section: &Section, _line: usize, _line_end: usize) {}
}

/// Visitor that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopVisitor;

impl ParserVisitor for NoopVisitor {}
