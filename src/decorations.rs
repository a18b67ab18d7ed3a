//! Per-line deadline annotations
//!
//! [`DecorationVisitor`] listens to a parse session and keeps one annotation per
//! date line, e.g. `(Friday) Remaining days: 3`. The map belongs to the visitor
//! and is rebuilt on every session, so stale lines from an earlier parse never
//! survive. Drawing the annotations is left to the caller.

use crate::parsing::date_util::{diff_in_days, weekday_name};
use crate::parsing::{ParserVisitor, Section, local_date_today};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Annotation shown after the date literal of a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    pub line: usize,
    /// Column where the date literal ends
    pub column: usize,
    pub text: String,
}

/// Builds the annotation map for one document
#[derive(Debug, Clone)]
pub struct DecorationVisitor {
    today: Option<NaiveDate>,
    decorations: BTreeMap<usize, Decoration>,
}

impl Default for DecorationVisitor {
    fn default() -> Self {
        Self::new(None)
    }
}

impl DecorationVisitor {
    /// Create a visitor; `today` pins the reference date, the local date is used otherwise
    pub fn new(today: Option<NaiveDate>) -> Self {
        Self {
            today,
            decorations: BTreeMap::new(),
        }
    }

    /// Annotations of the last session, ordered by line
    pub fn decorations(&self) -> impl Iterator<Item = &Decoration> {
        self.decorations.values()
    }

    /// Annotation for a specific line
    pub fn get(&self, line: usize) -> Option<&Decoration> {
        self.decorations.get(&line)
    }

    pub fn len(&self) -> usize {
        self.decorations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decorations.is_empty()
    }

    fn add_decoration(&mut self, section: &Section, line: usize, line_end: usize) {
        let today = self.today.unwrap_or_else(local_date_today);
        // There can only be one date per line, first one wins
        self.decorations.entry(line).or_insert_with(|| Decoration {
            line,
            column: line_end,
            text: decoration_text(section.date, today),
        });
    }
}

impl ParserVisitor for DecorationVisitor {
    fn on_parse_begin(&mut self) {
        self.decorations.clear();
    }

    fn on_new_line_at_date(&mut self, section: &Section, line: usize, line_end: usize) {
        self.add_decoration(section, line, line_end);
    }

    fn on_end_line_at_date(&mut self, section: &Section, line: usize, line_end: usize) {
        self.add_decoration(section, line, line_end);
    }
}

/// Annotation text for a deadline seen from `today`
pub fn decoration_text(date: NaiveDate, today: NaiveDate) -> String {
    let day_name = format!("({}) ", weekday_name(date));
    let diff_days = diff_in_days(date, today);
    if diff_days < 0 {
        format!("{}Days past deadline: {}", day_name, diff_days.abs())
    } else if diff_days == 0 {
        format!("{}Due today", day_name)
    } else {
        format!("{}Remaining days: {}", day_name, diff_days)
    }
}
