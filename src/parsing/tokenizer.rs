use super::token::Token;
use crate::error::TokenizerError;
use regex::Regex;
use std::iter::FusedIterator;
use std::sync::LazyLock;

/// Sentinel closing a section of checklist items
pub const SECTION_END: &str = "<!-- end section -->";

/// Checklist markers recognized at the start of a line
const TODO_MARKERS: [&str; 2] = ["- [ ]", "+ [ ]"];

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,2}/[0-9]{1,2}/[0-9]{4}").expect("valid date pattern"));

/// Single-pass scanner over checklist documents
///
/// The tokenizer owns the cursor state (line, column and the literal of the last
/// token). [`tokenize`](Self::tokenize) borrows it and hands out a lazy [`Tokens`]
/// iterator; dropping the iterator early simply stops the scan. The cursor keeps
/// its last position afterwards, so a tokenizer must be [`reset`](Self::reset)
/// before it scans another text.
#[derive(Debug, Default)]
pub struct Tokenizer {
    line: usize,
    line_offset: usize,
    text: String,
    /// Byte index of the next unread character
    pos: usize,
    /// Byte index where the current line starts
    line_start: usize,
    /// `LineEnd` was already emitted for the current line
    line_ended: bool,
    /// Something other than whitespace was consumed on the current line
    line_has_text: bool,
    used: bool,
    done: bool,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the cursor back to line 0, column 0
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Start scanning `source`
    ///
    /// # Errors
    /// [`TokenizerError::NotReset`] if this tokenizer already scanned a text and
    /// was not reset since.
    pub fn tokenize<'a>(&'a mut self, source: &'a str) -> Result<Tokens<'a>, TokenizerError> {
        if self.used {
            return Err(TokenizerError::NotReset);
        }
        self.used = true;
        Ok(Tokens {
            tokenizer: self,
            source,
        })
    }

    /// Literal matched by the most recent token (empty for line tokens)
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 0-based line of the cursor
    pub fn line(&self) -> usize {
        self.line
    }

    /// 0-based column of the cursor, one past the last consumed character
    pub fn line_offset(&self) -> usize {
        self.line_offset
    }

    fn emit(&mut self, literal: &str, token: Token) -> Token {
        self.line_has_text = true;
        self.text.clear();
        self.text.push_str(literal);
        self.pos += literal.len();
        self.line_offset += literal.chars().count();
        token
    }

    fn emit_empty(&mut self, token: Token) -> Token {
        self.text.clear();
        token
    }

    fn skip(&mut self, c: char) {
        if !c.is_whitespace() {
            self.line_has_text = true;
        }
        self.pos += c.len_utf8();
        self.line_offset += 1;
    }

    fn break_line(&mut self, width: usize) {
        self.pos += width;
        self.line += 1;
        self.line_offset = 0;
        self.line_start = self.pos;
        self.line_ended = false;
        self.line_has_text = false;
    }

    fn match_todo<'s>(&self, source: &'s str) -> Option<&'s str> {
        if self.line_has_text {
            return None;
        }
        let rest = &source[self.pos..];
        TODO_MARKERS
            .iter()
            .find(|marker| rest.starts_with(**marker))
            .map(|marker| &rest[..marker.len()])
    }

    fn match_date<'s>(&self, source: &'s str) -> Option<&'s str> {
        DATE_PATTERN
            .find(&source[self.pos..])
            .map(|found| found.as_str())
    }
}

/// Lazy token stream over one text, borrowed from a [`Tokenizer`]
///
/// The cursor accessors mirror the ones on [`Tokenizer`] so callers can read
/// positions while iterating.
#[derive(Debug)]
pub struct Tokens<'a> {
    tokenizer: &'a mut Tokenizer,
    source: &'a str,
}

impl Tokens<'_> {
    pub fn text(&self) -> &str {
        self.tokenizer.text()
    }

    pub fn line(&self) -> usize {
        self.tokenizer.line()
    }

    pub fn line_offset(&self) -> usize {
        self.tokenizer.line_offset()
    }
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let source = self.source;
        let cursor = &mut *self.tokenizer;

        while !cursor.done {
            let rest = &source[cursor.pos..];
            let Some(c) = rest.chars().next() else {
                cursor.done = true;
                // A line only exists if something follows the previous break
                if cursor.line_start < source.len() && !cursor.line_ended {
                    cursor.line_ended = true;
                    return Some(cursor.emit_empty(Token::LineEnd));
                }
                return None;
            };

            let break_width = if c == '\n' {
                Some(1)
            } else if rest.starts_with("\r\n") {
                Some(2)
            } else {
                None
            };
            if let Some(width) = break_width {
                if !cursor.line_ended {
                    cursor.line_ended = true;
                    return Some(cursor.emit_empty(Token::LineEnd));
                }
                cursor.break_line(width);
                if cursor.pos < source.len() {
                    return Some(cursor.emit_empty(Token::NewLine));
                }
                continue;
            }

            match c {
                '-' | '+' => {
                    if let Some(marker) = cursor.match_todo(source) {
                        return Some(cursor.emit(marker, Token::TodoItem));
                    }
                }
                '<' if rest.starts_with(SECTION_END) => {
                    return Some(cursor.emit(SECTION_END, Token::SectionEnd));
                }
                '0'..='9' => {
                    if let Some(date) = cursor.match_date(source) {
                        return Some(cursor.emit(date, Token::Date));
                    }
                }
                _ => {}
            }
            cursor.skip(c);
        }

        None
    }
}

impl FusedIterator for Tokens<'_> {}
