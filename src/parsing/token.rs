/// Lexical categories produced by the [`Tokenizer`](super::Tokenizer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Checklist marker `- [ ]` or `+ [ ]`
    TodoItem,
    /// `dd/mm/yyyy` literal, day and month may have one digit
    Date,
    /// The `<!-- end section -->` sentinel
    SectionEnd,
    /// A line break was consumed and another line begins
    NewLine,
    /// The current physical line is complete
    LineEnd,
}
