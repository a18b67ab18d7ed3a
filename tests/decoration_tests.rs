//! Decoration map built from parser hooks
mod common;

use common::{pinned_parser, ymd};
use deadline_diagnostics::DecorationVisitor;

#[test]
fn test_decorations_follow_date_lines() {
    let text = "\
01/01/2020
- [ ] Hello, world!
<!-- end section -->
08/01/2020
- [ ] later";
    let mut parser = pinned_parser(ymd(2020, 1, 5));
    let mut visitor = DecorationVisitor::new(Some(ymd(2020, 1, 5)));
    let diagnostics = parser.parse_with_visitor(text, &mut visitor).unwrap();
    assert_eq!(diagnostics.len(), 2);

    let decorations: Vec<(usize, usize, &str)> = visitor
        .decorations()
        .map(|d| (d.line, d.column, d.text.as_str()))
        .collect();
    assert_eq!(
        decorations,
        vec![
            (0, 10, "(Wednesday) Days past deadline: 4"),
            (3, 10, "(Wednesday) Remaining days: 3"),
        ]
    );
}

// Dates far away get no diagnostic but are still annotated
#[test]
fn test_decoration_without_diagnostic() {
    let mut parser = pinned_parser(ymd(2020, 1, 5));
    let mut visitor = DecorationVisitor::new(Some(ymd(2020, 1, 5)));
    let diagnostics = parser.parse_with_visitor("- [ ] x\n05/02/2020", &mut visitor).unwrap();
    assert!(diagnostics.is_empty());
    assert_eq!(
        visitor.get(1).unwrap().text,
        "(Wednesday) Remaining days: 31"
    );
}

// Every session starts from an empty map
#[test]
fn test_session_rebuilds_map() {
    let mut parser = pinned_parser(ymd(2020, 1, 5));
    let mut visitor = DecorationVisitor::new(Some(ymd(2020, 1, 5)));
    parser
        .parse_with_visitor("a\nb\n05/01/2020\n", &mut visitor)
        .unwrap();
    assert!(visitor.get(2).is_some());

    parser
        .parse_with_visitor("05/01/2020\n", &mut visitor)
        .unwrap();
    assert_eq!(visitor.len(), 1);
    assert!(visitor.get(2).is_none());
    assert_eq!(visitor.get(0).unwrap().text, "(Sunday) Due today");
}
