//! Integration tests for the workbench session.
//!
//! Walks the same flow a user does: load a stylesheet, inspect findings,
//! select one, inject a variable by hand, then auto-refactor the rest.

use stylemap::buffer::TextBuffer;
use stylemap::{Category, SystemVariable, TextRange, TextSurface};
use workbench::{ContextKind, Session};

const BTN_CSS: &str = ".btn {\n  background: #ffffff;\n  color: #6c757d;\n  border: 1px solid #dee2e6;\n}\n\n.btn:hover {\n  background: rgba(0,0,0,0.05);\n  color: #212529;\n}";

fn session() -> Session<TextBuffer> {
    let mut session = Session::new(TextBuffer::default());
    session.load_source(BTN_CSS);
    session
}

// ============================================================================
// FINDINGS
// ============================================================================

#[test]
fn test_load_identifies_five_findings() {
    let session = session();
    assert_eq!(session.identified(), 5);

    let rows: Vec<(String, Option<SystemVariable>)> = session
        .findings()
        .map(|f| (format!("{} {}", f.selector, f.property), f.suggestion))
        .collect();
    assert_eq!(
        rows,
        vec![
            (".btn background".to_string(), Some(SystemVariable::BgTertiary)),
            (".btn color".to_string(), Some(SystemVariable::TextMuted)),
            (".btn border".to_string(), Some(SystemVariable::BorderColor)),
            (".btn:hover background".to_string(), Some(SystemVariable::HoverBg)),
            (".btn:hover color".to_string(), Some(SystemVariable::TextColor)),
        ]
    );
}

#[test]
fn test_findings_report_line_and_column() {
    let session = session();
    let first = session.findings().next().unwrap();
    assert_eq!((first.position.line, first.position.column), (2, 3));
    let last = session.findings().last().unwrap();
    assert_eq!(last.position.line, 9);
}

#[test]
fn test_rescan_is_repeatable() {
    let mut session = session();
    let before = session.matches().to_vec();
    assert_eq!(session.rescan(), before.as_slice());
}

// ============================================================================
// SELECTION
// ============================================================================

#[test]
fn test_select_match_selects_and_reveals() {
    let mut session = session();
    let range = session.select_match(2).unwrap();
    assert_eq!(&BTN_CSS[range.start..range.end], "border: 1px solid #dee2e6;");
    assert_eq!(session.surface().selection(), range);
    assert_eq!(session.surface().revealed(), Some(range));
    assert_eq!(session.highlighted(), Some(range));
    assert_eq!(session.select_match(99), None);
}

#[test]
fn test_selection_context_follows_line() {
    let mut session = session();
    let value = BTN_CSS.find("#dee2e6").unwrap();
    session.set_selection(TextRange::new(value, value + 7));

    let ctx = session.selection_context().unwrap();
    assert_eq!(ctx.kind, ContextKind::Category(Category::Border));
    assert_eq!(ctx.line, "  border: 1px solid #dee2e6;");
    assert_eq!(ctx.suggestions, Category::Border.variables());
}

#[test]
fn test_empty_selection_has_no_context() {
    let mut session = session();
    session.set_selection(TextRange::caret(3));
    assert_eq!(session.selection_context(), None);
}

// ============================================================================
// EDITING
// ============================================================================

#[test]
fn test_inject_replaces_selection_and_rescans() {
    let mut session = session();
    let value = BTN_CSS.find("#6c757d").unwrap();
    session.set_selection(TextRange::new(value, value + 7));

    assert!(session.apply_var(SystemVariable::TextMuted).unwrap());
    assert!(session.text().contains("color: var(--text-muted);"));
    assert_eq!(session.identified(), 4);
}

#[test]
fn test_apply_var_without_selection_is_ignored() {
    let mut session = session();
    session.set_selection(TextRange::caret(0));
    assert!(!session.apply_var(SystemVariable::TextMuted).unwrap());
    assert_eq!(session.text(), BTN_CSS);
}

#[test]
fn test_auto_refactor_converts_everything() {
    let mut session = session();
    let outcome = session.auto_refactor().unwrap();
    assert_eq!((outcome.applied, outcome.before, outcome.after), (5, 5, 0));
    assert_eq!(
        session.text(),
        ".btn {\n  background: var(--bg-tertiary);\n  color: var(--text-muted);\n  border: var(--border-color);\n}\n\n.btn:hover {\n  background: var(--hover-bg);\n  color: var(--text-color);\n}"
    );

    let again = session.auto_refactor().unwrap();
    assert_eq!(again.applied, 0);
}

#[test]
fn test_auto_refactor_on_empty_document_is_a_no_op() {
    let mut session = Session::new(TextBuffer::default());
    let outcome = session.auto_refactor().unwrap();
    assert_eq!(outcome.applied, 0);
    assert_eq!(session.text(), "");
}

#[test]
fn test_duplicate_declarations_across_rules() {
    let css = ".card { border: 1px solid #eee; }\n.card:hover { border: 1px solid #eee; }";
    let mut session = Session::new(TextBuffer::new(css));
    assert_eq!(session.auto_refactor().unwrap().applied, 2);
    assert_eq!(
        session.text(),
        ".card { border: var(--border-color); }\n.card:hover { border: var(--border-color-hover); }"
    );
}
