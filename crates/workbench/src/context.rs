//! Manual suggestions for the current selection.
//!
//! When the user selects text, the line containing the selection is inspected
//! for a property family and the matching catalog category is offered. This
//! is a simpler path than the role-based resolver: it only looks at the line.

use std::fmt;

use stylemap::{Category, SystemVariable};

/// What kind of value the selected line holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextKind {
    Category(Category),
    General,
}

impl ContextKind {
    /// Classifies a line of CSS.
    ///
    /// The checks run in the order color, background, border, shadow and the
    /// last one that matches wins, so `border-color` is a border line and
    /// `box-shadow` a shadow line.
    pub fn of_line(line: &str) -> Self {
        let mut kind = ContextKind::General;
        for category in Category::ALL {
            if line.contains(category.name()) {
                kind = ContextKind::Category(category);
            }
        }
        kind
    }

    /// Panel header text, e.g. `CONTEXT: BORDER`.
    pub fn label(self) -> String {
        format!("CONTEXT: {}", self.name().to_uppercase())
    }

    pub fn name(self) -> &'static str {
        match self {
            ContextKind::Category(category) => category.name(),
            ContextKind::General => "general",
        }
    }

    /// Variables to offer, in panel order. A general line gets every category
    /// with duplicates removed.
    pub fn suggestions(self) -> Vec<SystemVariable> {
        match self {
            ContextKind::Category(category) => category.variables().to_vec(),
            ContextKind::General => {
                let mut all: Vec<SystemVariable> = Vec::new();
                for var in Category::ALL.iter().flat_map(|c| c.variables()) {
                    if !all.contains(var) {
                        all.push(*var);
                    }
                }
                all
            }
        }
    }
}

impl fmt::Display for ContextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The suggestion panel contents for a selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionContext {
    pub kind: ContextKind,
    pub line: String,
    pub suggestions: Vec<SystemVariable>,
}

impl SelectionContext {
    /// Builds the panel for `selected` text on `line`. Returns `None` when the
    /// selection is empty or only whitespace, which hides the panel.
    pub fn new(selected: &str, line: &str) -> Option<Self> {
        if selected.trim().is_empty() {
            return None;
        }
        let kind = ContextKind::of_line(line);
        Some(Self {
            kind,
            line: line.to_string(),
            suggestions: kind.suggestions(),
        })
    }

    /// Button captions: the variable names without the `var(--…)` wrapper.
    pub fn button_labels(&self) -> Vec<&'static str> {
        self.suggestions.iter().map(|v| v.token_name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_matching_family_wins() {
        assert_eq!(ContextKind::of_line("  color: #333;"), ContextKind::Category(Category::Color));
        assert_eq!(
            ContextKind::of_line("  background-color: #fff;"),
            ContextKind::Category(Category::Background)
        );
        assert_eq!(
            ContextKind::of_line("  border-color: #ddd;"),
            ContextKind::Category(Category::Border)
        );
        assert_eq!(
            ContextKind::of_line("  box-shadow: 0 0 2px;"),
            ContextKind::Category(Category::Shadow)
        );
        assert_eq!(ContextKind::of_line("  margin: 0;"), ContextKind::General);
    }

    #[test]
    fn general_offers_everything_once() {
        let all = ContextKind::General.suggestions();
        let expected: usize = Category::ALL.iter().map(|c| c.variables().len()).sum();
        assert_eq!(all.len(), expected);
        assert_eq!(all[0], SystemVariable::TextColor);
    }

    #[test]
    fn whitespace_selection_hides_panel() {
        assert_eq!(SelectionContext::new("  \n", "color: red;"), None);
    }

    #[test]
    fn labels_and_header() {
        let ctx = SelectionContext::new("#ddd", "border: 1px solid #ddd;").unwrap();
        assert_eq!(ctx.kind.label(), "CONTEXT: BORDER");
        assert_eq!(ctx.button_labels(), vec!["border-color", "border-color-hover"]);
    }
}
