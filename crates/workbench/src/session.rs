//! The editing session.
//!
//! A [`Session`] owns one text surface and the findings of the most recent
//! scan. Every operation that changes the document finishes with a full
//! rescan, so the findings always describe the current text.

use stylemap::scanner::declaration_starts;
use stylemap::{
    EditInstruction, Match, Position, SystemVariable, TextRange, TextSurface, plan, resolve, scan,
};

use crate::context::SelectionContext;
use crate::error::Result;

/// One row of the findings list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Finding<'a> {
    pub index: usize,
    pub selector: &'a str,
    pub property: &'a str,
    pub value: &'a str,
    pub suggestion: Option<SystemVariable>,
    pub position: Position,
}

/// Result of an automatic refactor pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefactorOutcome {
    /// Edits handed to the surface. Zero means nothing was changed.
    pub applied: usize,
    /// Findings before the pass.
    pub before: usize,
    /// Findings remaining after the rescan.
    pub after: usize,
}

pub struct Session<S: TextSurface> {
    surface: S,
    matches: Vec<Match>,
    highlighted: Option<TextRange>,
}

impl<S: TextSurface> Session<S> {
    /// Wraps `surface` and scans whatever it already holds.
    pub fn new(surface: S) -> Self {
        let mut session = Self {
            surface,
            matches: Vec::new(),
            highlighted: None,
        };
        session.rescan();
        session
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Current document content, for copying or export.
    pub fn text(&self) -> &str {
        self.surface.text()
    }

    /// Replaces the document and rescans.
    pub fn load_source(&mut self, source: &str) -> &[Match] {
        self.surface.set_text(source);
        self.rescan()
    }

    /// Discards the previous findings and scans the current text from scratch.
    pub fn rescan(&mut self) -> &[Match] {
        self.matches = scan(self.surface.text());
        self.highlighted = None;
        log::info!("IDENTIFIED: {}", self.matches.len());
        &self.matches
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Number of findings from the last scan.
    pub fn identified(&self) -> usize {
        self.matches.len()
    }

    /// Findings with their suggestion and line/column, in scan order.
    pub fn findings(&self) -> impl Iterator<Item = Finding<'_>> + '_ {
        let text = self.surface.text();
        self.matches.iter().enumerate().map(move |(index, m)| Finding {
            index,
            selector: &m.selector,
            property: &m.property,
            value: &m.raw_value,
            suggestion: resolve(m),
            position: Position::of(text, m.span.start),
        })
    }

    /// The `occurrence`-th place `literal` appears as a declaration.
    ///
    /// Literal hits that the scanner would not treat as a declaration (the
    /// `color: red;` tail of `--link-color: red;`, or text swallowed by the
    /// value of an unterminated declaration) are not counted, so the index
    /// lines up with [`Match::occurrence_index`].
    pub fn locate(&self, literal: &str, occurrence: usize) -> Option<TextRange> {
        let starts = declaration_starts(self.surface.text());
        self.surface
            .find_occurrences(literal)
            .into_iter()
            .filter(|range| starts.binary_search(&range.start).is_ok())
            .nth(occurrence)
    }

    /// Selects and reveals finding `index`. Returns `None` if the index is
    /// out of range or the declaration no longer exists.
    pub fn select_match(&mut self, index: usize) -> Option<TextRange> {
        let m = self.matches.get(index)?;
        let Some(range) = self.locate(&m.declaration, m.occurrence_index) else {
            log::debug!("select: finding {index} vanished");
            return None;
        };
        self.surface.set_selection(range);
        self.surface.reveal_range(range);
        self.highlighted = Some(range);
        Some(range)
    }

    /// Line highlight left by the last [`select_match`](Self::select_match).
    pub fn highlighted(&self) -> Option<TextRange> {
        self.highlighted
    }

    /// Rewrites every finding that has a suggestion, then rescans.
    pub fn auto_refactor(&mut self) -> Result<RefactorOutcome> {
        let before = self.matches.len();
        let edits = plan(&self.matches, resolve, |literal, n| self.locate(literal, n));
        if edits.is_empty() {
            log::debug!("refactor: nothing to apply");
            return Ok(RefactorOutcome {
                applied: 0,
                before,
                after: before,
            });
        }

        self.surface.apply_edits(&edits)?;
        let after = self.rescan().len();
        log::info!("refactor: applied {} edit(s), {} finding(s) left", edits.len(), after);
        Ok(RefactorOutcome {
            applied: edits.len(),
            before,
            after,
        })
    }

    /// Replaces the current selection with `var`'s reference text, then
    /// rescans.
    pub fn inject_at_selection(&mut self, var: SystemVariable) -> Result<()> {
        let selection = self.surface.selection();
        let edit = EditInstruction::new(selection, var.as_str());
        self.surface.apply_edits(std::slice::from_ref(&edit))?;
        self.rescan();
        Ok(())
    }

    /// Injects `var` when something is selected; a bare caret is ignored.
    ///
    /// Returns whether the document changed.
    pub fn apply_var(&mut self, var: SystemVariable) -> Result<bool> {
        if self.surface.selection().is_empty() {
            return Ok(false);
        }
        self.inject_at_selection(var)?;
        Ok(true)
    }

    pub fn set_selection(&mut self, range: TextRange) {
        self.surface.set_selection(range);
    }

    /// Suggestion panel for the current selection, or `None` to hide it.
    pub fn selection_context(&self) -> Option<SelectionContext> {
        let selection = self.surface.selection();
        let text = self.surface.text();
        let selected = text.get(selection.start..selection.end)?;
        SelectionContext::new(selected, self.surface.line_at(selection.start))
    }
}
