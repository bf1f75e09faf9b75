//! In-memory [`TextSurface`].

use crate::error::EditError;
use crate::planner::EditInstruction;
use crate::surface::{TextRange, TextSurface};

/// A plain string document with a selection and a reveal marker.
#[derive(Clone, Debug, Default)]
pub struct TextBuffer {
    text: String,
    selection: TextRange,
    revealed: Option<TextRange>,
}

impl TextBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// The range most recently passed to [`TextSurface::reveal_range`].
    pub fn revealed(&self) -> Option<TextRange> {
        self.revealed
    }

    pub fn into_text(self) -> String {
        self.text
    }

    fn check(&self, range: TextRange) -> Result<(), EditError> {
        if range.start > range.end || range.end > self.text.len() {
            return Err(EditError::OutOfBounds {
                range,
                len: self.text.len(),
            });
        }
        for offset in [range.start, range.end] {
            if !self.text.is_char_boundary(offset) {
                return Err(EditError::NotCharBoundary { offset });
            }
        }
        Ok(())
    }

    fn clamp(&self, range: TextRange) -> TextRange {
        let fit = |mut offset: usize| {
            offset = offset.min(self.text.len());
            while !self.text.is_char_boundary(offset) {
                offset -= 1;
            }
            offset
        };
        let start = fit(range.start);
        TextRange::new(start, fit(range.end).max(start))
    }
}

impl TextSurface for TextBuffer {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.selection = TextRange::default();
        self.revealed = None;
    }

    fn apply_edits(&mut self, edits: &[EditInstruction]) -> Result<(), EditError> {
        if edits.is_empty() {
            return Ok(());
        }
        for edit in edits {
            self.check(edit.range)?;
        }

        let mut ordered: Vec<&EditInstruction> = edits.iter().collect();
        ordered.sort_by_key(|e| (e.range.start, e.range.end));
        for pair in ordered.windows(2) {
            let (a, b) = (pair[0].range, pair[1].range);
            if a.overlaps(&b) || a == b {
                return Err(EditError::Overlapping { first: a, second: b });
            }
        }

        // Splice back to front so earlier offsets stay valid.
        for edit in ordered.iter().rev() {
            self.text.replace_range(edit.range.start..edit.range.end, &edit.text);
        }

        // Caret goes to the end of the last replacement in document order.
        let shift: isize = ordered
            .iter()
            .map(|e| e.text.len() as isize - e.range.len() as isize)
            .sum();
        let last = ordered[ordered.len() - 1];
        let caret = (last.range.end as isize + shift).max(0) as usize;
        self.selection = TextRange::caret(caret.min(self.text.len()));
        Ok(())
    }

    fn find_occurrences(&self, literal: &str) -> Vec<TextRange> {
        if literal.is_empty() {
            return Vec::new();
        }
        self.text
            .match_indices(literal)
            .map(|(start, found)| TextRange::new(start, start + found.len()))
            .collect()
    }

    fn selection(&self) -> TextRange {
        self.selection
    }

    fn set_selection(&mut self, range: TextRange) {
        self.selection = self.clamp(range);
    }

    fn reveal_range(&mut self, range: TextRange) {
        self.revealed = Some(self.clamp(range));
    }
}
