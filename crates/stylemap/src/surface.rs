//! The boundary to the text editing surface.
//!
//! The engine never owns document content. It reads snapshots through
//! [`TextSurface`] and proposes edits as [`EditInstruction`]s. Ranges are byte
//! offsets into the current text.
//!
//! [`TextBuffer`](crate::buffer::TextBuffer) is the in-memory implementation.

use std::fmt;

use unicode_segmentation::UnicodeSegmentation;

use crate::error::EditError;
use crate::planner::EditInstruction;

/// A half-open byte range `[start, end)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// An empty range at `offset`, i.e. a caret.
    pub fn caret(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// True when both ranges share at least one position. Ranges that only
    /// touch (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &TextRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A 1-based line and column. Columns count grapheme clusters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Converts a byte offset in `text` into a line/column position.
    ///
    /// Offsets past the end clamp to the end of the text.
    pub fn of(text: &str, offset: usize) -> Self {
        let mut offset = offset.min(text.len());
        while !text.is_char_boundary(offset) {
            offset -= 1;
        }
        let before = &text[..offset];
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        Self {
            line: before.matches('\n').count() + 1,
            column: before[line_start..].graphemes(true).count() + 1,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Operations the engine needs from the document it works on.
pub trait TextSurface {
    /// Current full document content.
    fn text(&self) -> &str;

    /// Replaces the whole document. Resets the selection to the start.
    fn set_text(&mut self, text: &str);

    /// Applies a batch of replacements atomically.
    ///
    /// Fails without modifying anything if any range is invalid or two
    /// ranges overlap.
    fn apply_edits(&mut self, edits: &[EditInstruction]) -> Result<(), EditError>;

    /// All non-overlapping occurrences of `literal`, in document order.
    fn find_occurrences(&self, literal: &str) -> Vec<TextRange>;

    fn selection(&self) -> TextRange;

    fn set_selection(&mut self, range: TextRange);

    /// Scrolls `range` into view.
    fn reveal_range(&mut self, range: TextRange);

    /// The full line containing `offset`, without its line terminator.
    fn line_at(&self, offset: usize) -> &str {
        let text = self.text();
        let mut offset = offset.min(text.len());
        while !text.is_char_boundary(offset) {
            offset -= 1;
        }
        let start = text[..offset].rfind('\n').map_or(0, |i| i + 1);
        let end = text[offset..].find('\n').map_or(text.len(), |i| offset + i);
        text[start..end].trim_end_matches('\r')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_ranges_do_not_overlap() {
        let a = TextRange::new(0, 5);
        assert!(!a.overlaps(&TextRange::new(5, 9)));
        assert!(a.overlaps(&TextRange::new(4, 9)));
        assert!(a.overlaps(&TextRange::new(1, 2)));
        assert!(a.overlaps(&a));
    }

    #[test]
    fn position_counts_lines_and_graphemes() {
        let text = "a {\n  é: x;\n}";
        assert_eq!(Position::of(text, 0), Position { line: 1, column: 1 });
        let x = text.find('x').unwrap();
        assert_eq!(Position::of(text, x), Position { line: 2, column: 6 });
        assert_eq!(Position::of(text, 999).line, 3);
    }
}
