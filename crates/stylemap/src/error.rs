//! Error types for applying edits to a text surface.
//!
//! The scanning and mapping functions are total and never fail. The only
//! fallible step is handing a batch of replacements to a
//! [`TextSurface`](crate::surface::TextSurface), which rejects the whole batch
//! if any range is unusable.

use thiserror::Error;

use crate::surface::TextRange;

/// Errors raised when a batch of edits cannot be applied.
///
/// # Examples
///
/// ```rust
/// use stylemap::buffer::TextBuffer;
/// use stylemap::planner::EditInstruction;
/// use stylemap::surface::{TextRange, TextSurface};
///
/// let mut buffer = TextBuffer::new("color: red;");
/// let edits = [
///     EditInstruction::new(TextRange::new(0, 11), "color: blue;"),
///     EditInstruction::new(TextRange::new(7, 10), "green"),
/// ];
/// assert!(buffer.apply_edits(&edits).is_err());
/// assert_eq!(buffer.text(), "color: red;");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// Two edits in the same batch share at least one position.
    #[error("Overlapping ranges are not allowed: {first} and {second}")]
    Overlapping { first: TextRange, second: TextRange },

    /// A range ends past the end of the document or starts after it ends.
    #[error("Range {range} is outside the document (length {len})")]
    OutOfBounds { range: TextRange, len: usize },

    /// A range endpoint falls inside a multi-byte character.
    #[error("Offset {offset} is not on a character boundary")]
    NotCharBoundary { offset: usize },
}
