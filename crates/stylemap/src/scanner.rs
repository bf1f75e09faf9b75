//! Declaration scanner.
//!
//! The scanner walks raw CSS text left to right looking for declarations of
//! the properties the resolver knows how to map:
//!
//! ```css
//! color | background | background-color | border | border-color |
//! border-top | border-bottom | border-left | border-right | box-shadow
//! ```
//!
//! followed by `:`, a value and a terminating `;`. There is no rule tree: the
//! enclosing selector of each declaration is recovered by looking backward for
//! the nearest unmatched `{` and then the `}` that precedes it.
//!
//! ## Limitations
//!
//! - Nested rules (CSS nesting, `@media` blocks) are not supported. The
//!   selector reported for a declaration inside a nested block is whatever
//!   text sits between the previous `}` and the innermost open `{`.
//! - Comments are scanned like any other text.
//!
//! ## Example
//!
//! ```rust
//! use stylemap::scanner::scan;
//!
//! let matches = scan(".btn { color: #333; background: var(--bg-color); }");
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].property, "color");
//! assert_eq!(matches[0].selector, ".btn");
//! ```

use std::collections::HashMap;

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag_no_case, take_till1},
    character::complete::{char, multispace0},
    sequence::tuple,
};

use crate::catalog::is_system_variable;
use crate::role::{Role, classify};
use crate::state::InteractiveState;
use crate::surface::TextRange;

/// One replaceable declaration found by [`scan`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match {
    /// Lowercased property name.
    pub property: String,
    /// The value as written, trimmed.
    pub raw_value: String,
    /// Selector text of the enclosing rule, including pseudo-state suffixes.
    pub selector: String,
    /// The full declaration text as it appears in the source (`color: #333;`).
    pub declaration: String,
    /// Byte range of `declaration` in the scanned text.
    pub span: TextRange,
    /// How many identical `declaration` texts were emitted before this one.
    pub occurrence_index: usize,
}

impl Match {
    pub fn role(&self) -> Role {
        classify(&self.selector)
    }

    pub fn state(&self) -> InteractiveState {
        InteractiveState::from_selector(&self.selector)
    }
}

/// Parses a property name from the recognized set. Longer names come first so
/// `border-color` is not cut short at `border`.
fn property_name(input: &str) -> IResult<&str, &str> {
    alt((
        tag_no_case("border-bottom"),
        tag_no_case("border-top"),
        tag_no_case("border-left"),
        tag_no_case("border-right"),
        tag_no_case("border-color"),
        tag_no_case("border"),
        tag_no_case("background-color"),
        tag_no_case("background"),
        tag_no_case("box-shadow"),
        tag_no_case("color"),
    ))(input)
}

/// Parses `property : value ;` and returns the property and the raw value.
fn declaration(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, property) = property_name(input)?;
    let (input, _) = tuple((multispace0, char(':'), multispace0))(input)?;
    let (input, value) = take_till1(|c| matches!(c, ';' | '{' | '}'))(input)?;
    let (input, _) = char(';')(input)?;
    Ok((input, (property, value)))
}

/// A property name must not continue an identifier, so `--text-color` and
/// `border-top-color` never match their `color` suffix.
fn at_name_boundary(text: &str, offset: usize) -> bool {
    match text[..offset].chars().next_back() {
        Some(prev) => !(prev.is_alphanumeric() || prev == '-' || prev == '_'),
        None => true,
    }
}

/// Returns the end offset of a recognized declaration starting at `offset`.
fn declaration_at(text: &str, offset: usize) -> Option<(usize, &str, &str)> {
    let first = *text.as_bytes().get(offset)?;
    if !matches!(first.to_ascii_lowercase(), b'b' | b'c') || !at_name_boundary(text, offset) {
        return None;
    }
    let rest = &text[offset..];
    let (remaining, (property, value)) = declaration(rest).ok()?;
    Some((text.len() - remaining.len(), property, value))
}

/// Walks `css` left to right and yields every recognized declaration as
/// `(start, end, property, value)`, converted ones included. A declaration
/// resumes the walk at its end, so text swallowed by a value is never
/// reported on its own.
fn declarations(css: &str) -> impl Iterator<Item = (usize, usize, &str, &str)> + '_ {
    let mut offset = 0;
    std::iter::from_fn(move || {
        while offset < css.len() {
            if let Some((end, property, value)) = declaration_at(css, offset) {
                let start = offset;
                offset = end;
                return Some((start, end, property, value));
            }
            offset += css[offset..].chars().next().map_or(1, char::len_utf8);
        }
        None
    })
}

/// Start offsets of every declaration [`scan`] walks over, in source order.
///
/// Used to filter literal text searches so they agree with [`scan`] about
/// which occurrences count.
pub fn declaration_starts(css: &str) -> Vec<usize> {
    declarations(css).map(|(start, ..)| start).collect()
}

/// Finds the selector of the rule that encloses `offset`.
///
/// Walks backward to the nearest `{` that is not closed before `offset`, then
/// to the `}` before it (or the start of the text). Returns an empty string
/// for declarations outside any block.
pub fn enclosing_selector(text: &str, offset: usize) -> &str {
    let before = &text[..offset];
    let mut depth = 0usize;
    let mut open = None;
    for (i, c) in before.char_indices().rev() {
        match c {
            '}' => depth += 1,
            '{' if depth == 0 => {
                open = Some(i);
                break;
            }
            '{' => depth -= 1,
            _ => {}
        }
    }
    let Some(open) = open else {
        return "";
    };
    let start = before[..open].rfind('}').map_or(0, |i| i + 1);
    before[start..open].trim()
}

/// Scans `css` for replaceable declarations, in source order.
///
/// Declarations whose value already references a catalog variable are
/// skipped. The scan holds no state between calls, so scanning unchanged text
/// twice yields identical results.
pub fn scan(css: &str) -> Vec<Match> {
    let mut matches = Vec::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut converted = 0usize;

    for (start, end, property, value) in declarations(css) {
        if is_system_variable(value) {
            converted += 1;
            continue;
        }
        let literal = &css[start..end];
        let count = seen.entry(literal).or_insert(0);
        matches.push(Match {
            property: property.to_ascii_lowercase(),
            raw_value: value.trim().to_string(),
            selector: enclosing_selector(css, start).to_string(),
            declaration: literal.to_string(),
            span: TextRange::new(start, end),
            occurrence_index: *count,
        });
        *count += 1;
    }

    log::debug!(
        "scan: {} candidate(s), {} already converted",
        matches.len(),
        converted
    );
    matches
}
