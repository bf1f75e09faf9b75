//! Batch edit planning.
//!
//! Turns resolved matches into replacement instructions that a
//! [`TextSurface`](crate::surface::TextSurface) will accept in one call. Edit
//! surfaces reject a batch with overlapping ranges outright, so the planner
//! keeps the first instruction for any contested region and drops the rest.
//! Applying the non-conflicting subset is preferred over failing the batch.

use crate::catalog::SystemVariable;
use crate::scanner::Match;
use crate::surface::TextRange;

/// A single replacement: put `text` where `range` currently is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditInstruction {
    pub range: TextRange,
    pub text: String,
}

impl EditInstruction {
    pub fn new(range: TextRange, text: impl Into<String>) -> Self {
        Self {
            range,
            text: text.into(),
        }
    }

    /// The replacement for a declaration: `<property>: <variable>;`.
    pub fn declaration(range: TextRange, property: &str, var: SystemVariable) -> Self {
        Self::new(range, format!("{property}: {var};"))
    }
}

/// Plans the edits for `matches`.
///
/// - `resolve` picks the variable for a match, or `None` to skip it.
/// - `locate` finds the `occurrence`-th instance of a literal declaration in
///   the current text, or `None` if it no longer exists.
///
/// The result is in scan order and contains no two instructions whose ranges
/// are identical or overlap. An empty result means there is nothing to do.
pub fn plan<R, L>(matches: &[Match], mut resolve: R, mut locate: L) -> Vec<EditInstruction>
where
    R: FnMut(&Match) -> Option<SystemVariable>,
    L: FnMut(&str, usize) -> Option<TextRange>,
{
    let candidates = matches.iter().filter_map(|m| {
        let var = resolve(m)?;
        let range = locate(&m.declaration, m.occurrence_index)?;
        Some(EditInstruction::declaration(range, &m.property, var))
    });
    let planned = dedup(candidates);
    log::debug!("plan: {} edit(s) from {} match(es)", planned.len(), matches.len());
    planned
}

/// Keeps each instruction unless its range equals or overlaps one already
/// kept. Earlier instructions win.
pub fn dedup(edits: impl IntoIterator<Item = EditInstruction>) -> Vec<EditInstruction> {
    let mut kept: Vec<EditInstruction> = Vec::new();
    for edit in edits {
        if let Some(prior) = kept
            .iter()
            .find(|k| k.range == edit.range || k.range.overlaps(&edit.range))
        {
            log::trace!("plan: dropping {} (conflicts with {})", edit.range, prior.range);
            continue;
        }
        kept.push(edit);
    }
    kept
}
