//! Deterministic selector hash used to rotate between equally valid variables.
//!
//! This is the classic `h * 31 + c` rolling hash over UTF-16 code units with
//! 32-bit wrapping arithmetic. It is not collision resistant; it only has to
//! give the same answer for the same selector every time.

/// Hashes `text` to a non-negative integer.
pub fn selector_hash(text: &str) -> u32 {
    text.encode_utf16()
        .fold(0i32, |h, unit| {
            h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit))
        })
        .unsigned_abs()
}

/// Picks one of `choices` by `selector_hash(text) % choices.len()`.
///
/// Returns `None` only for an empty slice.
pub fn rotate<'a, T>(text: &str, choices: &'a [T]) -> Option<&'a T> {
    if choices.is_empty() {
        return None;
    }
    choices.get(selector_hash(text) as usize % choices.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_hashes_to_zero() {
        assert_eq!(selector_hash(""), 0);
    }

    #[test]
    fn matches_rolling_formula() {
        // 'a' = 97, 'b' = 98 → 97 * 31 + 98
        assert_eq!(selector_hash("a"), 97);
        assert_eq!(selector_hash("ab"), 97 * 31 + 98);
    }

    #[test]
    fn overflow_wraps_and_stays_non_negative() {
        let long = ".navigation-sidebar-container > .item:hover".repeat(8);
        assert_eq!(selector_hash(&long), selector_hash(&long));
    }

    #[test]
    fn rotate_is_stable() {
        let choices = ["x", "y", "z"];
        let first = rotate(".card", &choices);
        assert_eq!(first, rotate(".card", &choices));
        assert_eq!(rotate::<u8>(".card", &[]), None);
    }
}
