//! Interactive pseudo-state detection.
//!
//! A selector such as `.btn:hover:focus-visible` targets more than one state at
//! once, so the state is a set of flags rather than a single value. Detection
//! is a plain substring check on the lowercased selector and runs before the
//! classifier strips these suffixes.

use bitflags::bitflags;

bitflags! {
    /// Which interactive pseudo-classes a selector targets.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct InteractiveState: u8 {
        const HOVER = 1 << 0;
        const ACTIVE = 1 << 1;
        const FOCUS = 1 << 2;
    }
}

impl InteractiveState {
    /// Detects `:hover`, `:active` and `:focus` (including `:focus-within`,
    /// `:focus-visible`) anywhere in the selector.
    pub fn from_selector(selector: &str) -> Self {
        let lowered = selector.to_lowercase();
        let mut state = InteractiveState::empty();
        if lowered.contains(":hover") {
            state |= InteractiveState::HOVER;
        }
        if lowered.contains(":active") {
            state |= InteractiveState::ACTIVE;
        }
        if lowered.contains(":focus") {
            state |= InteractiveState::FOCUS;
        }
        state
    }

    /// True for any of hover, active or focus.
    pub fn is_interactive(self) -> bool {
        !self.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resting_selector_has_no_state() {
        assert_eq!(InteractiveState::from_selector(".btn"), InteractiveState::empty());
        assert!(!InteractiveState::from_selector("a.nav").is_interactive());
    }

    #[test]
    fn states_combine() {
        let state = InteractiveState::from_selector(".btn:HOVER:active");
        assert!(state.contains(InteractiveState::HOVER | InteractiveState::ACTIVE));
        assert!(!state.contains(InteractiveState::FOCUS));
    }

    #[test]
    fn focus_variants_count_as_focus() {
        assert!(InteractiveState::from_selector("input:focus-visible").contains(InteractiveState::FOCUS));
        assert!(InteractiveState::from_selector("form:focus-within").contains(InteractiveState::FOCUS));
    }
}
