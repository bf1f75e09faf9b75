//! Variable resolution.
//!
//! Maps a scanned declaration to the single catalog variable that best fits
//! its property, the role of its selector and its interactive state. The
//! table is evaluated top to bottom and the first applicable rule wins:
//!
//! | Property       | Interactive                  | Resting                          |
//! |----------------|------------------------------|----------------------------------|
//! | `border*`      | `border-color-hover`         | `border-color`                   |
//! | `color`        | `text-color`                 | by role (see [`resting_text`])   |
//! | `background*`  | `hover-bg`                   | by role (see [`resting_background`]) |
//! | `box-shadow`   | active/focus → `shadow-inset`, hover → `shadow-hover` | `shadow-drop` |
//!
//! Where several variables are equally valid the choice rotates on
//! [`selector_hash`](crate::hash::selector_hash), so the same selector always
//! gets the same answer.

use crate::catalog::SystemVariable;
use crate::hash::rotate;
use crate::role::{Role, classify};
use crate::scanner::Match;
use crate::state::InteractiveState;

/// The property families the resolver distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyKind {
    Border,
    Color,
    Background,
    BoxShadow,
}

impl PropertyKind {
    /// Classifies a lowercased property name. Unknown properties yield `None`.
    pub fn of(property: &str) -> Option<Self> {
        if property.starts_with("border") {
            Some(PropertyKind::Border)
        } else if property == "color" {
            Some(PropertyKind::Color)
        } else if property.starts_with("background") {
            Some(PropertyKind::Background)
        } else if property == "box-shadow" {
            Some(PropertyKind::BoxShadow)
        } else {
            None
        }
    }
}

/// Resolves a scanned match to its suggested variable.
pub fn resolve(m: &Match) -> Option<SystemVariable> {
    resolve_declaration(&m.property, &m.selector)
}

/// Resolves a property in the context of a selector.
///
/// The property is compared case-insensitively. Returns `None` for properties
/// outside the mapped families.
pub fn resolve_declaration(property: &str, selector: &str) -> Option<SystemVariable> {
    let kind = PropertyKind::of(&property.to_ascii_lowercase())?;
    let state = InteractiveState::from_selector(selector);
    let role = classify(selector);

    let var = match kind {
        PropertyKind::Border if state.is_interactive() => SystemVariable::BorderColorHover,
        PropertyKind::Border => SystemVariable::BorderColor,
        PropertyKind::Color if state.is_interactive() => SystemVariable::TextColor,
        PropertyKind::Color => resting_text(role, selector),
        PropertyKind::Background if state.is_interactive() => SystemVariable::HoverBg,
        PropertyKind::Background => resting_background(role, selector),
        PropertyKind::BoxShadow => shadow(state),
    };
    Some(var)
}

/// Text color for a selector in its resting state.
///
/// Card, panel and unclassified selectors alternate between primary and muted
/// text on the selector hash.
pub fn resting_text(role: Role, selector: &str) -> SystemVariable {
    const ALTERNATES: [SystemVariable; 2] = [SystemVariable::TextPrimary, SystemVariable::TextMuted];
    match role {
        Role::Heading | Role::Primary => SystemVariable::TextPrimary,
        Role::Button | Role::Link | Role::Muted => SystemVariable::TextMuted,
        Role::Inverse => SystemVariable::TextInverse,
        Role::Card | Role::Panel | Role::Input | Role::Default => {
            pick(selector, &ALTERNATES)
        }
    }
}

/// Background for a selector in its resting state.
pub fn resting_background(role: Role, selector: &str) -> SystemVariable {
    const HEADING: [SystemVariable; 2] = [SystemVariable::BgPrimary, SystemVariable::BgTertiary];
    const ROTATION: [SystemVariable; 3] = [
        SystemVariable::BgPrimary,
        SystemVariable::BgSecondary,
        SystemVariable::BgTertiary,
    ];
    match role {
        Role::Card => SystemVariable::CardBg,
        Role::Panel => SystemVariable::PanelBg,
        Role::Button | Role::Input => SystemVariable::BgTertiary,
        Role::Heading => pick(selector, &HEADING),
        Role::Link | Role::Muted | Role::Primary | Role::Inverse | Role::Default => {
            pick(selector, &ROTATION)
        }
    }
}

/// Shadow by state: pressed or focused elements sink, hovered ones lift.
pub fn shadow(state: InteractiveState) -> SystemVariable {
    if state.intersects(InteractiveState::ACTIVE | InteractiveState::FOCUS) {
        SystemVariable::ShadowInset
    } else if state.contains(InteractiveState::HOVER) {
        SystemVariable::ShadowHover
    } else {
        SystemVariable::ShadowDrop
    }
}

fn pick(selector: &str, choices: &[SystemVariable]) -> SystemVariable {
    rotate(selector, choices).copied().unwrap_or(choices[0])
}
