//! Selector role classification.
//!
//! A selector is mapped onto one [`Role`] by testing it against an ordered list
//! of patterns. The first pattern that matches wins; order matters because the
//! categories overlap (`.nav` is both a link and a panel word, and links come
//! first).
//!
//! Interactive suffixes (`:hover`, `:active`, `:focus*`) are stripped before
//! matching. State is tracked separately by
//! [`InteractiveState`](crate::state::InteractiveState).

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Semantic category of the element a selector targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Heading,
    Button,
    Link,
    Card,
    Panel,
    Input,
    Muted,
    Primary,
    Inverse,
    Default,
}

impl Role {
    pub fn name(self) -> &'static str {
        match self {
            Role::Heading => "heading",
            Role::Button => "button",
            Role::Link => "link",
            Role::Card => "card",
            Role::Panel => "panel",
            Role::Input => "input",
            Role::Muted => "muted",
            Role::Primary => "primary",
            Role::Inverse => "inverse",
            Role::Default => "default",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static STATE_SUFFIX: Lazy<Regex> = Lazy::new(|| compile(r":+hover|:active|:focus[\w-]*"));

/// Priority-ordered (pattern, role) pairs.
static RULES: Lazy<Vec<(Regex, Role)>> = Lazy::new(|| {
    [
        (
            r"^h[1-6]\b|\.(title|heading|headline)|\bh[1-6]\b",
            Role::Heading,
        ),
        (r"\b(btn|button|cta|action)\b", Role::Button),
        (r"\ba\b|\.(link|nav)\b", Role::Link),
        (r"\b(card|tile|block|box)\b", Role::Card),
        (r"\b(panel|sidebar|aside|nav|menu)\b", Role::Panel),
        (r"\b(input|form|field|control)\b", Role::Input),
        (
            r"\b(muted|caption|secondary|hint|placeholder|meta)\b",
            Role::Muted,
        ),
        (r"\b(primary|lead|hero)\b", Role::Primary),
        (r"\b(inverse|dark|overlay)\b", Role::Inverse),
    ]
    .into_iter()
    .map(|(pattern, role)| (compile(pattern), role))
    .collect()
});

// Patterns are literals above; a failure here is a programming error caught
// by the unit tests on first use.
fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("invalid selector rule {pattern:?}: {err}"),
    }
}

/// Removes interactive pseudo-class suffixes and normalizes case.
pub fn strip_state(selector: &str) -> String {
    let lowered = selector.to_lowercase();
    STATE_SUFFIX.replace_all(&lowered, "").trim().to_string()
}

/// Classifies a selector into a [`Role`].
///
/// Total over all inputs: anything that matches no rule, including the empty
/// selector, is [`Role::Default`].
pub fn classify(selector: &str) -> Role {
    let stripped = strip_state(selector);
    if stripped.is_empty() {
        return Role::Default;
    }
    RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(&stripped))
        .map(|(_, role)| *role)
        .unwrap_or(Role::Default)
}
