//! The fixed catalog of design-system variables.
//!
//! Every suggestion the engine makes is one of the [`SystemVariable`]
//! variants below. The catalog is closed: the resolver never builds a
//! reference string on the fly, it always hands back one of these constants.
//!
//! ## Categories
//!
//! For the manual suggestion panel the catalog is also grouped by
//! [`Category`]. This grouping is independent of the role-based logic in
//! [`resolver`](crate::resolver):
//!
//! | Category     | Variables                                                    |
//! |--------------|--------------------------------------------------------------|
//! | `color`      | `text-color`, `text-muted`, `text-primary`, `text-inverse`   |
//! | `background` | `bg-tertiary`, `hover-bg`, `bg-primary`, `panel-bg`, `bg-color` |
//! | `border`     | `border-color`, `border-color-hover`                         |
//! | `shadow`     | `shadow-drop`, `shadow-inset`, `shadow-hover`                |

use std::fmt;

/// A reference to a predefined design token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SystemVariable {
    BgColor,
    Bg,
    BgPrimary,
    BgSecondary,
    BgTertiary,
    PanelBg,
    CardBg,
    HoverBg,
    BorderColor,
    BorderColorHover,
    HighlightColor,
    SuccessColor,
    TextColor,
    TextPrimary,
    TextMuted,
    TextInverse,
    ShadowDrop,
    ShadowInset,
    ShadowHover,
}

/// Lookup from normalized reference text to catalog entry.
static REFERENCES: phf::Map<&'static str, SystemVariable> = phf::phf_map! {
    "var(--bg-color)" => SystemVariable::BgColor,
    "var(--bg)" => SystemVariable::Bg,
    "var(--bg-primary)" => SystemVariable::BgPrimary,
    "var(--bg-secondary)" => SystemVariable::BgSecondary,
    "var(--bg-tertiary)" => SystemVariable::BgTertiary,
    "var(--panel-bg)" => SystemVariable::PanelBg,
    "var(--card-bg)" => SystemVariable::CardBg,
    "var(--hover-bg)" => SystemVariable::HoverBg,
    "var(--border-color)" => SystemVariable::BorderColor,
    "var(--border-color-hover)" => SystemVariable::BorderColorHover,
    "var(--highlight-color)" => SystemVariable::HighlightColor,
    "var(--success-color)" => SystemVariable::SuccessColor,
    "var(--text-color)" => SystemVariable::TextColor,
    "var(--text-primary)" => SystemVariable::TextPrimary,
    "var(--text-muted)" => SystemVariable::TextMuted,
    "var(--text-inverse)" => SystemVariable::TextInverse,
    "var(--shadow-drop)" => SystemVariable::ShadowDrop,
    "var(--shadow-inset)" => SystemVariable::ShadowInset,
    "var(--shadow-hover)" => SystemVariable::ShadowHover,
};

impl SystemVariable {
    /// Every catalog entry, in declaration order.
    pub const ALL: [SystemVariable; 19] = [
        SystemVariable::BgColor,
        SystemVariable::Bg,
        SystemVariable::BgPrimary,
        SystemVariable::BgSecondary,
        SystemVariable::BgTertiary,
        SystemVariable::PanelBg,
        SystemVariable::CardBg,
        SystemVariable::HoverBg,
        SystemVariable::BorderColor,
        SystemVariable::BorderColorHover,
        SystemVariable::HighlightColor,
        SystemVariable::SuccessColor,
        SystemVariable::TextColor,
        SystemVariable::TextPrimary,
        SystemVariable::TextMuted,
        SystemVariable::TextInverse,
        SystemVariable::ShadowDrop,
        SystemVariable::ShadowInset,
        SystemVariable::ShadowHover,
    ];

    /// The full reference text, e.g. `var(--bg-color)`.
    pub const fn as_str(self) -> &'static str {
        match self {
            SystemVariable::BgColor => "var(--bg-color)",
            SystemVariable::Bg => "var(--bg)",
            SystemVariable::BgPrimary => "var(--bg-primary)",
            SystemVariable::BgSecondary => "var(--bg-secondary)",
            SystemVariable::BgTertiary => "var(--bg-tertiary)",
            SystemVariable::PanelBg => "var(--panel-bg)",
            SystemVariable::CardBg => "var(--card-bg)",
            SystemVariable::HoverBg => "var(--hover-bg)",
            SystemVariable::BorderColor => "var(--border-color)",
            SystemVariable::BorderColorHover => "var(--border-color-hover)",
            SystemVariable::HighlightColor => "var(--highlight-color)",
            SystemVariable::SuccessColor => "var(--success-color)",
            SystemVariable::TextColor => "var(--text-color)",
            SystemVariable::TextPrimary => "var(--text-primary)",
            SystemVariable::TextMuted => "var(--text-muted)",
            SystemVariable::TextInverse => "var(--text-inverse)",
            SystemVariable::ShadowDrop => "var(--shadow-drop)",
            SystemVariable::ShadowInset => "var(--shadow-inset)",
            SystemVariable::ShadowHover => "var(--shadow-hover)",
        }
    }

    /// The custom property name without the `var(--` wrapper, e.g. `bg-color`.
    pub fn token_name(self) -> &'static str {
        let reference = self.as_str();
        &reference["var(--".len()..reference.len() - 1]
    }

    /// Looks up a value as written in a stylesheet.
    ///
    /// Whitespace is normalized first, so `var( --bg-color )` resolves to
    /// [`SystemVariable::BgColor`].
    pub fn from_reference(value: &str) -> Option<SystemVariable> {
        REFERENCES.get(normalize_reference(value).as_str()).copied()
    }
}

impl fmt::Display for SystemVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns `true` when `value` already references a catalog variable.
pub fn is_system_variable(value: &str) -> bool {
    SystemVariable::from_reference(value).is_some()
}

/// Collapses whitespace runs to one space, then drops the spaces that sit
/// next to `(`, `)` or `,`.
fn normalize_reference(value: &str) -> String {
    let collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");
    let chars: Vec<char> = collapsed.chars().collect();
    let mut out = String::with_capacity(collapsed.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == ' ' {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let hugs_punct = |ch: Option<char>| matches!(ch, Some('(' | ')' | ','));
            if hugs_punct(prev) || hugs_punct(next) {
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// Grouping of the catalog used by the manual suggestion panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Color,
    Background,
    Border,
    Shadow,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Color,
        Category::Background,
        Category::Border,
        Category::Shadow,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Color => "color",
            Category::Background => "background",
            Category::Border => "border",
            Category::Shadow => "shadow",
        }
    }

    /// Variables offered for this category, in panel order.
    pub fn variables(self) -> &'static [SystemVariable] {
        match self {
            Category::Color => &[
                SystemVariable::TextColor,
                SystemVariable::TextMuted,
                SystemVariable::TextPrimary,
                SystemVariable::TextInverse,
            ],
            Category::Background => &[
                SystemVariable::BgTertiary,
                SystemVariable::HoverBg,
                SystemVariable::BgPrimary,
                SystemVariable::PanelBg,
                SystemVariable::BgColor,
            ],
            Category::Border => &[
                SystemVariable::BorderColor,
                SystemVariable::BorderColorHover,
            ],
            Category::Shadow => &[
                SystemVariable::ShadowDrop,
                SystemVariable::ShadowInset,
                SystemVariable::ShadowHover,
            ],
        }
    }
}
