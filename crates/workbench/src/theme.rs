use std::fmt;

use crate::error::Result;
use crate::prefs::{PreferenceStore, THEME_KEY};

/// The workbench color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// `dark` selects the dark theme; anything else is light.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("dark") {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Last used theme, light when nothing was stored.
    pub fn load(store: &impl PreferenceStore) -> Self {
        store.get(THEME_KEY).map(|v| Theme::parse(&v)).unwrap_or_default()
    }

    pub fn save(self, store: &mut impl PreferenceStore) -> Result<()> {
        log::debug!("theme: {}", self.as_str());
        store.set(THEME_KEY, self.as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
