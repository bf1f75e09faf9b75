//! Sidebar width with magnetic breakpoints.
//!
//! Widths are clamped to `[SIDEBAR_MIN, SIDEBAR_MAX]`. While dragging, a width
//! that lands within `SNAP_THRESHOLD` pixels of a breakpoint snaps onto it;
//! breakpoints are tried in ascending order and the first one in range wins.

use crate::error::Result;
use crate::prefs::{PreferenceStore, SIDEBAR_WIDTH_KEY};

pub const SIDEBAR_MIN: i32 = 240;
pub const SIDEBAR_MAX: i32 = 720;
pub const SIDEBAR_DEFAULT: i32 = 400;
pub const SNAP_POINTS: [i32; 5] = [280, 320, 400, 480, 560];
pub const SNAP_THRESHOLD: i32 = 14;

pub fn clamp_width(px: i32) -> i32 {
    px.clamp(SIDEBAR_MIN, SIDEBAR_MAX)
}

/// Snaps `px` onto the first breakpoint within `threshold`, or returns it
/// unchanged.
pub fn snap_to(px: i32, points: &[i32], threshold: i32) -> i32 {
    points
        .iter()
        .copied()
        .find(|point| (px - point).abs() <= threshold)
        .unwrap_or(px)
}

pub fn snap_to_magnetic(px: i32) -> i32 {
    snap_to(px, &SNAP_POINTS, SNAP_THRESHOLD)
}

/// The persisted sidebar width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SidebarWidth(i32);

impl Default for SidebarWidth {
    fn default() -> Self {
        Self(SIDEBAR_DEFAULT)
    }
}

impl SidebarWidth {
    pub fn px(self) -> i32 {
        self.0
    }

    /// Stored width, clamped. Missing or unparsable values give the default.
    pub fn load(store: &impl PreferenceStore) -> Self {
        store
            .get(SIDEBAR_WIDTH_KEY)
            .and_then(|raw| raw.trim().parse::<i32>().ok())
            .map(|px| Self(clamp_width(px)))
            .unwrap_or_default()
    }

    /// Clamps and persists `px` without snapping.
    pub fn set(store: &mut impl PreferenceStore, px: i32) -> Result<Self> {
        let width = Self(clamp_width(px));
        store.set(SIDEBAR_WIDTH_KEY, &width.0.to_string())?;
        Ok(width)
    }

    /// Clamps, snaps and persists `px`: what a finished drag stores.
    pub fn set_snapped(store: &mut impl PreferenceStore, px: i32) -> Result<Self> {
        Self::set(store, snap_to_magnetic(clamp_width(px)))
    }
}

/// Which gutter is being dragged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GutterSide {
    /// The gutter on the sidebar's left edge; the right edge stays put.
    Left,
    /// The gutter on the sidebar's right edge; the left edge stays put.
    Right,
}

/// An in-progress gutter drag.
#[derive(Clone, Copy, Debug)]
pub struct SidebarDrag {
    side: GutterSide,
    sidebar_left: i32,
    sidebar_right: i32,
}

impl SidebarDrag {
    /// Starts a drag given the sidebar's current edges in pixels.
    pub fn start(side: GutterSide, sidebar_left: i32, sidebar_right: i32) -> Self {
        log::trace!("sidebar: drag {side:?} from {sidebar_left}..{sidebar_right}");
        Self {
            side,
            sidebar_left,
            sidebar_right,
        }
    }

    /// Width for a pointer at `pointer_x`, clamped then snapped.
    pub fn width_at(&self, pointer_x: i32) -> i32 {
        let raw = match self.side {
            GutterSide::Left => self.sidebar_right - pointer_x,
            GutterSide::Right => pointer_x - self.sidebar_left,
        };
        snap_to_magnetic(clamp_width(raw))
    }

    /// Applies a pointer move and persists the resulting width.
    pub fn drag_to(&self, store: &mut impl PreferenceStore, pointer_x: i32) -> Result<SidebarWidth> {
        SidebarWidth::set(store, self.width_at(pointer_x))
    }

    /// Ends the drag: re-snaps whatever was stored last.
    pub fn finish(self, store: &mut impl PreferenceStore) -> Result<SidebarWidth> {
        let current = SidebarWidth::load(store);
        SidebarWidth::set_snapped(store, current.px())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryStore;

    #[test]
    fn clamps_to_limits() {
        assert_eq!(clamp_width(10), SIDEBAR_MIN);
        assert_eq!(clamp_width(9000), SIDEBAR_MAX);
        assert_eq!(clamp_width(500), 500);
    }

    #[test]
    fn snaps_within_threshold() {
        assert_eq!(snap_to(282, &[280], 14), 280);
        assert_eq!(snap_to_magnetic(282), 280);
        assert_eq!(snap_to_magnetic(334), 320);
        assert_eq!(snap_to_magnetic(335), 335);
        assert_eq!(snap_to_magnetic(340), 340);
        assert_eq!(snap_to_magnetic(546), 560);
    }

    #[test]
    fn load_falls_back_to_default() {
        let mut store = MemoryStore::new();
        assert_eq!(SidebarWidth::load(&store).px(), SIDEBAR_DEFAULT);
        store.set(SIDEBAR_WIDTH_KEY, "wide").unwrap();
        assert_eq!(SidebarWidth::load(&store).px(), SIDEBAR_DEFAULT);
        store.set(SIDEBAR_WIDTH_KEY, "5000").unwrap();
        assert_eq!(SidebarWidth::load(&store).px(), SIDEBAR_MAX);
    }

    #[test]
    fn drag_from_either_gutter() {
        let left = SidebarDrag::start(GutterSide::Left, 600, 1000);
        assert_eq!(left.width_at(660), 340);
        assert_eq!(left.width_at(718), 280);

        let right = SidebarDrag::start(GutterSide::Right, 0, 400);
        assert_eq!(right.width_at(100), SIDEBAR_MIN);
        assert_eq!(right.width_at(2000), SIDEBAR_MAX);
    }

    #[test]
    fn drag_persists_and_finish_resnaps() {
        let mut store = MemoryStore::new();
        let drag = SidebarDrag::start(GutterSide::Right, 0, 400);
        assert_eq!(drag.drag_to(&mut store, 282).unwrap().px(), 280);

        store.set(SIDEBAR_WIDTH_KEY, "475").unwrap();
        assert_eq!(drag.finish(&mut store).unwrap().px(), 480);
        assert_eq!(store.get(SIDEBAR_WIDTH_KEY).as_deref(), Some("480"));
    }
}
