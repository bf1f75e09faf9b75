//! Integration tests for persisted layout preferences.

use proptest::prelude::*;

use workbench::sidebar::{SIDEBAR_MAX, SIDEBAR_MIN, SNAP_POINTS, snap_to, snap_to_magnetic};
use workbench::{FileStore, MemoryStore, SidebarWidth, Theme};

#[test]
fn test_sidebar_examples() {
    assert_eq!(snap_to(282, &[280], 14), 280);
    assert_eq!(snap_to_magnetic(340), 340);
}

#[test]
fn test_preferences_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    {
        let mut store = FileStore::open(&path).unwrap();
        Theme::Dark.save(&mut store).unwrap();
        SidebarWidth::set_snapped(&mut store, 470).unwrap();
    }

    let store = FileStore::open(&path).unwrap();
    assert_eq!(Theme::load(&store), Theme::Dark);
    assert_eq!(SidebarWidth::load(&store).px(), 480);
}

proptest! {
    #[test]
    fn stored_width_is_clamped_and_snapped(px in -2000i32..4000) {
        let mut store = MemoryStore::new();
        let width = SidebarWidth::set_snapped(&mut store, px).unwrap().px();
        prop_assert!((SIDEBAR_MIN..=SIDEBAR_MAX).contains(&width));
        prop_assert_eq!(SidebarWidth::load(&store).px(), width);

        let clamped = px.clamp(SIDEBAR_MIN, SIDEBAR_MAX);
        prop_assert!(width == clamped || SNAP_POINTS.contains(&width));
    }

    #[test]
    fn snapping_is_idempotent(px in SIDEBAR_MIN..=SIDEBAR_MAX) {
        let once = snap_to_magnetic(px);
        prop_assert_eq!(snap_to_magnetic(once), once);
    }
}
