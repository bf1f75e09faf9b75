//! Property tests for the engine invariants.

use proptest::prelude::*;

use stylemap::catalog::is_system_variable;
use stylemap::hash::selector_hash;
use stylemap::planner::{EditInstruction, dedup, plan};
use stylemap::role::classify;
use stylemap::{SystemVariable, TextRange, resolve, scan};

fn selector() -> impl Strategy<Value = String> {
    let parts = prop::sample::select(vec![
        "h2", ".btn", "a", ".card", ".sidebar", "input", ".muted", ".hero", ".dark", "div", ".x-y", ">",
    ]);
    prop::collection::vec(parts, 1..4).prop_map(|parts| parts.join(" "))
}

fn state_suffix() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        ":hover",
        ":active",
        ":focus",
        ":focus-visible",
        ":focus-within",
        ":hover:active",
    ])
}

fn declaration() -> impl Strategy<Value = String> {
    let property = prop::sample::select(vec![
        "color",
        "background",
        "background-color",
        "border",
        "border-left",
        "border-color",
        "box-shadow",
        "margin",
    ]);
    let value = prop_oneof![
        Just("#fff".to_string()),
        Just("red".to_string()),
        Just("1px solid #000".to_string()),
        Just("0 1px 2px rgba(0,0,0,.2)".to_string()),
        prop::sample::select(SystemVariable::ALL.to_vec()).prop_map(|v| v.to_string()),
    ];
    (property, value).prop_map(|(p, v)| format!("{p}: {v};"))
}

fn stylesheet() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (selector(), prop::option::of(state_suffix()), prop::collection::vec(declaration(), 0..5)),
        0..6,
    )
    .prop_map(|rules| {
        rules
            .into_iter()
            .map(|(sel, state, decls)| format!("{sel}{} {{ {} }}", state.unwrap_or(""), decls.join(" ")))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

proptest! {
    #[test]
    fn classify_ignores_state_suffix(sel in selector(), suffix in state_suffix()) {
        prop_assert_eq!(classify(&format!("{sel}{suffix}")), classify(&sel));
    }

    #[test]
    fn hash_is_deterministic(text in ".*") {
        prop_assert_eq!(selector_hash(&text), selector_hash(&text));
    }

    #[test]
    fn scan_is_idempotent(css in stylesheet()) {
        prop_assert_eq!(scan(&css), scan(&css));
    }

    #[test]
    fn scan_never_emits_converted_values(css in stylesheet()) {
        for m in scan(&css) {
            prop_assert!(!is_system_variable(&m.raw_value));
        }
    }

    #[test]
    fn resolve_stays_in_catalog(css in stylesheet()) {
        for m in scan(&css) {
            if let Some(var) = resolve(&m) {
                prop_assert!(SystemVariable::ALL.contains(&var));
                prop_assert_eq!(SystemVariable::from_reference(var.as_str()), Some(var));
            }
        }
    }

    #[test]
    fn dedup_never_keeps_overlaps(ranges in prop::collection::vec((0usize..50, 0usize..10), 0..30)) {
        let edits = ranges
            .into_iter()
            .map(|(start, len)| EditInstruction::new(TextRange::new(start, start + len), "x"));
        let kept = dedup(edits);
        for (i, a) in kept.iter().enumerate() {
            for b in &kept[i + 1..] {
                prop_assert!(a.range != b.range);
                prop_assert!(!a.range.overlaps(&b.range));
            }
        }
    }

    #[test]
    fn plan_survives_contrived_locations(css in stylesheet(), start in 0usize..20, width in 1usize..40) {
        let matches = scan(&css);
        // every match claims a location inside the same small window
        let edits = plan(&matches, resolve, |_, n| Some(TextRange::new(start + n, start + n + width)));
        for (i, a) in edits.iter().enumerate() {
            for b in &edits[i + 1..] {
                prop_assert!(!a.range.overlaps(&b.range));
            }
        }
    }
}
