//! End-to-end browsing scenarios against the real opcode table

use cashvm_browser::{
    encode_fragment, parse_fragment, resolve_fragment, ActivationYear, Browser, BrowserState,
    Catalog, Effect, Event, FilterStage, MemorySurface, Query, Segment, COLLAPSED_RANGES,
};
use cashvm_opcodes::Category;
use std::collections::BTreeSet;

fn open(fragment: &str) -> Browser<'static, MemorySurface> {
    Browser::open(Catalog::global(), MemorySurface::default(), fragment)
}

// ==================== Search ====================

#[test]
fn test_search_checkdatasig() {
    let mut browser = open("");
    browser.dispatch(Event::SetSearch("CHECKDATASIG".into()));

    let view = browser.view();
    let names: Vec<&str> = view.matches.iter().map(|r| r.name.as_str()).collect();
    assert!(names.contains(&"OP_CHECKDATASIG"));
    for row in &view.matches {
        let text = format!("{} {}", row.name, row.description).to_lowercase();
        assert!(text.contains("checkdatasig"), "{}", row.name);
    }
    assert_eq!(view.highlighted.as_ref().map(BTreeSet::len), Some(view.matches.len()));
}

// ==================== Activation years ====================

#[test]
fn test_year_2026_alone() {
    let mut browser = open("");
    browser.dispatch(Event::ShowActivationYear);
    browser.dispatch(Event::ToggleYear(ActivationYear::Y2026));

    let mut names: Vec<&str> = browser.view().matches.iter().map(|r| r.name.as_str()).collect();
    names.sort_unstable();
    let mut expected = ActivationYear::Y2026.opcode_names().to_vec();
    expected.sort_unstable();
    assert_eq!(names.len(), 9);
    assert_eq!(names, expected);
}

#[test]
fn test_year_partition() {
    let catalog = Catalog::global();
    let all: BTreeSet<ActivationYear> = ActivationYear::ALL.into_iter().collect();
    assert_eq!(catalog.filter(&Query::default(), &all).len(), 256);

    let total: usize = ActivationYear::ALL
        .into_iter()
        .map(|year| catalog.years().values(year).len())
        .sum();
    assert_eq!(total, 256);
}

// ==================== Auto-clear ====================

#[test]
fn test_auto_clear_keeps_search() {
    let mut browser = open("");
    browser.dispatch(Event::ShowOperationType);
    browser.dispatch(Event::ToggleCategory(Category::Introspection));
    browser.dispatch(Event::SetSearch("add".into()));

    let state = browser.state();
    assert_eq!(state.query.search, "add");
    assert!(state.query.categories.is_empty());
    assert!(state.years.is_empty());
    assert_eq!(state.stage, FilterStage::Initial);
    assert!(!browser.view().matches.is_empty());
}

#[test]
fn test_auto_clear_with_year_filter() {
    let mut browser = open("");
    browser.dispatch(Event::ToggleYear(ActivationYear::Y2020));
    browser.dispatch(Event::SetSearch("hash".into()));

    assert_eq!(browser.state().query.search, "hash");
    assert!(browser.state().years.is_empty());
}

#[test]
fn test_narrowing_that_still_matches_is_kept() {
    let mut browser = open("");
    browser.dispatch(Event::ToggleCategory(Category::Crypto));
    browser.dispatch(Event::SetSearch("sig".into()));

    assert_eq!(browser.state().query.categories, vec![Category::Crypto]);
    assert!(browser
        .view()
        .matches
        .iter()
        .all(|row| row.category == Category::Crypto));
}

// ==================== Deep links ====================

#[test]
fn test_deep_link_expands_collapsed_range() {
    let browser = open("#OP_PUSHBYTES_20");
    let state = browser.state();
    assert_eq!(state.selected, Some(0x14));
    assert!(state.expanded.contains(&COLLAPSED_RANGES[0].start));
    assert!(!state.expanded.contains(&COLLAPSED_RANGES[1].start));

    let view = browser.view();
    assert!(matches!(view.segments[1], Segment::ExpandedRange { .. }));
}

#[test]
fn test_deep_link_outside_collapsed_ranges() {
    let browser = open("#OP_CAT");
    assert_eq!(browser.state().selected, Some(0x7e));
    assert!(browser.state().expanded.is_empty());
    assert_eq!(browser.surface().title, "OP_CAT | CashVM Opcodes | Bitcoin Cash");
    assert_eq!(browser.surface().scrolled, vec![0x7e]);
}

#[test]
fn test_deep_link_by_alias_and_param() {
    let browser = open("#opcode=op_verif");
    assert_eq!(browser.state().selected, Some(0x65));
}

#[test]
fn test_unresolvable_deep_link() {
    let browser = open("#OP_DOES_NOT_EXIST");
    assert_eq!(browser.state(), &BrowserState::default());
    assert_eq!(browser.surface().title, "CashVM Opcodes | Bitcoin Cash");
}

#[test]
fn test_external_fragment_change() {
    let mut browser = open("#OP_ADD");
    browser.dispatch(Event::FragmentChanged("#OP_SUB".into()));
    assert_eq!(browser.state().selected, Some(0x94));
    assert_eq!(browser.surface().scrolled, vec![0x93, 0x94]);
    // The surface owns the fragment; the browser never echoes it back
    assert!(browser.surface().fragment.is_empty());
}

// ==================== Selection round trip ====================

#[test]
fn test_selection_fragment_round_trip() {
    let catalog = Catalog::global();
    let mut browser = open("");

    for row in catalog.table().rows() {
        browser.dispatch(Event::Select {
            value: row.value,
            scroll: false,
        });
        let fragment = browser.surface().fragment.clone();
        assert_eq!(fragment, encode_fragment(&row.name));
        assert_eq!(parse_fragment(&fragment).as_deref(), Some(row.name.as_str()));
        assert_eq!(resolve_fragment(catalog.table(), &fragment), Some(row));
    }

    let last = browser.state().selected.unwrap();
    browser.dispatch(Event::Select {
        value: last,
        scroll: false,
    });
    assert_eq!(browser.surface().fragment, "");
}

#[test]
fn test_effects_run_in_order() {
    let mut browser = open("");
    browser.dispatch(Event::Select {
        value: 0xf0,
        scroll: true,
    });

    assert_eq!(
        browser.surface().log[1..],
        [
            Effect::WriteFragment("#OP_UNKNOWN_240".into()),
            Effect::SetTitle("OP_UNKNOWN_240 | CashVM Opcodes | Bitcoin Cash".into()),
            Effect::ScrollIntoView(0xf0),
        ]
    );
    assert!(browser.state().expanded.contains(&0xE));
}

// ==================== Ranges ====================

#[test]
fn test_range_expansion_ignores_filters() {
    let mut browser = open("");
    browser.dispatch(Event::ToggleRange(0x1));
    browser.dispatch(Event::ToggleCategory(Category::Crypto));
    browser.dispatch(Event::ClearFilters);
    assert_eq!(browser.state().expanded, [0x1].into());

    browser.dispatch(Event::ToggleRange(0x1));
    assert!(browser.state().expanded.is_empty());
}
