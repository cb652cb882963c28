//! Browser state and its pure transition function
//!
//! [`BrowserState::reduce`] never touches a rendering surface. It returns
//! the next state together with the side effects to run after the state is
//! committed, in the order fragment write, title write, scroll.

use crate::filter::Query;
use crate::fragment::{fragment_for, resolve_fragment};
use crate::grid::collapsed_range_start;
use crate::label::page_title;
use crate::years::ActivationYear;
use crate::Catalog;
use cashvm_opcodes::{Category, OpcodeRow};
use serde::Serialize;
use std::collections::BTreeSet;

/// Which set of filter chips is shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterStage {
    /// The two stage chips
    #[default]
    Initial,
    /// Category chips
    OperationType,
    /// Activation year chips
    ActivationYear,
}

/// User and location events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Replace the search text
    SetSearch(String),
    /// Empty the search box and focus it
    ClearSearch,
    /// Show category chips
    ShowOperationType,
    /// Show year chips; drops category filters
    ShowActivationYear,
    /// Enable or disable a category filter
    ToggleCategory(Category),
    /// Enable or disable a year filter
    ToggleYear(ActivationYear),
    /// Drop every filter and return to the initial stage
    ClearFilters,
    /// Expand or collapse the range starting at this grid row
    ToggleRange(u8),
    /// Click on a cell; selecting the selected row deselects it
    Select {
        /// Byte value
        value: u8,
        /// Whether to scroll the cell into view
        scroll: bool,
    },
    /// Close the detail panel
    Close,
    /// The location fragment changed (including the initial load)
    FragmentChanged(String),
}

/// Side effect for the surface to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Replace the location fragment without reloading; empty clears it
    WriteFragment(String),
    /// Set the document title
    SetTitle(String),
    /// Scroll the cell with this value into view
    ScrollIntoView(u8),
    /// Move focus to the search box
    FocusSearch,
}

/// Result of [`BrowserState::reduce`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State to commit
    pub state: BrowserState,
    /// Effects to run afterwards, in order
    pub effects: Vec<Effect>,
}

/// Transient state of one viewing session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserState {
    /// Search text and category filters
    pub query: Query,
    /// Active year filters
    pub years: BTreeSet<ActivationYear>,
    /// Start rows of expanded collapsed ranges
    pub expanded: BTreeSet<u8>,
    /// Selected byte value
    pub selected: Option<u8>,
    /// Chip stage
    pub stage: FilterStage,
}

#[derive(Default)]
struct Pending {
    fragment: Option<String>,
    scroll: Option<u8>,
    focus: bool,
}

impl BrowserState {
    /// Whether any search, category or year filter is active
    pub fn is_filtering(&self) -> bool {
        self.query.has_search() || self.has_filters()
    }

    /// Whether any category or year filter is active
    pub fn has_filters(&self) -> bool {
        !self.query.categories.is_empty() || !self.years.is_empty()
    }

    /// Rows matching the current search and filters
    pub fn matches<'c>(&self, catalog: &'c Catalog) -> Vec<&'c OpcodeRow> {
        catalog.filter(&self.query, &self.years)
    }

    /// Selected row, if any
    pub fn selected_row<'c>(&self, catalog: &'c Catalog) -> Option<&'c OpcodeRow> {
        self.selected.map(|value| catalog.table().get(value))
    }

    /// Apply `event` and return the next state with its effects
    pub fn reduce(&self, catalog: &Catalog, event: &Event) -> Transition {
        let mut next = self.clone();
        let mut pending = Pending::default();

        match event {
            Event::SetSearch(text) => next.query.search = text.clone(),
            Event::ClearSearch => {
                next.query.search.clear();
                pending.focus = true;
            }
            Event::ShowOperationType => next.stage = FilterStage::OperationType,
            Event::ShowActivationYear => {
                next.query.categories.clear();
                next.stage = FilterStage::ActivationYear;
            }
            Event::ToggleCategory(category) => {
                let categories = &mut next.query.categories;
                match categories.iter().position(|active| active == category) {
                    Some(index) => {
                        categories.remove(index);
                    }
                    None => categories.push(*category),
                }
                next.stage = FilterStage::OperationType;
            }
            Event::ToggleYear(year) => {
                if !next.years.remove(year) {
                    next.years.insert(*year);
                }
                next.stage = FilterStage::ActivationYear;
            }
            Event::ClearFilters => {
                next.query.categories.clear();
                next.years.clear();
                next.stage = FilterStage::Initial;
            }
            Event::ToggleRange(start) => {
                if !next.expanded.remove(start) {
                    next.expanded.insert(*start);
                }
            }
            Event::Select { value, scroll } => {
                if next.selected == Some(*value) {
                    next.selected = None;
                } else {
                    next.select(*value);
                    if *scroll {
                        pending.scroll = Some(*value);
                    }
                }
                pending.fragment = Some(fragment_for(next.selected_row(catalog)));
            }
            Event::Close => {
                if next.selected.take().is_some() {
                    pending.fragment = Some(String::new());
                }
            }
            Event::FragmentChanged(hash) => match resolve_fragment(catalog.table(), hash) {
                Some(row) => {
                    if next.selected != Some(row.value) {
                        pending.scroll = Some(row.value);
                    }
                    next.select(row.value);
                }
                None => next.selected = None,
            },
        }

        next.auto_clear(catalog);

        let mut effects = Vec::new();
        if let Some(fragment) = pending.fragment {
            effects.push(Effect::WriteFragment(fragment));
        }
        if next.selected != self.selected {
            effects.push(Effect::SetTitle(page_title(next.selected_row(catalog))));
        }
        if let Some(value) = pending.scroll {
            effects.push(Effect::ScrollIntoView(value));
        }
        if pending.focus {
            effects.push(Effect::FocusSearch);
        }

        Transition {
            state: next,
            effects,
        }
    }

    // Selecting a row also expands its collapsed range; others are untouched.
    fn select(&mut self, value: u8) {
        self.selected = Some(value);
        if let Some(start) = collapsed_range_start(value) {
            self.expanded.insert(start);
        }
    }

    // Never leave the user looking at an empty result. Typed search text
    // survives when filters alone can be dropped.
    fn auto_clear(&mut self, catalog: &Catalog) {
        if !self.is_filtering() || !self.matches(catalog).is_empty() {
            return;
        }

        if self.query.has_search() {
            if self.has_filters() {
                tracing::debug!(search = %self.query.search, "no matches, dropping filters");
                self.query.categories.clear();
                self.years.clear();
                self.stage = FilterStage::Initial;
            }
        } else {
            tracing::debug!("no matches, resetting filters");
            self.query = Query::default();
            self.years.clear();
            self.stage = FilterStage::Initial;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> &'static Catalog {
        Catalog::global()
    }

    fn run(state: &BrowserState, events: &[Event]) -> BrowserState {
        events
            .iter()
            .fold(state.clone(), |state, event| state.reduce(catalog(), event).state)
    }

    #[test]
    fn test_stage_transitions() {
        let state = run(&BrowserState::default(), &[Event::ShowOperationType]);
        assert_eq!(state.stage, FilterStage::OperationType);

        let state = run(&state, &[Event::ToggleCategory(Category::Crypto), Event::ShowActivationYear]);
        assert_eq!(state.stage, FilterStage::ActivationYear);
        assert!(state.query.categories.is_empty());

        let state = run(&state, &[Event::ToggleYear(ActivationYear::Y2018), Event::ClearFilters]);
        assert_eq!(state, BrowserState::default());
    }

    #[test]
    fn test_toggle_year_forces_stage() {
        let state = run(&BrowserState::default(), &[Event::ToggleYear(ActivationYear::Y2020)]);
        assert_eq!(state.stage, FilterStage::ActivationYear);
        assert!(state.years.contains(&ActivationYear::Y2020));

        let state = run(&state, &[Event::ToggleYear(ActivationYear::Y2020)]);
        assert!(state.years.is_empty());
        assert_eq!(state.stage, FilterStage::ActivationYear);
    }

    #[test]
    fn test_category_order_is_insertion_order() {
        let state = run(
            &BrowserState::default(),
            &[
                Event::ToggleCategory(Category::Stack),
                Event::ToggleCategory(Category::Crypto),
                Event::ToggleCategory(Category::Arithmetic),
                Event::ToggleCategory(Category::Crypto),
            ],
        );
        assert_eq!(state.query.categories, vec![Category::Stack, Category::Arithmetic]);
    }

    #[test]
    fn test_select_writes_fragment_and_title() {
        let transition = BrowserState::default().reduce(
            catalog(),
            &Event::Select {
                value: 0xac,
                scroll: false,
            },
        );
        assert_eq!(transition.state.selected, Some(0xac));
        assert_eq!(
            transition.effects,
            vec![
                Effect::WriteFragment("#OP_CHECKSIG".into()),
                Effect::SetTitle("OP_CHECKSIG | CashVM Opcodes | Bitcoin Cash".into()),
            ]
        );
    }

    #[test]
    fn test_select_again_deselects() {
        let select = Event::Select {
            value: 0xac,
            scroll: true,
        };
        let state = run(&BrowserState::default(), &[select.clone()]);
        let transition = state.reduce(catalog(), &select);
        assert_eq!(transition.state.selected, None);
        assert_eq!(
            transition.effects,
            vec![
                Effect::WriteFragment(String::new()),
                Effect::SetTitle("CashVM Opcodes | Bitcoin Cash".into()),
            ]
        );
    }

    #[test]
    fn test_select_expands_range() {
        let state = run(&BrowserState::default(), &[Event::ToggleRange(0xE)]);
        let transition = state.reduce(
            catalog(),
            &Event::Select {
                value: 0x14,
                scroll: true,
            },
        );
        assert_eq!(transition.state.expanded, [0x1, 0xE].into());
        assert_eq!(transition.effects.last(), Some(&Effect::ScrollIntoView(0x14)));
    }

    #[test]
    fn test_close() {
        let state = run(&BrowserState::default(), &[Event::FragmentChanged("#OP_ADD".into())]);
        let transition = state.reduce(catalog(), &Event::Close);
        assert_eq!(transition.state.selected, None);
        assert_eq!(transition.effects[0], Effect::WriteFragment(String::new()));

        let idle = BrowserState::default().reduce(catalog(), &Event::Close);
        assert!(idle.effects.is_empty());
    }

    #[test]
    fn test_fragment_never_written_back() {
        let transition =
            BrowserState::default().reduce(catalog(), &Event::FragmentChanged("#op_add".into()));
        assert_eq!(transition.state.selected, Some(0x93));
        assert!(!transition
            .effects
            .iter()
            .any(|effect| matches!(effect, Effect::WriteFragment(_))));
        assert_eq!(transition.effects.last(), Some(&Effect::ScrollIntoView(0x93)));
    }

    #[test]
    fn test_fragment_same_selection_does_not_scroll() {
        let state = run(&BrowserState::default(), &[Event::FragmentChanged("#OP_ADD".into())]);
        let transition = state.reduce(catalog(), &Event::FragmentChanged("#opcode=op_add".into()));
        assert!(transition.effects.is_empty());
    }

    #[test]
    fn test_unresolvable_fragment_clears_selection() {
        let state = run(&BrowserState::default(), &[Event::FragmentChanged("#OP_ADD".into())]);
        let transition = state.reduce(catalog(), &Event::FragmentChanged("#OP_NOPE".into()));
        assert_eq!(transition.state.selected, None);
        assert_eq!(transition.effects, vec![Effect::SetTitle("CashVM Opcodes | Bitcoin Cash".into())]);
    }

    #[test]
    fn test_clear_search_focuses() {
        let state = run(&BrowserState::default(), &[Event::SetSearch("hash".into())]);
        let transition = state.reduce(catalog(), &Event::ClearSearch);
        assert!(transition.state.query.search.is_empty());
        assert_eq!(transition.effects, vec![Effect::FocusSearch]);
    }

    #[test]
    fn test_auto_clear_resets_everything_without_search() {
        // Both filters active and empty search: nothing survives
        let state = run(
            &BrowserState::default(),
            &[
                Event::ToggleYear(ActivationYear::Y2015),
                Event::ToggleCategory(Category::Crypto),
            ],
        );
        assert_eq!(state, BrowserState::default());
    }

    #[test]
    fn test_search_only_without_match_is_kept() {
        let state = run(&BrowserState::default(), &[Event::SetSearch("zzzz-nothing".into())]);
        assert_eq!(state.query.search, "zzzz-nothing");
        assert!(state.matches(catalog()).is_empty());
    }
}
