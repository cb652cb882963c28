//! Session driver: commits transitions and hands effects to a surface

use crate::grid::{build_segments, Segment};
use crate::label::page_title;
use crate::state::{BrowserState, Effect, Event, FilterStage};
use crate::years::ActivationYear;
use crate::Catalog;
use cashvm_opcodes::OpcodeRow;
use std::collections::BTreeSet;

/// Rendering side of a session
pub trait Surface {
    /// Perform one effect
    fn apply(&mut self, effect: &Effect);
}

/// Surface that records what it was asked to do
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemorySurface {
    /// Current location fragment
    pub fragment: String,
    /// Current document title
    pub title: String,
    /// Cells scrolled into view, oldest first
    pub scrolled: Vec<u8>,
    /// Number of times the search box was focused
    pub focus_count: usize,
    /// Every effect received, in order
    pub log: Vec<Effect>,
}

impl Surface for MemorySurface {
    fn apply(&mut self, effect: &Effect) {
        match effect {
            Effect::WriteFragment(fragment) => self.fragment = fragment.clone(),
            Effect::SetTitle(title) => self.title = title.clone(),
            Effect::ScrollIntoView(value) => self.scrolled.push(*value),
            Effect::FocusSearch => self.focus_count += 1,
        }
        self.log.push(effect.clone());
    }
}

/// What a chip does when pressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    /// Visible text
    pub label: String,
    /// Whether the filter is on
    pub active: bool,
    /// Style tone, for category chips
    pub tone: Option<&'static str>,
    /// Event raised when pressed
    pub event: Event,
}

/// Everything needed to draw the page
#[derive(Debug, Clone)]
pub struct View<'c> {
    /// Rows matching the current filters, in table order
    pub matches: Vec<&'c OpcodeRow>,
    /// Values to highlight; `None` when no filter is active
    pub highlighted: Option<BTreeSet<u8>>,
    /// Grid layout
    pub segments: Vec<Segment>,
    /// Selected row
    pub selected: Option<&'c OpcodeRow>,
    /// Chip stage
    pub stage: FilterStage,
    /// Chips for the current stage
    pub chips: Vec<Chip>,
    /// Whether the "clear filters" control is shown
    pub show_clear_filters: bool,
    /// Search text
    pub search: String,
    /// Document title
    pub title: String,
}

impl<'c> View<'c> {
    /// Whether `value` should be drawn highlighted
    pub fn is_highlighted(&self, value: u8) -> bool {
        self.highlighted
            .as_ref()
            .map_or(false, |values| values.contains(&value))
    }

    /// Whether `value` should be drawn dimmed
    pub fn is_dimmed(&self, value: u8) -> bool {
        self.highlighted.is_some() && !self.is_highlighted(value)
    }
}

impl BrowserState {
    /// Derive the view model
    pub fn view<'c>(&self, catalog: &'c Catalog) -> View<'c> {
        let matches = self.matches(catalog);
        let highlighted = self
            .is_filtering()
            .then(|| matches.iter().map(|row| row.value).collect());
        let selected = self.selected_row(catalog);

        View {
            highlighted,
            segments: build_segments(&self.expanded),
            selected,
            stage: self.stage,
            chips: self.chips(catalog),
            show_clear_filters: self.stage != FilterStage::Initial || self.has_filters(),
            search: self.query.search.clone(),
            title: page_title(selected),
            matches,
        }
    }

    fn chips(&self, catalog: &Catalog) -> Vec<Chip> {
        match self.stage {
            FilterStage::Initial => vec![
                Chip {
                    label: "Operation Type".into(),
                    active: false,
                    tone: None,
                    event: Event::ShowOperationType,
                },
                Chip {
                    label: "Activation Year".into(),
                    active: false,
                    tone: None,
                    event: Event::ShowActivationYear,
                },
            ],
            FilterStage::OperationType => catalog
                .table()
                .categories()
                .iter()
                .map(|category| Chip {
                    label: category.display_name().into(),
                    active: self.query.categories.contains(category),
                    tone: Some(category.tone()),
                    event: Event::ToggleCategory(*category),
                })
                .collect(),
            FilterStage::ActivationYear => ActivationYear::ALL
                .into_iter()
                .map(|year| Chip {
                    label: year.to_string(),
                    active: self.years.contains(&year),
                    tone: None,
                    event: Event::ToggleYear(year),
                })
                .collect(),
        }
    }
}

/// One viewing session bound to a surface
pub struct Browser<'c, S: Surface> {
    catalog: &'c Catalog,
    state: BrowserState,
    surface: S,
}

impl<'c, S: Surface> Browser<'c, S> {
    /// Start a session from the fragment present at load time.
    ///
    /// The title is always written once on start.
    pub fn open(catalog: &'c Catalog, surface: S, fragment: &str) -> Self {
        let transition =
            BrowserState::default().reduce(catalog, &Event::FragmentChanged(fragment.to_string()));

        let mut browser = Self {
            catalog,
            state: transition.state,
            surface,
        };

        let title = page_title(browser.state.selected_row(catalog));
        let effects = std::iter::once(Effect::SetTitle(title)).chain(
            transition
                .effects
                .into_iter()
                .filter(|effect| !matches!(effect, Effect::SetTitle(_))),
        );
        for effect in effects {
            browser.surface.apply(&effect);
        }

        tracing::debug!(selected = ?browser.state.selected, "browser opened");
        browser
    }

    /// Apply an event, commit the new state, then run its effects
    pub fn dispatch(&mut self, event: Event) {
        let transition = self.state.reduce(self.catalog, &event);
        tracing::debug!(?event, effects = transition.effects.len(), "browser transition");

        self.state = transition.state;
        for effect in &transition.effects {
            self.surface.apply(effect);
        }
    }

    /// Current state
    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    /// Current view model
    pub fn view(&self) -> View<'c> {
        self.state.view(self.catalog)
    }

    /// The surface
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Catalog the session reads from
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cashvm_opcodes::Category;

    #[test]
    fn test_open_without_fragment_writes_base_title() {
        let browser = Browser::open(Catalog::global(), MemorySurface::default(), "");
        assert_eq!(browser.surface().title, "CashVM Opcodes | Bitcoin Cash");
        assert_eq!(browser.surface().log.len(), 1);
        assert_eq!(browser.state().selected, None);
    }

    #[test]
    fn test_open_with_fragment() {
        let browser = Browser::open(Catalog::global(), MemorySurface::default(), "#OP_SHA256");
        let surface = browser.surface();
        assert_eq!(surface.title, "OP_SHA256 | CashVM Opcodes | Bitcoin Cash");
        assert_eq!(surface.scrolled, vec![0xa8]);
        assert!(surface.fragment.is_empty());
        assert_eq!(
            surface.log,
            vec![
                Effect::SetTitle("OP_SHA256 | CashVM Opcodes | Bitcoin Cash".into()),
                Effect::ScrollIntoView(0xa8),
            ]
        );
    }

    #[test]
    fn test_initial_chips() {
        let browser = Browser::open(Catalog::global(), MemorySurface::default(), "");
        let view = browser.view();
        let labels: Vec<&str> = view.chips.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Operation Type", "Activation Year"]);
        assert!(!view.show_clear_filters);
        assert!(view.highlighted.is_none());
    }

    #[test]
    fn test_category_chips() {
        let mut browser = Browser::open(Catalog::global(), MemorySurface::default(), "");
        browser.dispatch(Event::ShowOperationType);
        browser.dispatch(Event::ToggleCategory(Category::Binary));

        let view = browser.view();
        assert!(view.show_clear_filters);
        let bitwise = view.chips.iter().find(|c| c.label == "Bitwise").unwrap();
        assert!(bitwise.active);
        assert_eq!(bitwise.tone, Some("binary"));
        assert!(view.is_highlighted(0x84));
        assert!(view.is_dimmed(0x93));
    }

    #[test]
    fn test_year_chips() {
        let mut browser = Browser::open(Catalog::global(), MemorySurface::default(), "");
        browser.dispatch(Event::ShowActivationYear);
        let view = browser.view();
        assert_eq!(view.chips.len(), 8);
        assert_eq!(view.chips[0].label, "2009");
        assert_eq!(view.chips[7].event, Event::ToggleYear(ActivationYear::Y2026));
    }
}
