//! # cashvm-browser
//!
//! Interactive browsing over the CashVM opcode table.
//!
//! This crate provides:
//! - Search, category and activation-year filtering
//! - The filter stage and selection state machine with auto-clear
//! - Location fragment parsing and encoding for deep links
//! - Grid layout with collapsible row ranges, cell labels and page titles
//! - A [`Browser`] driver that runs side effects against a [`Surface`]
//!
//! ## Usage
//!
//! ```
//! use cashvm_browser::{Browser, Catalog, Event, MemorySurface};
//!
//! let mut browser = Browser::open(Catalog::global(), MemorySurface::default(), "#OP_CAT");
//! assert_eq!(browser.state().selected, Some(0x7e));
//!
//! browser.dispatch(Event::Close);
//! assert_eq!(browser.surface().fragment, "");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod browser;
pub mod filter;
pub mod fragment;
pub mod grid;
pub mod label;
mod state;
pub mod years;

pub use browser::{Browser, Chip, MemorySurface, Surface, View};
pub use filter::{filter_rows, Query};
pub use fragment::{encode_fragment, parse_fragment, resolve_fragment};
pub use grid::{build_segments, collapsed_range_start, CollapsedRange, Segment, COLLAPSED_RANGES};
pub use label::{format_opcode_label, page_title, BASE_TITLE};
pub use state::{BrowserState, Effect, Event, FilterStage, Transition};
pub use years::{ActivationYear, ParseYearError, YearIndex};

use cashvm_opcodes::{opcodes, OpcodeRow, OpcodeTable};
use std::collections::BTreeSet;
use std::sync::LazyLock;

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| Catalog::new(opcodes()));

/// The opcode table together with its activation-year index
#[derive(Debug)]
pub struct Catalog {
    table: &'static OpcodeTable,
    years: YearIndex,
}

impl Catalog {
    /// Index `table` by activation year
    pub fn new(table: &'static OpcodeTable) -> Self {
        Self {
            years: YearIndex::build(table),
            table,
        }
    }

    /// Process-wide catalog over [`cashvm_opcodes::opcodes`]
    pub fn global() -> &'static Catalog {
        &CATALOG
    }

    /// The table
    pub fn table(&self) -> &'static OpcodeTable {
        self.table
    }

    /// The year index
    pub fn years(&self) -> &YearIndex {
        &self.years
    }

    /// Rows matching `query` and, when non-empty, any of `years`
    pub fn filter(&self, query: &Query, years: &BTreeSet<ActivationYear>) -> Vec<&'static OpcodeRow> {
        let year_values = (!years.is_empty()).then(|| self.years.union(years));
        filter_rows(self.table.rows(), query, year_values.as_ref())
    }
}
