//! 16x16 grid layout with collapsible row ranges

use serde::Serialize;
use std::collections::BTreeSet;

/// Inclusive range of grid rows (high nibbles) that starts collapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CollapsedRange {
    /// First row
    pub start: u8,
    /// Last row
    pub end: u8,
}

impl CollapsedRange {
    /// Label such as `1-3` or `E-F`
    pub fn label(&self) -> String {
        format!("{:X}-{:X}", self.start, self.end)
    }

    /// Whether grid row `row` lies in the range
    pub fn contains(&self, row: u8) -> bool {
        (self.start..=self.end).contains(&row)
    }

    /// Rows covered by the range
    pub fn rows(&self) -> impl Iterator<Item = u8> {
        self.start..=self.end
    }
}

/// Ranges collapsed by default: the byte pushes and the unknown tail
pub const COLLAPSED_RANGES: [CollapsedRange; 2] = [
    CollapsedRange { start: 0x1, end: 0x3 },
    CollapsedRange { start: 0xE, end: 0xF },
];

/// One vertical block of the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Segment {
    /// A plain grid row
    Row {
        /// Row index
        index: u8,
    },
    /// A collapsed range shown as a single placeholder line
    Placeholder {
        /// The range
        range: CollapsedRange,
    },
    /// An expanded range showing all of its rows
    ExpandedRange {
        /// The range
        range: CollapsedRange,
        /// Row indices
        rows: Vec<u8>,
    },
}

/// Start row of the collapsed range containing `value`, if any
pub fn collapsed_range_start(value: u8) -> Option<u8> {
    let row = value >> 4;
    COLLAPSED_RANGES
        .iter()
        .find(|range| range.contains(row))
        .map(|range| range.start)
}

/// Range whose first row is `start`
pub fn range_at(start: u8) -> Option<CollapsedRange> {
    COLLAPSED_RANGES.iter().copied().find(|range| range.start == start)
}

/// Byte values of grid row `row`
pub fn row_values(row: u8) -> impl Iterator<Item = u8> {
    (0..16u8).map(move |column| (row << 4) | column)
}

/// Lay out the sixteen grid rows given the expanded range starts
pub fn build_segments(expanded: &BTreeSet<u8>) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut index = 0u8;

    while index < 16 {
        match range_at(index) {
            Some(range) if expanded.contains(&range.start) => {
                segments.push(Segment::ExpandedRange {
                    range,
                    rows: range.rows().collect(),
                });
                index = range.end + 1;
            }
            Some(range) => {
                segments.push(Segment::Placeholder { range });
                index = range.end + 1;
            }
            None => {
                segments.push(Segment::Row { index });
                index += 1;
            }
        }
    }

    segments
}
