//! Plain-text rendering for the terminal

use cashvm_browser::{grid::row_values, Catalog, Segment, View};
use cashvm_opcodes::OpcodeRow;
use std::fmt::Write;

const NAME_WIDTH: usize = 26;
const CATEGORY_WIDTH: usize = 20;

/// One line per row: byte, name, category, description
pub fn render_rows(rows: &[&OpcodeRow]) -> String {
    let mut out = String::new();
    for row in rows {
        let _ = writeln!(
            out,
            "{}  {:<NAME_WIDTH$}  {:<CATEGORY_WIDTH$}  {}",
            row.byte,
            row.name,
            row.category.as_str(),
            row.description
        );
    }
    out
}

/// Full description of one opcode
pub fn render_detail(catalog: &Catalog, row: &OpcodeRow) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", row.name, row.byte);
    let _ = writeln!(out, "Category:   {}", row.category.display_name());
    let _ = writeln!(out, "Activation: {}", catalog.years().year_of(row.value));
    if !row.aliases.is_empty() {
        let _ = writeln!(out, "Aliases:    {}", row.aliases.join(", "));
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", row.description);
    let _ = writeln!(out);
    let _ = writeln!(out, "Specifications:");
    for spec in &row.specifications {
        let _ = writeln!(out, "  - {}: {}", spec.label, spec.url);
    }
    out
}

/// The 16x16 grid.
///
/// Cells show the low byte in hex; `[..]` marks the selection and `.`
/// marks rows filtered out.
pub fn render_grid(view: &View<'_>) -> String {
    let mut out = String::from("    ");
    for column in 0..16u8 {
        let _ = write!(out, "  {column:X} ");
    }
    out.push('\n');

    for segment in &view.segments {
        match segment {
            Segment::Row { index } => render_grid_row(&mut out, view, *index),
            Segment::Placeholder { range } => {
                let _ = writeln!(out, "{:<4}  ... rows {} collapsed ...", range.label(), range.label());
            }
            Segment::ExpandedRange { rows, .. } => {
                for index in rows {
                    render_grid_row(&mut out, view, *index);
                }
            }
        }
    }
    out
}

fn render_grid_row(out: &mut String, view: &View<'_>, index: u8) {
    let _ = write!(out, "{index:X}_  ");
    let selected = view.selected.map(|row| row.value);
    for value in row_values(index) {
        if selected == Some(value) {
            let _ = write!(out, "[{value:02x}]");
        } else if view.is_dimmed(value) {
            out.push_str("  . ");
        } else {
            let _ = write!(out, " {value:02x} ");
        }
    }
    out.push('\n');
}

/// Chips, with the active ones starred
pub fn render_chips(view: &View<'_>) -> String {
    let chips: Vec<String> = view
        .chips
        .iter()
        .map(|chip| {
            if chip.active {
                format!("*{}*", chip.label)
            } else {
                chip.label.clone()
            }
        })
        .collect();
    let mut line = format!("Filters: {}", chips.join(" | "));
    if view.show_clear_filters {
        line.push_str("  (clear)");
    }
    line
}
