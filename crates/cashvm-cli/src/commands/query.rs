//! Table queries: table, show, search, categories

use std::collections::BTreeSet;

use cashvm_browser::{ActivationYear, Catalog, Query};
use cashvm_opcodes::{Category, OpcodeRow};
use serde_json::json;

use crate::render::{render_detail, render_rows};
use crate::{output::Output, CliError};

/// Print every row
pub fn table(catalog: &Catalog, json: bool) -> Result<(), CliError> {
    let rows: Vec<&OpcodeRow> = catalog.table().rows().iter().collect();
    Output::new(json)
        .field("opcodes", &rows)
        .message(render_rows(&rows).trim_end())
        .print()
}

/// Print one row resolved by name, alias or `0x` literal
pub fn show(catalog: &Catalog, id: &str, json: bool) -> Result<(), CliError> {
    let row = catalog
        .table()
        .lookup(id)
        .ok_or_else(|| CliError::UnknownOpcode(id.to_string()))?;
    let year = catalog.years().year_of(row.value);

    Output::new(json)
        .field("opcode", row)
        .field("activation_year", &year)
        .message(render_detail(catalog, row).trim_end())
        .print()
}

/// Print the rows matching a search with optional filters
pub fn search(
    catalog: &Catalog,
    text: &str,
    categories: Vec<Category>,
    years: Vec<ActivationYear>,
    json: bool,
) -> Result<(), CliError> {
    let query = Query {
        search: text.to_string(),
        categories,
    };
    let years: BTreeSet<ActivationYear> = years.into_iter().collect();
    let rows = catalog.filter(&query, &years);
    tracing::debug!(search = text, matches = rows.len(), "search");

    let mut message = render_rows(&rows);
    message.push_str(&format!("{} matching opcodes", rows.len()));

    Output::new(json)
        .field("count", &rows.len())
        .field("opcodes", &rows)
        .message(&message)
        .print()
}

/// Print the categories present in the table with their row counts
pub fn categories(catalog: &Catalog, json: bool) -> Result<(), CliError> {
    let table = catalog.table();
    let counts: Vec<(Category, usize)> = table
        .categories()
        .iter()
        .map(|category| {
            let count = table
                .rows()
                .iter()
                .filter(|row| row.category == *category)
                .count();
            (*category, count)
        })
        .collect();

    let entries: Vec<_> = counts
        .iter()
        .map(|(category, count)| {
            json!({
                "category": category.as_str(),
                "label": category.display_name(),
                "count": count,
            })
        })
        .collect();
    let message = counts
        .iter()
        .map(|(category, count)| format!("{:<22} {:>3}  {}", category.as_str(), count, category.display_name()))
        .collect::<Vec<_>>()
        .join("\n");

    Output::new(json)
        .field("categories", &entries)
        .message(&message)
        .print()
}
