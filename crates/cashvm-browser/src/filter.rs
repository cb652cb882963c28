//! Row filtering by search text, category and activation year

use cashvm_opcodes::{Category, OpcodeRow};
use std::collections::BTreeSet;

/// Search text and category filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Free text, matched against `"<name> <description>"` ignoring case
    pub search: String,
    /// Active categories, in the order they were enabled
    pub categories: Vec<Category>,
}

impl Query {
    /// Query with search text only
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: text.into(),
            categories: Vec::new(),
        }
    }

    /// Trimmed, lower-cased search text
    pub fn needle(&self) -> String {
        self.search.trim().to_lowercase()
    }

    /// Whether the search text is non-blank
    pub fn has_search(&self) -> bool {
        !self.search.trim().is_empty()
    }
}

/// Filter `rows`, preserving their order.
///
/// `year_values` is the union of the selected activation years' byte
/// values, or `None` when no year is selected. Every inactive predicate
/// passes all rows.
pub fn filter_rows<'t>(
    rows: &'t [OpcodeRow],
    query: &Query,
    year_values: Option<&BTreeSet<u8>>,
) -> Vec<&'t OpcodeRow> {
    let needle = query.needle();

    rows.iter()
        .filter(|row| query.categories.is_empty() || query.categories.contains(&row.category))
        .filter(|row| year_values.map_or(true, |values| values.contains(&row.value)))
        .filter(|row| needle.is_empty() || matches_text(row, &needle))
        .collect()
}

fn matches_text(row: &OpcodeRow, needle: &str) -> bool {
    format!("{} {}", row.name, row.description)
        .to_lowercase()
        .contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cashvm_opcodes::opcodes;

    #[test]
    fn test_empty_query_keeps_everything() {
        let rows = opcodes().rows();
        let result = filter_rows(rows, &Query::default(), None);
        assert_eq!(result.len(), 256);
        assert!(result.iter().zip(rows).all(|(a, b)| a.value == b.value));
    }

    #[test]
    fn test_search_is_trimmed_and_case_folded() {
        let rows = opcodes().rows();
        let result = filter_rows(rows, &Query::search("  CheckDataSig "), None);
        let names: Vec<&str> = result.iter().map(|r| r.name.as_str()).collect();
        assert!(names.contains(&"OP_CHECKDATASIG"));
        assert!(names.contains(&"OP_CHECKDATASIGVERIFY"));
    }

    #[test]
    fn test_category_filter() {
        let query = Query {
            search: String::new(),
            categories: vec![Category::Crypto],
        };
        let result = filter_rows(opcodes().rows(), &query, None);
        assert!(!result.is_empty());
        assert!(result.iter().all(|r| r.category == Category::Crypto));
    }

    #[test]
    fn test_year_values() {
        let values: BTreeSet<u8> = [0x7e, 0xac].into();
        let result = filter_rows(opcodes().rows(), &Query::default(), Some(&values));
        let found: Vec<u8> = result.iter().map(|r| r.value).collect();
        assert_eq!(found, vec![0x7e, 0xac]);
    }

    #[test]
    fn test_blank_search_is_inactive() {
        assert!(!Query::search("   ").has_search());
        let result = filter_rows(opcodes().rows(), &Query::search("   "), None);
        assert_eq!(result.len(), 256);
    }
}
