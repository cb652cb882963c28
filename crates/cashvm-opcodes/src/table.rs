//! The derived 256-row opcode table

use crate::category::{classify, Category};
use crate::revision::Revision;
use crate::specification::{specifications_for, Specification};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// Fallback description for a named opcode without any text
pub const MISSING_DESCRIPTION: &str = "—";

/// Fallback description for a synthesized `OP_UNKNOWN_<n>` codepoint
pub const UNDEFINED_DESCRIPTION: &str = "Undefined/reserved codepoint.";

/// One opcode, fully annotated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpcodeRow {
    /// Byte value (0..=255)
    pub value: u8,
    /// Hex literal, e.g. `0xAC`
    pub byte: String,
    /// Canonical (current revision) name
    pub name: String,
    /// Other names used for this byte, sorted
    pub aliases: Vec<String>,
    /// Human-readable description
    pub description: String,
    /// Category tag
    pub category: Category,
    /// Governing documents, oldest first
    pub specifications: Vec<Specification>,
}

/// Immutable, ordered table of all 256 opcodes
#[derive(Debug)]
pub struct OpcodeTable {
    rows: Vec<OpcodeRow>,
    categories: Vec<Category>,
    // Upper-cased canonical names and aliases -> value
    names: HashMap<String, u8>,
}

impl OpcodeTable {
    /// Derive the table from a current and a legacy revision
    pub fn build(current: &Revision, legacy: &Revision) -> Self {
        let rows: Vec<OpcodeRow> = (0..=u8::MAX)
            .map(|value| build_row(value, current, legacy))
            .collect();

        let mut categories: Vec<Category> = rows.iter().map(|row| row.category).collect();
        categories.sort_by_key(|category| category.as_str());
        categories.dedup();

        let mut names = HashMap::new();
        for row in &rows {
            for name in std::iter::once(&row.name).chain(&row.aliases) {
                names.insert(name.to_ascii_uppercase(), row.value);
            }
        }

        tracing::debug!(
            current = current.id(),
            legacy = legacy.id(),
            categories = categories.len(),
            "built opcode table"
        );

        Self {
            rows,
            categories,
            names,
        }
    }

    /// All rows in ascending byte order
    pub fn rows(&self) -> &[OpcodeRow] {
        &self.rows
    }

    /// Row for a byte value
    pub fn get(&self, value: u8) -> &OpcodeRow {
        &self.rows[usize::from(value)]
    }

    /// Row whose canonical name is exactly `name`
    pub fn by_name(&self, name: &str) -> Option<&OpcodeRow> {
        self.rows.iter().find(|row| row.name == name)
    }

    /// Row for a canonical name or alias, ignoring case
    pub fn resolve(&self, identifier: &str) -> Option<&OpcodeRow> {
        self.names
            .get(&identifier.to_ascii_uppercase())
            .map(|value| self.get(*value))
    }

    /// Row for a `0x`-prefixed byte literal, a name or an alias
    pub fn lookup(&self, identifier: &str) -> Option<&OpcodeRow> {
        let identifier = identifier.trim();
        match identifier
            .strip_prefix("0x")
            .or_else(|| identifier.strip_prefix("0X"))
        {
            Some(hex) => u8::from_str_radix(hex, 16).ok().map(|value| self.get(value)),
            None => self.resolve(identifier),
        }
    }

    /// Distinct categories present, sorted by tag
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}

/// Repair inconsistent unknown-codepoint names (`OP_UNKNOWN189` ->
/// `OP_UNKNOWN_189`).
pub fn normalize_name(name: &str) -> String {
    for prefix in ["OP_UNKNOWN", "UNKNOWN"] {
        if let Some(rest) = name.strip_prefix(prefix) {
            if rest.starts_with(|c: char| c.is_ascii_digit()) {
                return format!("{prefix}_{rest}");
            }
        }
    }
    name.to_string()
}

/// `0x` followed by two uppercase hex digits
pub fn format_byte(value: u8) -> String {
    format!("0x{value:02X}")
}

fn build_row(value: u8, current: &Revision, legacy: &Revision) -> OpcodeRow {
    let name = match current.name_of(value) {
        Some(name) => normalize_name(name),
        None => normalize_name(&format!("OP_UNKNOWN_{value}")),
    };
    let aliases = aliases_for(value, &name, &[current, legacy]);
    let description = describe(&name, &aliases, current, legacy);
    let category = classify(&name);
    let specifications = specifications_for(&name, category);

    OpcodeRow {
        value,
        byte: format_byte(value),
        name,
        aliases,
        description,
        category,
        specifications,
    }
}

fn aliases_for(value: u8, canonical: &str, revisions: &[&Revision]) -> Vec<String> {
    let aliases: BTreeSet<String> = revisions
        .iter()
        .flat_map(|revision| revision.opcodes())
        .filter(|(_, candidate)| *candidate == value)
        .map(|(name, _)| normalize_name(name))
        .filter(|name| name != canonical)
        .collect();
    aliases.into_iter().collect()
}

fn describe(name: &str, aliases: &[String], current: &Revision, legacy: &Revision) -> String {
    let first_alias = |revision: &Revision| {
        aliases
            .iter()
            .find_map(|alias| revision.description(alias))
    };

    let text = current
        .description(name)
        .or_else(|| legacy.description(name))
        .or_else(|| first_alias(current))
        .or_else(|| first_alias(legacy));

    match text {
        Some(text) => text.to_string(),
        None if name.starts_with("OP_UNKNOWN_") => UNDEFINED_DESCRIPTION.to_string(),
        None => MISSING_DESCRIPTION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static CURRENT: Revision = Revision::new(
        "CURRENT",
        &[("OP_NEW", 0x01), ("OP_SAME", 0x02), ("OP_UNKNOWN3", 0x03)],
        &[("OP_SAME", "")],
    );

    static LEGACY: Revision = Revision::new(
        "LEGACY",
        &[
            ("OP_OLD", 0x01),
            ("OP_SAME", 0x02),
            ("OP_ANCIENT", 0x02),
            ("OP_UNKNOWN3", 0x03),
            ("OP_GONE", 0x04),
        ],
        &[
            ("OP_OLD", "Old text."),
            ("OP_ANCIENT", "Ancient text."),
            ("OP_GONE", "Removed."),
        ],
    );

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("OP_UNKNOWN189"), "OP_UNKNOWN_189");
        assert_eq!(normalize_name("UNKNOWN7"), "UNKNOWN_7");
        assert_eq!(normalize_name("OP_UNKNOWN_189"), "OP_UNKNOWN_189");
        assert_eq!(normalize_name("OP_ADD"), "OP_ADD");
    }

    #[test]
    fn test_format_byte() {
        assert_eq!(format_byte(0xac), "0xAC");
        assert_eq!(format_byte(0), "0x00");
    }

    #[test]
    fn test_alias_description_fallback() {
        let table = OpcodeTable::build(&CURRENT, &LEGACY);
        let row = table.get(0x01);
        assert_eq!(row.name, "OP_NEW");
        assert_eq!(row.aliases, vec!["OP_OLD"]);
        assert_eq!(row.description, "Old text.");
    }

    #[test]
    fn test_empty_text_falls_through_to_alias() {
        let table = OpcodeTable::build(&CURRENT, &LEGACY);
        let row = table.get(0x02);
        assert_eq!(row.aliases, vec!["OP_ANCIENT"]);
        assert_eq!(row.description, "Ancient text.");
    }

    #[test]
    fn test_normalized_alias_excluded() {
        let table = OpcodeTable::build(&CURRENT, &LEGACY);
        let row = table.get(0x03);
        assert_eq!(row.name, "OP_UNKNOWN_3");
        assert!(row.aliases.is_empty());
        assert_eq!(row.description, UNDEFINED_DESCRIPTION);
        assert_eq!(row.category, Category::Reserved);
    }

    #[test]
    fn test_synthesized_unknown() {
        let table = OpcodeTable::build(&CURRENT, &LEGACY);
        let row = table.get(0x05);
        assert_eq!(row.name, "OP_UNKNOWN_5");
        assert_eq!(row.description, UNDEFINED_DESCRIPTION);

        // Named only in the legacy revision: synthesized name, legacy alias.
        let row = table.get(0x04);
        assert_eq!(row.name, "OP_UNKNOWN_4");
        assert_eq!(row.aliases, vec!["OP_GONE"]);
        assert_eq!(row.description, "Removed.");
    }

    #[test]
    fn test_named_without_text() {
        static BARE: Revision = Revision::new("BARE", &[("OP_BARE", 0x07)], &[]);
        let table = OpcodeTable::build(&BARE, &BARE);
        assert_eq!(table.get(0x07).description, MISSING_DESCRIPTION);
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let table = OpcodeTable::build(&CURRENT, &LEGACY);
        assert_eq!(table.resolve("op_old").map(|r| r.value), Some(0x01));
        assert_eq!(table.resolve("OP_NEW").map(|r| r.value), Some(0x01));
        assert!(table.resolve("OP_MISSING").is_none());
        assert_eq!(table.by_name("OP_NEW").map(|r| r.value), Some(0x01));
        assert!(table.by_name("OP_OLD").is_none());
    }

    #[test]
    fn test_lookup() {
        let table = OpcodeTable::build(&CURRENT, &LEGACY);
        assert_eq!(table.lookup("0x01").map(|r| r.name.as_str()), Some("OP_NEW"));
        assert_eq!(table.lookup("0XFF").map(|r| r.value), Some(0xff));
        assert_eq!(table.lookup(" op_old ").map(|r| r.value), Some(0x01));
        assert!(table.lookup("0x100").is_none());
        assert!(table.lookup("0x").is_none());
    }
}
