//! Raw opcode assignments per instruction set revision.
//!
//! A [`Revision`] is an opaque, read-only pair of mappings:
//! `name -> byte value` and `name -> description`. The table builder
//! consults the current revision first and falls back to the legacy one.

mod bch2023;
mod bch2026;

pub use bch2023::BCH_2023;
pub use bch2026::BCH_2026;

/// One dated snapshot of the instruction set.
#[derive(Debug)]
pub struct Revision {
    id: &'static str,
    opcodes: &'static [(&'static str, u8)],
    descriptions: &'static [(&'static str, &'static str)],
}

impl Revision {
    /// Create a revision from raw name/value and name/description pairs
    pub const fn new(
        id: &'static str,
        opcodes: &'static [(&'static str, u8)],
        descriptions: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            id,
            opcodes,
            descriptions,
        }
    }

    /// Revision identifier (e.g. `BCH_2026`)
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// All `(name, value)` assignments, in declaration order
    pub fn opcodes(&self) -> impl Iterator<Item = (&'static str, u8)> + '_ {
        self.opcodes.iter().copied()
    }

    /// Byte value assigned to `name`
    pub fn value_of(&self, name: &str) -> Option<u8> {
        self.opcodes
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, value)| *value)
    }

    /// Name assigned to `value`, if any
    pub fn name_of(&self, value: u8) -> Option<&'static str> {
        self.opcodes
            .iter()
            .find(|(_, candidate)| *candidate == value)
            .map(|(name, _)| *name)
    }

    /// Description text for `name`; empty text counts as missing
    pub fn description(&self, name: &str) -> Option<&'static str> {
        self.descriptions
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, text)| *text)
            .filter(|text| !text.is_empty())
    }
}
