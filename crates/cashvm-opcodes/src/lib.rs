//! # cashvm-opcodes
//!
//! The CashVM opcode table.
//!
//! This crate provides:
//! - The raw BCH 2023 and BCH 2026 revision mappings
//! - Category classification and specification references
//! - The derived, immutable 256-row [`OpcodeTable`]
//!
//! ## Usage
//!
//! ```
//! let table = cashvm_opcodes::opcodes();
//! let row = table.resolve("op_checkdatasig").unwrap();
//! assert_eq!(row.byte, "0xBA");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod revision;
pub mod specification;
mod table;

pub use category::{classify, Category, ParseCategoryError};
pub use revision::{Revision, BCH_2023, BCH_2026};
pub use specification::{specifications_for, SpecDocument, Specification};
pub use table::{
    format_byte, normalize_name, OpcodeRow, OpcodeTable, MISSING_DESCRIPTION,
    UNDEFINED_DESCRIPTION,
};

use std::sync::LazyLock;

static OPCODES: LazyLock<OpcodeTable> = LazyLock::new(|| OpcodeTable::build(&BCH_2026, &BCH_2023));

/// The process-wide table, built from BCH 2026 over BCH 2023 on first use
pub fn opcodes() -> &'static OpcodeTable {
    &OPCODES
}
