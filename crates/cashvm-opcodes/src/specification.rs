//! Specification documents governing opcode semantics

use crate::category::{Category, INTROSPECTION_OPCODES, TOKEN_OPCODES};
use serde::Serialize;

/// A reference to an external specification document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Specification {
    /// Short label, e.g. `BigInt CHIP`
    pub label: &'static str,
    /// Document URL
    pub url: &'static str,
}

/// Known specification documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecDocument {
    /// VM limits (applies to every opcode)
    Limits,
    /// OP_CHECKLOCKTIMEVERIFY
    Bip65,
    /// OP_CHECKSEQUENCEVERIFY
    Bip112,
    /// Native introspection
    Introspection,
    /// OP_MUL and 64-bit integers
    OpMul,
    /// CashTokens
    CashTokens,
    /// Arbitrary-precision arithmetic
    BigInt,
    /// OP_BEGIN / OP_UNTIL
    Loops,
    /// OP_DEFINE / OP_INVOKE
    Functions,
    /// Shifts and OP_INVERT
    Bitwise,
    /// OP_CHECKDATASIG(VERIFY)
    CheckDataSig,
    /// Opcodes re-enabled in May 2018
    OpcodeRestoration,
    /// OP_REVERSEBYTES
    ReverseBytes,
}

impl SpecDocument {
    /// Label and URL of this document
    pub fn specification(self) -> Specification {
        let (label, url) = match self {
            SpecDocument::Limits => ("Limits CHIP", "https://github.com/bitjson/bch-vm-limits"),
            SpecDocument::Bip65 => (
                "BIP 65",
                "https://github.com/bitjson/bips/blob/master/bip-0065.mediawiki",
            ),
            SpecDocument::Bip112 => (
                "BIP 112",
                "https://github.com/bitjson/bips/blob/master/bip-0112.mediawiki",
            ),
            SpecDocument::Introspection => (
                "Introspection CHIP",
                "https://github.com/bitjson/bch-2022/blob/master/CHIP-2021-02-Add-Native-Introspection-Opcodes.md",
            ),
            SpecDocument::OpMul => (
                "OP_MUL CHIP",
                "https://github.com/bitjson/bch-2022/blob/master/CHIP-2021-02-Bigger-Script-Integers.md",
            ),
            SpecDocument::CashTokens => ("CashTokens CHIP", "https://cashtokens.org/docs/spec/chip"),
            SpecDocument::BigInt => ("BigInt CHIP", "https://github.com/bitjson/bch-bigint"),
            SpecDocument::Loops => ("Loops CHIP", "https://github.com/bitjson/bch-loops/"),
            SpecDocument::Functions => ("Functions CHIP", "https://github.com/bitjson/bch-functions/"),
            SpecDocument::Bitwise => ("Bitwise CHIP", "https://github.com/bitjson/bch-bitwise/"),
            SpecDocument::CheckDataSig => (
                "OP_CHECKDATASIG Specification",
                "https://upgradespecs.bitcoincashnode.org/op_checkdatasig/",
            ),
            SpecDocument::OpcodeRestoration => (
                "2018 Opcode Restoration",
                "https://upgradespecs.bitcoincashnode.org/may-2018-reenabled-opcodes/",
            ),
            SpecDocument::ReverseBytes => (
                "OP_REVERSEBYTES Specification",
                "https://upgradespecs.bitcoincashnode.org/2020-05-15-op_reversebytes/",
            ),
        };
        Specification { label, url }
    }

    /// Chronological sort key (year * 10 + ordinal within the year)
    pub fn priority(self) -> u32 {
        match self {
            SpecDocument::Bip65 => 20150,
            SpecDocument::Bip112 => 20160,
            SpecDocument::OpcodeRestoration => 20180,
            SpecDocument::CheckDataSig => 20181,
            SpecDocument::ReverseBytes => 20200,
            SpecDocument::Introspection => 20220,
            SpecDocument::OpMul => 20221,
            SpecDocument::CashTokens => 20230,
            SpecDocument::Limits => 20250,
            SpecDocument::Loops => 20260,
            SpecDocument::Functions => 20261,
            SpecDocument::Bitwise => 20262,
            SpecDocument::BigInt => 20269,
        }
    }
}

const LOOPS_OPCODES: &[&str] = &["OP_BEGIN", "OP_UNTIL"];
const FUNCTIONS_OPCODES: &[&str] = &["OP_DEFINE", "OP_INVOKE"];
const BITWISE_OPCODES: &[&str] = &[
    "OP_LSHIFTNUM",
    "OP_RSHIFTNUM",
    "OP_LSHIFTBIN",
    "OP_RSHIFTBIN",
    "OP_INVERT",
];
const RESTORED_2018: &[&str] = &[
    "OP_CAT",
    "OP_SPLIT",
    "OP_AND",
    "OP_OR",
    "OP_XOR",
    "OP_DIV",
    "OP_MOD",
    "OP_NUM2BIN",
    "OP_BIN2NUM",
    "OP_CHECKDATASIG",
    "OP_CHECKDATASIGVERIFY",
];

/// Documents governing `name`, deduplicated by URL and sorted by
/// priority, then label.
pub fn specifications_for(name: &str, category: Category) -> Vec<Specification> {
    let mut documents = vec![SpecDocument::Limits];
    let mut append = |document: SpecDocument| {
        let url = document.specification().url;
        if !documents.iter().any(|d| d.specification().url == url) {
            documents.push(document);
        }
    };

    if name == "OP_CHECKLOCKTIMEVERIFY" {
        append(SpecDocument::Bip65);
    }
    if name == "OP_CHECKSEQUENCEVERIFY" {
        append(SpecDocument::Bip112);
    }
    if INTROSPECTION_OPCODES.contains(&name) {
        append(SpecDocument::Introspection);
    }
    if TOKEN_OPCODES.contains(&name) {
        append(SpecDocument::CashTokens);
    }
    if category == Category::Arithmetic {
        append(SpecDocument::BigInt);
    }
    if name == "OP_MUL" {
        append(SpecDocument::OpMul);
    }
    if LOOPS_OPCODES.contains(&name) {
        append(SpecDocument::Loops);
    }
    if FUNCTIONS_OPCODES.contains(&name) {
        append(SpecDocument::Functions);
    }
    if BITWISE_OPCODES.contains(&name) {
        append(SpecDocument::Bitwise);
    }
    if name == "OP_REVERSEBYTES" {
        append(SpecDocument::ReverseBytes);
    }
    if name == "OP_CHECKDATASIG" || name == "OP_CHECKDATASIGVERIFY" {
        append(SpecDocument::CheckDataSig);
    }
    // OP_CHECKDATASIG is covered by its own document instead.
    if RESTORED_2018.contains(&name) && name != "OP_CHECKDATASIG" {
        append(SpecDocument::OpcodeRestoration);
    }

    documents.sort_by(|a, b| {
        a.priority()
            .cmp(&b.priority())
            .then_with(|| a.specification().label.cmp(b.specification().label))
    });
    documents.into_iter().map(SpecDocument::specification).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(name: &str, category: Category) -> Vec<&'static str> {
        specifications_for(name, category)
            .into_iter()
            .map(|s| s.label)
            .collect()
    }

    #[test]
    fn test_baseline_only() {
        assert_eq!(labels("OP_DUP", Category::Stack), vec!["Limits CHIP"]);
    }

    #[test]
    fn test_mul_sorted_chronologically() {
        assert_eq!(
            labels("OP_MUL", Category::Arithmetic),
            vec!["OP_MUL CHIP", "Limits CHIP", "BigInt CHIP"]
        );
    }

    #[test]
    fn test_restoration_and_checkdatasig() {
        assert_eq!(
            labels("OP_CHECKDATASIG", Category::Crypto),
            vec!["OP_CHECKDATASIG Specification", "Limits CHIP"]
        );
        assert_eq!(
            labels("OP_CHECKDATASIGVERIFY", Category::Crypto),
            vec![
                "2018 Opcode Restoration",
                "OP_CHECKDATASIG Specification",
                "Limits CHIP"
            ]
        );
        assert_eq!(
            labels("OP_DIV", Category::Arithmetic),
            vec!["2018 Opcode Restoration", "Limits CHIP", "BigInt CHIP"]
        );
    }

    #[test]
    fn test_locktime_documents() {
        assert_eq!(
            labels("OP_CHECKLOCKTIMEVERIFY", Category::Introspection),
            vec!["BIP 65", "Limits CHIP"]
        );
        assert_eq!(
            labels("OP_CHECKSEQUENCEVERIFY", Category::Introspection),
            vec!["BIP 112", "Limits CHIP"]
        );
    }

    #[test]
    fn test_2026_documents() {
        assert_eq!(
            labels("OP_LSHIFTNUM", Category::Arithmetic),
            vec!["Limits CHIP", "Bitwise CHIP", "BigInt CHIP"]
        );
        assert_eq!(
            labels("OP_BEGIN", Category::Control),
            vec!["Limits CHIP", "Loops CHIP"]
        );
        assert_eq!(
            labels("OP_UTXOTOKENAMOUNT", Category::Introspection),
            vec!["CashTokens CHIP", "Limits CHIP"]
        );
    }
}
