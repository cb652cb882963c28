//! Opcode categories and the rules that assign them

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Opcode category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    /// Small-integer pushes (`OP_0`, `OP_1NEGATE`, `OP_1`..`OP_16`)
    #[serde(rename = "Push/Const (Numeric)")]
    PushNumeric,
    /// Byte-array pushes (`OP_PUSHBYTES_*`, `OP_PUSHDATA_*`)
    #[serde(rename = "Push/Const (Bytes)")]
    PushBytes,
    /// Stack manipulation
    Stack,
    /// Byte-string and bitwise operations
    #[serde(rename = "Binary/Bitwise")]
    Binary,
    /// Numeric operations
    Arithmetic,
    /// Flow control
    Control,
    /// Hashing and signature checking
    #[serde(rename = "Crypto/Sign")]
    Crypto,
    /// Transaction introspection
    Introspection,
    /// Token introspection
    Tokens,
    /// Reserved or unassigned codepoints
    #[serde(rename = "Reserved/Unknown")]
    Reserved,
    /// Anything not matched by another rule
    Misc,
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Category; 11] = [
        Category::PushNumeric,
        Category::PushBytes,
        Category::Stack,
        Category::Binary,
        Category::Arithmetic,
        Category::Control,
        Category::Crypto,
        Category::Introspection,
        Category::Tokens,
        Category::Reserved,
        Category::Misc,
    ];

    /// Canonical tag, e.g. `Push/Const (Numeric)`
    pub fn as_str(self) -> &'static str {
        match self {
            Category::PushNumeric => "Push/Const (Numeric)",
            Category::PushBytes => "Push/Const (Bytes)",
            Category::Stack => "Stack",
            Category::Binary => "Binary/Bitwise",
            Category::Arithmetic => "Arithmetic",
            Category::Control => "Control",
            Category::Crypto => "Crypto/Sign",
            Category::Introspection => "Introspection",
            Category::Tokens => "Tokens",
            Category::Reserved => "Reserved/Unknown",
            Category::Misc => "Misc",
        }
    }

    /// Short chip label, e.g. `Push (Number)`
    pub fn display_name(self) -> &'static str {
        match self {
            Category::PushBytes => "Push (Bytes)",
            Category::PushNumeric => "Push (Number)",
            Category::Binary => "Bitwise",
            Category::Crypto => "Crypto",
            Category::Reserved => "Unknown",
            other => other.as_str(),
        }
    }

    /// Style tone shared by grid cells, chips and the legend
    pub fn tone(self) -> &'static str {
        match self {
            Category::PushNumeric => "push-num",
            Category::PushBytes => "push-byte",
            Category::Stack => "stack",
            Category::Binary => "binary",
            Category::Arithmetic => "arith",
            Category::Control => "control",
            Category::Crypto => "crypto",
            Category::Introspection => "intro",
            Category::Tokens => "token",
            Category::Reserved | Category::Misc => "res",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a category name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Accepts the canonical tag, the short label or the tone, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| {
                [category.as_str(), category.display_name(), category.tone()]
                    .iter()
                    .any(|label| label.eq_ignore_ascii_case(wanted))
            })
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

// Manual pins that win over every other rule.
const OVERRIDES: &[(&str, Category)] = &[
    ("OP_NOP", Category::Control),
    ("OP_CODESEPARATOR", Category::Control),
    ("OP_UTXOTOKENCATEGORY", Category::Introspection),
    ("OP_UTXOTOKENCOMMITMENT", Category::Introspection),
    ("OP_UTXOTOKENAMOUNT", Category::Introspection),
    ("OP_OUTPUTTOKENCATEGORY", Category::Introspection),
    ("OP_OUTPUTTOKENCOMMITMENT", Category::Introspection),
    ("OP_OUTPUTTOKENAMOUNT", Category::Introspection),
    ("OP_CHECKLOCKTIMEVERIFY", Category::Introspection),
    ("OP_CHECKSEQUENCEVERIFY", Category::Introspection),
];

const BYTE_PUSH: &[&str] = &["OP_PUSHDATA_1", "OP_PUSHDATA_2", "OP_PUSHDATA_4"];

const NUMERIC_PUSH: &[&str] = &[
    "OP_0", "OP_1NEGATE", "OP_1", "OP_2", "OP_3", "OP_4", "OP_5", "OP_6", "OP_7", "OP_8", "OP_9",
    "OP_10", "OP_11", "OP_12", "OP_13", "OP_14", "OP_15", "OP_16",
];

const STACK: &[&str] = &[
    "OP_TOALTSTACK",
    "OP_FROMALTSTACK",
    "OP_2DROP",
    "OP_2DUP",
    "OP_3DUP",
    "OP_2OVER",
    "OP_2ROT",
    "OP_2SWAP",
    "OP_IFDUP",
    "OP_DEPTH",
    "OP_DROP",
    "OP_DUP",
    "OP_NIP",
    "OP_OVER",
    "OP_PICK",
    "OP_ROLL",
    "OP_ROT",
    "OP_SWAP",
    "OP_TUCK",
];

const CONTROL: &[&str] = &[
    "OP_NOP",
    "OP_IF",
    "OP_NOTIF",
    "OP_ELSE",
    "OP_ENDIF",
    "OP_VERIFY",
    "OP_RETURN",
    "OP_BEGIN",
    "OP_UNTIL",
    "OP_DEFINE",
    "OP_INVOKE",
];

const BINARY: &[&str] = &[
    "OP_CAT",
    "OP_SPLIT",
    "OP_NUM2BIN",
    "OP_BIN2NUM",
    "OP_SIZE",
    "OP_INVERT",
    "OP_AND",
    "OP_OR",
    "OP_XOR",
    "OP_REVERSEBYTES",
    "OP_EQUAL",
    "OP_EQUALVERIFY",
    "OP_LSHIFTBIN",
    "OP_RSHIFTBIN",
];

const ARITHMETIC: &[&str] = &[
    "OP_1ADD",
    "OP_1SUB",
    "OP_NEGATE",
    "OP_ABS",
    "OP_NOT",
    "OP_0NOTEQUAL",
    "OP_ADD",
    "OP_SUB",
    "OP_MUL",
    "OP_DIV",
    "OP_MOD",
    "OP_LSHIFTNUM",
    "OP_RSHIFTNUM",
    "OP_BOOLAND",
    "OP_BOOLOR",
    "OP_NUMEQUAL",
    "OP_NUMEQUALVERIFY",
    "OP_NUMNOTEQUAL",
    "OP_LESSTHAN",
    "OP_GREATERTHAN",
    "OP_LESSTHANOREQUAL",
    "OP_GREATERTHANOREQUAL",
    "OP_MIN",
    "OP_MAX",
    "OP_WITHIN",
];

const CRYPTO: &[&str] = &[
    "OP_RIPEMD160",
    "OP_SHA1",
    "OP_SHA256",
    "OP_HASH160",
    "OP_HASH256",
    "OP_CODESEPARATOR",
    "OP_CHECKSIG",
    "OP_CHECKSIGVERIFY",
    "OP_CHECKMULTISIG",
    "OP_CHECKMULTISIGVERIFY",
    "OP_CHECKDATASIG",
    "OP_CHECKDATASIGVERIFY",
];

/// Native introspection opcodes (2022)
pub const INTROSPECTION_OPCODES: &[&str] = &[
    "OP_INPUTINDEX",
    "OP_ACTIVEBYTECODE",
    "OP_TXVERSION",
    "OP_TXINPUTCOUNT",
    "OP_TXOUTPUTCOUNT",
    "OP_TXLOCKTIME",
    "OP_UTXOVALUE",
    "OP_UTXOBYTECODE",
    "OP_OUTPOINTTXHASH",
    "OP_OUTPOINTINDEX",
    "OP_INPUTBYTECODE",
    "OP_INPUTSEQUENCENUMBER",
    "OP_OUTPUTVALUE",
    "OP_OUTPUTBYTECODE",
];

/// Token introspection opcodes (2023)
pub const TOKEN_OPCODES: &[&str] = &[
    "OP_UTXOTOKENCATEGORY",
    "OP_UTXOTOKENCOMMITMENT",
    "OP_UTXOTOKENAMOUNT",
    "OP_OUTPUTTOKENCATEGORY",
    "OP_OUTPUTTOKENCOMMITMENT",
    "OP_OUTPUTTOKENAMOUNT",
];

const RESERVED: &[&str] = &[
    "OP_RESERVED",
    "OP_VER",
    "OP_NOP1",
    "OP_NOP4",
    "OP_NOP5",
    "OP_NOP6",
    "OP_NOP7",
    "OP_NOP8",
    "OP_NOP9",
    "OP_NOP10",
];

const INTROSPECTION_PATTERNS: &[&str] = &["TX", "UTXO", "OUTPUT", "INPUT", "OUTPOINT"];

// Evaluated in order; the first set containing the name wins.
const MEMBERSHIP: &[(&[&str], Category)] = &[
    (BYTE_PUSH, Category::PushBytes),
    (NUMERIC_PUSH, Category::PushNumeric),
    (STACK, Category::Stack),
    (CONTROL, Category::Control),
    (BINARY, Category::Binary),
    (ARITHMETIC, Category::Arithmetic),
    (CRYPTO, Category::Crypto),
    (TOKEN_OPCODES, Category::Tokens),
    (INTROSPECTION_OPCODES, Category::Introspection),
    (RESERVED, Category::Reserved),
];

/// Classify a canonical opcode name.
///
/// Rule order is overrides, then explicit membership sets, then name
/// heuristics, then [`Category::Misc`].
pub fn classify(name: &str) -> Category {
    if let Some((_, category)) = OVERRIDES.iter().find(|(pinned, _)| *pinned == name) {
        return *category;
    }

    if let Some((_, category)) = MEMBERSHIP.iter().find(|(set, _)| set.contains(&name)) {
        return *category;
    }

    if name.starts_with("OP_PUSHBYTES") {
        Category::PushBytes
    } else if name.contains("TOKEN") {
        Category::Tokens
    } else if INTROSPECTION_PATTERNS.iter().any(|p| name.contains(p)) {
        Category::Introspection
    } else if name.starts_with("OP_UNKNOWN_") {
        Category::Reserved
    } else {
        Category::Misc
    }
}
