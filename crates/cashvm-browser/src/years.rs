//! Activation years: which upgrade introduced each opcode

use cashvm_opcodes::OpcodeTable;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Year an opcode (or its current behavior) became part of the VM
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u16")]
pub enum ActivationYear {
    /// Original instruction set; everything not claimed by a later year
    Y2009,
    /// BIP 65
    Y2015,
    /// BIP 112
    Y2016,
    /// Opcode restoration and OP_CHECKDATASIG
    Y2018,
    /// OP_REVERSEBYTES
    Y2020,
    /// Native introspection and OP_MUL
    Y2022,
    /// CashTokens
    Y2023,
    /// Loops, functions and bitwise operations
    Y2026,
}

impl ActivationYear {
    /// Every year, oldest first
    pub const ALL: [ActivationYear; 8] = [
        ActivationYear::Y2009,
        ActivationYear::Y2015,
        ActivationYear::Y2016,
        ActivationYear::Y2018,
        ActivationYear::Y2020,
        ActivationYear::Y2022,
        ActivationYear::Y2023,
        ActivationYear::Y2026,
    ];

    /// Calendar year
    pub fn year(self) -> u16 {
        match self {
            ActivationYear::Y2009 => 2009,
            ActivationYear::Y2015 => 2015,
            ActivationYear::Y2016 => 2016,
            ActivationYear::Y2018 => 2018,
            ActivationYear::Y2020 => 2020,
            ActivationYear::Y2022 => 2022,
            ActivationYear::Y2023 => 2023,
            ActivationYear::Y2026 => 2026,
        }
    }

    /// Whether this is the baseline (complement) year
    pub fn is_baseline(self) -> bool {
        self == ActivationYear::Y2009
    }

    /// Canonical names introduced in this year; empty for the baseline
    pub fn opcode_names(self) -> &'static [&'static str] {
        match self {
            ActivationYear::Y2009 => &[],
            ActivationYear::Y2015 => &["OP_CHECKLOCKTIMEVERIFY"],
            ActivationYear::Y2016 => &["OP_CHECKSEQUENCEVERIFY"],
            ActivationYear::Y2018 => &[
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
            ],
            ActivationYear::Y2020 => &["OP_REVERSEBYTES"],
            ActivationYear::Y2022 => &[
                "OP_MUL",
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
            ],
            ActivationYear::Y2023 => &[
                "OP_UTXOTOKENCATEGORY",
                "OP_UTXOTOKENCOMMITMENT",
                "OP_UTXOTOKENAMOUNT",
                "OP_OUTPUTTOKENCATEGORY",
                "OP_OUTPUTTOKENCOMMITMENT",
                "OP_OUTPUTTOKENAMOUNT",
            ],
            ActivationYear::Y2026 => &[
                "OP_BEGIN",
                "OP_UNTIL",
                "OP_DEFINE",
                "OP_INVOKE",
                "OP_LSHIFTNUM",
                "OP_RSHIFTNUM",
                "OP_LSHIFTBIN",
                "OP_RSHIFTBIN",
                "OP_INVERT",
            ],
        }
    }
}

impl From<ActivationYear> for u16 {
    fn from(year: ActivationYear) -> u16 {
        year.year()
    }
}

impl fmt::Display for ActivationYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.year())
    }
}

/// Error returned for a year outside the closed set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown activation year: {0}")]
pub struct ParseYearError(pub String);

impl FromStr for ActivationYear {
    type Err = ParseYearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let year: u16 = s.trim().parse().map_err(|_| ParseYearError(s.to_string()))?;
        ActivationYear::ALL
            .into_iter()
            .find(|candidate| candidate.year() == year)
            .ok_or_else(|| ParseYearError(s.to_string()))
    }
}

/// Byte values grouped by activation year.
///
/// The groups partition `0..=255`: later years claim their named opcodes
/// and the baseline year receives the rest.
#[derive(Debug, Clone)]
pub struct YearIndex {
    sets: [BTreeSet<u8>; 8],
}

impl YearIndex {
    /// Resolve every year's names against `table`.
    ///
    /// Names the table cannot resolve are skipped.
    pub fn build(table: &OpcodeTable) -> Self {
        let mut sets: [BTreeSet<u8>; 8] = Default::default();
        let mut claimed = BTreeSet::new();

        for (slot, year) in ActivationYear::ALL.into_iter().enumerate() {
            if year.is_baseline() {
                continue;
            }
            for name in year.opcode_names() {
                match table.resolve(name) {
                    Some(row) => {
                        sets[slot].insert(row.value);
                        claimed.insert(row.value);
                    }
                    None => tracing::warn!(%year, name, "activation year names unknown opcode"),
                }
            }
        }

        sets[0] = (0..=u8::MAX).filter(|value| !claimed.contains(value)).collect();
        Self { sets }
    }

    /// Byte values introduced in `year`
    pub fn values(&self, year: ActivationYear) -> &BTreeSet<u8> {
        &self.sets[Self::slot(year)]
    }

    /// Union of the values of every year in `years`
    pub fn union<'a, I>(&self, years: I) -> BTreeSet<u8>
    where
        I: IntoIterator<Item = &'a ActivationYear>,
    {
        years
            .into_iter()
            .flat_map(|year| self.values(*year).iter().copied())
            .collect()
    }

    /// Year that introduced `value`
    pub fn year_of(&self, value: u8) -> ActivationYear {
        ActivationYear::ALL
            .into_iter()
            .find(|year| self.values(*year).contains(&value))
            .unwrap_or(ActivationYear::Y2009)
    }

    fn slot(year: ActivationYear) -> usize {
        ActivationYear::ALL
            .iter()
            .position(|candidate| *candidate == year)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cashvm_opcodes::opcodes;

    #[test]
    fn test_years_partition_all_values() {
        let index = YearIndex::build(opcodes());
        let mut seen = BTreeSet::new();
        let mut total = 0;
        for year in ActivationYear::ALL {
            total += index.values(year).len();
            seen.extend(index.values(year).iter().copied());
        }
        assert_eq!(total, 256);
        assert_eq!(seen.len(), 256);
    }

    #[test]
    fn test_named_years_resolve_fully() {
        let index = YearIndex::build(opcodes());
        for year in ActivationYear::ALL.into_iter().filter(|y| !y.is_baseline()) {
            assert_eq!(index.values(year).len(), year.opcode_names().len(), "{year}");
        }
    }

    #[test]
    fn test_year_of() {
        let index = YearIndex::build(opcodes());
        assert_eq!(index.year_of(0xbc), ActivationYear::Y2020);
        assert_eq!(index.year_of(0x93), ActivationYear::Y2009);
        assert_eq!(index.year_of(0x65), ActivationYear::Y2026);
    }

    #[test]
    fn test_parse_year() {
        assert_eq!("2022".parse::<ActivationYear>(), Ok(ActivationYear::Y2022));
        assert!("2021".parse::<ActivationYear>().is_err());
        assert!("soon".parse::<ActivationYear>().is_err());
        assert_eq!(ActivationYear::Y2026.to_string(), "2026");
    }

    #[test]
    fn test_union() {
        let index = YearIndex::build(opcodes());
        let union = index.union(&[ActivationYear::Y2015, ActivationYear::Y2016]);
        assert_eq!(union.into_iter().collect::<Vec<_>>(), vec![0xb1, 0xb2]);
    }
}
