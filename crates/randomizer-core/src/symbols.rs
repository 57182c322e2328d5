use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identifier of a fixed symbol set.
///
/// The derived ordering follows declaration order, which is also the order in
/// which [`concatenate`] appends the sets.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SymbolSetId {
    Uppercase,
    Lowercase,
    Digits,
    Hexadecimal,
    Minus,
    Underscore,
    Space,
    Special,
    Brackets,
}

/// A named character class usable as a sampling alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolSet {
    pub id: SymbolSetId,
    pub display_name: &'static str,
    pub symbols: &'static str,
}

const SYMBOL_SETS: &[SymbolSet] = &[
    SymbolSet {
        id: SymbolSetId::Uppercase,
        display_name: "Uppercase",
        symbols: "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    },
    SymbolSet {
        id: SymbolSetId::Lowercase,
        display_name: "Lowercase",
        symbols: "abcdefghijklmnopqrstuvwxyz",
    },
    SymbolSet {
        id: SymbolSetId::Digits,
        display_name: "Digits",
        symbols: "0123456789",
    },
    SymbolSet {
        id: SymbolSetId::Hexadecimal,
        display_name: "Hexadecimal",
        symbols: "0123456789ABCDEF",
    },
    SymbolSet {
        id: SymbolSetId::Minus,
        display_name: "Minus",
        symbols: "-",
    },
    SymbolSet {
        id: SymbolSetId::Underscore,
        display_name: "Underscore",
        symbols: "_",
    },
    SymbolSet {
        id: SymbolSetId::Space,
        display_name: "Space",
        symbols: " ",
    },
    SymbolSet {
        id: SymbolSetId::Special,
        display_name: "Special",
        symbols: "!@#$%^&*",
    },
    SymbolSet {
        id: SymbolSetId::Brackets,
        display_name: "Brackets",
        symbols: "()[]{}<>",
    },
];

impl SymbolSetId {
    /// All symbol set ids in declaration order.
    pub fn all() -> impl Iterator<Item = SymbolSetId> {
        SYMBOL_SETS.iter().map(|set| set.id)
    }

    pub fn symbol_set(self) -> &'static SymbolSet {
        // The table holds exactly one entry per variant, in variant order.
        &SYMBOL_SETS[self as usize]
    }

    pub fn display_name(self) -> &'static str {
        self.symbol_set().display_name
    }

    pub fn symbols(self) -> &'static str {
        self.symbol_set().symbols
    }
}

impl fmt::Display for SymbolSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for SymbolSetId {
    type Err = Error;

    /// Looks a set up by display name, ignoring case and surrounding whitespace.
    fn from_str(name: &str) -> Result<Self> {
        let name = name.trim();
        SYMBOL_SETS
            .iter()
            .find(|set| set.display_name.eq_ignore_ascii_case(name))
            .map(|set| set.id)
            .ok_or_else(|| Error::UnknownSymbolSet(name.to_string()))
    }
}

/// Concatenates the symbols of every given set in declaration order.
///
/// Symbols shared by several sets are kept once per set, so they are sampled
/// proportionally more often.
pub fn concatenate(sets: &BTreeSet<SymbolSetId>) -> String {
    sets.iter().map(|id| id.symbols()).collect()
}

/// Concatenates symbol sets given by display name.
pub fn concatenate_named<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<String> {
    let sets = names
        .into_iter()
        .map(SymbolSetId::from_str)
        .collect::<Result<BTreeSet<_>>>()?;
    Ok(concatenate(&sets))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_variant_order() {
        for (index, set) in SYMBOL_SETS.iter().enumerate() {
            assert_eq!(set.id as usize, index);
        }
    }
}
