use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Raised for any progression that cannot be parsed. Parsing is all-or-nothing,
/// so no chords are ever looked up once this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    #[error("empty progression")]
    Empty,
    #[error("incorrect format: '{0}' has no '-' or ' ' separator")]
    Malformed(String),
    #[error("{0} isn't an allowed numeral")]
    UnknownNumeral(String),
}

/// Scale degree of a major key, I through VII.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Numeral {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
}

/// Roman spelling and digit for each degree, in degree order. Both directions
/// of the lookup go through this one table.
pub const NUMERALS: [(Numeral, &str, &str); 7] = [
    (Numeral::I, "I", "1"),
    (Numeral::II, "ii", "2"),
    (Numeral::III, "iii", "3"),
    (Numeral::IV, "IV", "4"),
    (Numeral::V, "V", "5"),
    (Numeral::VI, "vi", "6"),
    (Numeral::VII, "VII", "7"),
];

impl Numeral {
    /// Accepts the case-sensitive Roman spelling or the digit "1".."7".
    pub fn parse(token: &str) -> Result<Self, InvalidInputError> {
        NUMERALS
            .iter()
            .find(|(_, roman, digit)| *roman == token || *digit == token)
            .map(|(numeral, _, _)| *numeral)
            .ok_or_else(|| InvalidInputError::UnknownNumeral(token.to_string()))
    }

    /// Zero-based position in a key's row of the diatonic table.
    pub fn degree_index(self) -> usize {
        self as usize
    }

    pub fn as_roman(self) -> &'static str {
        NUMERALS[self.degree_index()].1
    }

    pub fn as_digit(self) -> &'static str {
        NUMERALS[self.degree_index()].2
    }
}

impl FromStr for Numeral {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_roman())
    }
}
