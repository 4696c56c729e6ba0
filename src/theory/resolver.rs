use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;

use super::numeral::{InvalidInputError, Numeral};
use super::table::{DiatonicTable, KEY_COUNT};

/// Chords of a progression in one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyProgression {
    pub key: &'static str,
    pub chords: Vec<&'static str>,
}

/// A progression resolved in all twelve major keys, in table order.
///
/// Serializes as a list whose first entry is `{"input_numerals": [...]}`
/// followed by one `{"key": .., "chords": [..]}` entry per key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progression {
    input_numerals: Vec<String>,
    degrees: Vec<Numeral>,
    keys: Vec<KeyProgression>,
}

impl Progression {
    /// Tokens exactly as typed, so "1" stays "1" rather than becoming "I".
    pub fn input_numerals(&self) -> &[String] {
        &self.input_numerals
    }

    pub fn degrees(&self) -> &[Numeral] {
        &self.degrees
    }

    pub fn keys(&self) -> &[KeyProgression] {
        &self.keys
    }

    pub fn key(&self, tonic: &str) -> Option<&KeyProgression> {
        self.keys.iter().find(|entry| entry.key == tonic)
    }
}

impl Serialize for Progression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Header<'a> {
            input_numerals: &'a [String],
        }

        let mut seq = serializer.serialize_seq(Some(self.keys.len() + 1))?;
        seq.serialize_element(&Header {
            input_numerals: &self.input_numerals,
        })?;
        for entry in &self.keys {
            seq.serialize_element(entry)?;
        }
        seq.end()
    }
}

/// Splits a trimmed progression on '-' if present, otherwise on ' '. Input
/// without either separator is only accepted when it is a single character.
///
/// Separators are not collapsed: "I  V" yields an empty middle token, which
/// [resolve] then rejects.
pub fn tokenize(input: &str) -> Result<Vec<&str>, InvalidInputError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(InvalidInputError::Empty);
    }

    if input.contains('-') {
        Ok(input.split('-').collect())
    } else if input.contains(' ') {
        Ok(input.split(' ').collect())
    } else if input.chars().count() == 1 {
        Ok(vec![input])
    } else {
        Err(InvalidInputError::Malformed(input.to_string()))
    }
}

/// Resolves a progression such as `"I V vi IV"` or `"1-5-6-4"` into its
/// triads in every major key.
///
/// Fails on the first token that is not a recognized numeral.
pub fn resolve(input: &str) -> Result<Progression, InvalidInputError> {
    let tokens = tokenize(input)?;
    let degrees = tokens
        .iter()
        .map(|token| Numeral::parse(token))
        .collect::<Result<Vec<_>, _>>()?;

    let mut keys = Vec::with_capacity(KEY_COUNT);
    for key in DiatonicTable.keys() {
        keys.push(KeyProgression {
            key: key.tonic(),
            chords: degrees.iter().map(|numeral| key.chord(*numeral)).collect(),
        });
    }

    Ok(Progression {
        input_numerals: tokens.into_iter().map(str::to_string).collect(),
        degrees,
        keys,
    })
}
