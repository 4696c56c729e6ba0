//! Diatonic triads for the twelve major keys and the numeral parser that
//! selects them.
//!
//! [resolve] is the entry point: a raw progression string in, a [Progression]
//! holding the chords for every key out.

mod numeral;
mod resolver;
mod table;

pub use numeral::{InvalidInputError, Numeral, NUMERALS};
pub use resolver::{resolve, tokenize, KeyProgression, Progression};
pub use table::{DiatonicTable, Key, DIATONIC_TRIADS, KEY_COUNT};
