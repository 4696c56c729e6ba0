//! The diatonic triad table: one row per major key, ordered around the circle
//! of fifths from C, each row holding the triads on degrees I through VII.

use super::numeral::Numeral;

pub const KEY_COUNT: usize = 12;

pub static DIATONIC_TRIADS: [[&str; 7]; KEY_COUNT] = [
    ["C", "Dm", "Em", "F", "G", "Am", "Bdim"],
    ["G", "Am", "Bm", "C", "D", "Em", "F#dim"],
    ["D", "Em", "F#m", "G", "A", "Bm", "C#dim"],
    ["A", "Bm", "C#m", "D", "E", "F#m", "G#dim"],
    ["E", "F#m", "G#m", "A", "B", "C#m", "D#dim"],
    ["B", "C#m", "D#m", "E", "F#", "G#m", "A#dim"],
    ["F#", "G#m", "A#m", "B", "C#", "D#m", "E#dim"],
    ["Db", "Ebm", "Fm", "Gb", "Ab", "Bbm", "Cdim"],
    ["Ab", "Bbm", "Cm", "Db", "Eb", "Fm", "Gdim"],
    ["Eb", "Fm", "Gm", "Ab", "Bb", "Cm", "Ddim"],
    ["Bb", "Cm", "Dm", "Eb", "F", "Gm", "Adim"],
    ["F", "Gm", "Am", "Bb", "C", "Dm", "Edim"],
];

/// Read-only view over [DIATONIC_TRIADS].
#[derive(Debug, Clone, Copy, Default)]
pub struct DiatonicTable;

impl DiatonicTable {
    pub fn keys(self) -> impl ExactSizeIterator<Item = Key> {
        DIATONIC_TRIADS.iter().map(|row| Key { row })
    }

    /// Looks a key up by its tonic spelling as it appears in the table ("F#", "Db").
    pub fn key(self, tonic: &str) -> Option<Key> {
        self.keys().find(|key| key.tonic() == tonic)
    }
}

/// One major key's row of triads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    row: &'static [&'static str; 7],
}

impl Key {
    /// The tonic triad doubles as the key's display name.
    pub fn tonic(&self) -> &'static str {
        self.row[0]
    }

    pub fn chord(&self, numeral: Numeral) -> &'static str {
        self.row[numeral.degree_index()]
    }

    pub fn chords(&self) -> &'static [&'static str; 7] {
        self.row
    }
}
