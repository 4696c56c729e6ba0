//! Tabular renderings of a resolved progression for the command line: one row
//! per key, the tonic first and then the chords in input order.

use std::io::Write;

use crate::error::Result;
use crate::theory::{DiatonicTable, Progression};

/// Header row: `key` followed by the numerals as typed.
fn header(progression: &Progression) -> Vec<&str> {
    std::iter::once("key")
        .chain(progression.input_numerals().iter().map(String::as_str))
        .collect()
}

pub fn progression_tsv(progression: &Progression) -> String {
    let mut out = header(progression).join("\t");
    out.push('\n');
    for entry in progression.keys() {
        out.push_str(entry.key);
        for chord in &entry.chords {
            out.push('\t');
            out.push_str(chord);
        }
        out.push('\n');
    }
    out
}

pub fn write_progression_csv<W: Write>(progression: &Progression, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(header(progression))?;
    for entry in progression.keys() {
        csv_writer.write_record(std::iter::once(entry.key).chain(entry.chords.iter().copied()))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// The full diatonic table, degrees I through VII for each key.
pub fn table_tsv() -> String {
    let mut out = String::from("key\tI\tii\tiii\tIV\tV\tvi\tVII\n");
    for key in DiatonicTable.keys() {
        out.push_str(key.tonic());
        for chord in key.chords() {
            out.push('\t');
            out.push_str(chord);
        }
        out.push('\n');
    }
    out
}
