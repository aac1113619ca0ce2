//! CSV output formatting for work records and frequency tables.

use std::io::Write;

use serde_json::Value;

use crate::config::fields;
use crate::models::{FrequencyTable, WorkRecord};

/// Header row of every frequency table.
pub const FREQUENCY_HEADER: [&str; 2] = ["Word", "Frequency"];

/// Render one field value as a CSV cell.
///
/// Strings are written verbatim, scalars as their JSON text, `null` and
/// missing fields as empty, and nested arrays/objects as compact JSON.
#[must_use]
pub fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Write records with one column per allow-listed field.
///
/// # Errors
///
/// Returns error if the underlying writer fails.
pub fn write_records<W: Write>(writer: W, papers: &[WorkRecord]) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(fields::KEEP)?;

    for paper in papers {
        wtr.write_record(fields::KEEP.iter().map(|&key| cell(paper.get(key))))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write a frequency table as `Word,Frequency` rows in first-seen order.
///
/// # Errors
///
/// Returns error if the underlying writer fails.
pub fn write_frequencies<W: Write>(writer: W, table: &FrequencyTable) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(FREQUENCY_HEADER)?;

    for (key, count) in table.iter() {
        wtr.write_record([key, count.to_string().as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}
