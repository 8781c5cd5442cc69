// src/export.rs
use crate::error::Result;
use std::io::Write;
use std::path::Path;

/// Write a projected string matrix as CSV to a file
pub fn write_csv(rows: &[Vec<String>], path: impl AsRef<Path>) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    write_rows(&mut writer, rows)
}

/// Write a projected string matrix as CSV to any writer
pub fn write_csv_to<W: Write>(rows: &[Vec<String>], writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    write_rows(&mut writer, rows)
}

fn write_rows<W: Write>(writer: &mut csv::Writer<W>, rows: &[Vec<String>]) -> Result<()> {
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
