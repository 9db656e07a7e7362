//! CSV sink and source for gameweek rows

use std::{fs::File, io, path::Path};

use csv::{ReaderBuilder, WriterBuilder};

use crate::{core::ensure_parent_dir, dataset::row::GameweekRow, Result};

/// Default output file of an extraction run.
pub const DEFAULT_CSV_PATH: &str = "fpl_players_gameweek_data.csv";

/// Write the header and every row to `writer`.
///
/// The header is written explicitly so an empty run still produces it.
pub fn write_rows<W: io::Write>(writer: W, rows: &[GameweekRow]) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(GameweekRow::COLUMNS)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write rows to `path`, creating parent directories and replacing any existing file.
pub fn write_csv(path: &Path, rows: &[GameweekRow]) -> Result<()> {
    ensure_parent_dir(path)?;
    write_rows(File::create(path)?, rows)
}

/// Read rows back by header name.
pub fn read_rows<R: io::Read>(reader: R) -> Result<Vec<GameweekRow>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let mut rows = Vec::new();
    for record in rdr.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

pub fn read_csv(path: &Path) -> Result<Vec<GameweekRow>> {
    read_rows(File::open(path)?)
}
