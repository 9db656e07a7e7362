//! Tabular layer of the FPL stats CLI
//!
//! - `row`: the flattened (player, gameweek) row and the flattening step
//! - `csv_file`: reading and writing the CSV
//! - `analysis`: grouping and ranking used by the charts

pub mod analysis;
pub mod csv_file;
pub mod row;

#[cfg(test)]
pub(crate) mod tests;

use std::path::Path;

use crate::{FplError, Result};

pub use csv_file::{read_csv, read_rows, write_csv, write_rows, DEFAULT_CSV_PATH};
pub use row::{flatten_player, GameweekRow};

/// Rows loaded from a CSV, ready for charting.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    rows: Vec<GameweekRow>,
}

impl Dataset {
    pub fn new(rows: Vec<GameweekRow>) -> Self {
        Self { rows }
    }

    /// Load a CSV written by the extractor.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::new(read_csv(path)?))
    }

    pub fn rows(&self) -> &[GameweekRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Fails with `NoData` when there is nothing to chart.
    pub fn ensure_not_empty(&self) -> Result<()> {
        if self.rows.is_empty() {
            Err(FplError::NoData)
        } else {
            Ok(())
        }
    }

    /// Rows for one player, ordered by gameweek.
    ///
    /// Returns `PlayerNotFound` when no row matches both names.
    pub fn player_rows(&self, first_name: &str, second_name: &str) -> Result<Vec<&GameweekRow>> {
        let mut rows: Vec<&GameweekRow> = self
            .rows
            .iter()
            .filter(|r| r.first_name == first_name && r.second_name == second_name)
            .collect();

        if rows.is_empty() {
            return Err(FplError::PlayerNotFound {
                name: format!("{} {}", first_name, second_name),
            });
        }

        rows.sort_by_key(|r| r.round);
        Ok(rows)
    }
}
