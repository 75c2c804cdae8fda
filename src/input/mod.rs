use std::path::Path;

use thiserror::Error;

pub mod reader;
pub mod table;

use reader::open_maybe_gz;
use table::parse_table;

/// Raw survey export: trimmed header names plus string cells, one row per
/// respondent. Every row has exactly `columns.len()` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SurveyTable {
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.columns.iter().position(|c| c == name)
    }
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
}

pub fn load_survey(path: &Path) -> Result<SurveyTable, InputError> {
    let reader = open_maybe_gz(path)?;
    let table = parse_table(reader)?;
    tracing::info!(
        path = %path.display(),
        rows = table.n_rows(),
        columns = table.columns.len(),
        "loaded survey export"
    );
    Ok(table)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
