use std::collections::BTreeSet;
use std::io::Read;

use crate::input::{InputError, SurveyTable};

const BOM: char = '\u{feff}';

pub fn parse_table<R: Read>(reader: R) -> Result<SurveyTable, InputError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns: Vec<String> = csv_reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let name = if idx == 0 {
                name.trim_start_matches(BOM)
            } else {
                name
            };
            name.trim().to_string()
        })
        .collect();
    if columns.is_empty() || columns.iter().all(|c| c.is_empty()) {
        return Err(InputError::Parse("header row is empty".to_string()));
    }

    let mut seen = BTreeSet::new();
    for name in &columns {
        if !name.is_empty() && !seen.insert(name.as_str()) {
            tracing::warn!(column = %name, "duplicate column header; the first occurrence is used");
        }
    }

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        if record.len() != columns.len() {
            tracing::warn!(
                line,
                found = record.len(),
                expected = columns.len(),
                "row width differs from header; padding or truncating"
            );
        }
        let mut row: Vec<String> = record
            .iter()
            .take(columns.len())
            .map(str::to_string)
            .collect();
        row.resize(columns.len(), String::new());
        rows.push(row);
    }

    Ok(SurveyTable { columns, rows })
}
