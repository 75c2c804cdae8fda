use crate::input::SurveyTable;
use crate::pipeline::stage1_schema::ItemColumns;

/// Item answers of one respondent; `None` marks a missing answer.
#[derive(Debug, Clone, PartialEq)]
pub struct RespondentItems {
    pub row_index: usize,
    pub x: Vec<Option<f64>>,
    pub y: Vec<Option<f64>>,
}

impl RespondentItems {
    pub fn valid_count(&self) -> usize {
        self.x.iter().chain(&self.y).filter(|v| v.is_some()).count()
    }
}

pub fn run_stage2(table: &SurveyTable, columns: &ItemColumns) -> Vec<RespondentItems> {
    let mut unparsable = 0usize;
    let mut coerce_row = |row: &[String], idxs: &[usize]| -> Vec<Option<f64>> {
        idxs.iter()
            .map(|&idx| {
                let cell = row.get(idx).map(String::as_str).unwrap_or("");
                let value = parse_cell(cell);
                if value.is_none() && !cell.trim().is_empty() {
                    unparsable += 1;
                }
                value
            })
            .collect()
    };

    let mut out = Vec::with_capacity(table.n_rows());
    for (row_index, row) in table.rows.iter().enumerate() {
        let x = coerce_row(row.as_slice(), columns.x.as_slice());
        let y = coerce_row(row.as_slice(), columns.y.as_slice());
        out.push(RespondentItems { row_index, x, y });
    }

    if unparsable > 0 {
        tracing::warn!(cells = unparsable, "non-numeric item answers treated as missing");
    }
    out
}

/// Numeric value of a cell, or `None` for empty, non-numeric or non-finite
/// content.
pub fn parse_cell(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_coerce.rs"]
mod tests;
