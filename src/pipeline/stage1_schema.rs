use std::fmt;

use crate::input::SurveyTable;
use crate::instrument::{Instrument, ItemBlock};

/// Column positions of every instrument item, in instrument order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemColumns {
    pub x: Vec<usize>,
    pub y: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingColumns {
    pub block_id: String,
    pub block_label: String,
    pub columns: Vec<String>,
}

/// Items of the instrument that the export header does not carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaReport {
    pub x: MissingColumns,
    pub y: MissingColumns,
}

impl SchemaReport {
    pub fn missing_count(&self) -> usize {
        self.x.columns.len() + self.y.columns.len()
    }
}

impl fmt::Display for SchemaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} required survey column(s) not found in the CSV header",
            self.missing_count()
        )?;
        for block in [&self.x, &self.y] {
            writeln!(
                f,
                "missing {} columns ({}): {:?}",
                block.block_id, block.block_label, block.columns
            )?;
        }
        write!(
            f,
            "make sure the question texts were not edited before exporting"
        )
    }
}

pub fn run_stage1(
    table: &SurveyTable,
    instrument: &Instrument,
) -> Result<ItemColumns, SchemaReport> {
    let (x, missing_x) = locate(table, &instrument.x);
    let (y, missing_y) = locate(table, &instrument.y);

    if missing_x.columns.is_empty() && missing_y.columns.is_empty() {
        tracing::debug!(items = x.len() + y.len(), "all instrument columns present");
        return Ok(ItemColumns { x, y });
    }

    let report = SchemaReport {
        x: missing_x,
        y: missing_y,
    };
    tracing::error!(missing = report.missing_count(), "survey export does not match instrument");
    Err(report)
}

fn locate(table: &SurveyTable, block: &ItemBlock) -> (Vec<usize>, MissingColumns) {
    let mut found = Vec::with_capacity(block.items.len());
    let mut missing = Vec::new();
    for item in &block.items {
        match table.column_index(item) {
            Some(idx) => found.push(idx),
            None => missing.push(item.trim().to_string()),
        }
    }
    (
        found,
        MissingColumns {
            block_id: block.id.clone(),
            block_label: block.label.clone(),
            columns: missing,
        },
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_schema.rs"]
mod tests;
