use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::input::SurveyTable;
use crate::instrument::Instrument;
use crate::pipeline::Analysis;
use crate::report::format_cell;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;

pub const DEFAULT_EXPORT_NAME: &str = "cleaned_survey_with_composites.csv";
pub const SUMMARY_NAME: &str = "summary.json";
pub const REPORT_NAME: &str = "report.txt";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct ReportMeta {
    pub tool_name: String,
    pub tool_version: String,
    pub input: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub export: PathBuf,
    pub summary: PathBuf,
    pub report: PathBuf,
}

pub fn write_reports(
    analysis: &Analysis,
    table: &SurveyTable,
    instrument: &Instrument,
    meta: &ReportMeta,
    out_dir: &Path,
    export_name: &str,
    keep_columns: bool,
) -> Result<ReportPaths, ReportError> {
    fs::create_dir_all(out_dir)?;

    let paths = ReportPaths {
        export: out_dir.join(export_name),
        summary: out_dir.join(SUMMARY_NAME),
        report: out_dir.join(REPORT_NAME),
    };

    if keep_columns {
        write_export_csv_passthrough(analysis, table, instrument, &paths.export)?;
    } else {
        write_export_csv(analysis, instrument, &paths.export)?;
    }

    let json = render_summary_json(analysis, instrument, meta)?;
    write_text(&paths.summary, &json)?;

    let report = render_report_text(analysis, instrument);
    write_text(&paths.report, &report)?;

    tracing::info!(
        export = %paths.export.display(),
        summary = %paths.summary.display(),
        report = %paths.report.display(),
        "reports written"
    );
    Ok(paths)
}

/// Retained rows restricted to the item columns in instrument order (X block
/// then Y block), coerced to numbers, followed by the four composite columns.
pub fn write_export_csv(
    analysis: &Analysis,
    instrument: &Instrument,
    path: &Path,
) -> Result<(), ReportError> {
    let composite_columns = instrument.composite_columns();
    let mut w = csv::Writer::from_path(path)?;
    let header: Vec<&str> = instrument
        .x
        .items
        .iter()
        .chain(&instrument.y.items)
        .chain(&composite_columns)
        .map(String::as_str)
        .collect();
    w.write_record(&header)?;

    for (i, respondent) in analysis.filtered.rows.iter().enumerate() {
        let mut record: Vec<String> = respondent
            .x
            .iter()
            .chain(&respondent.y)
            .map(|v| v.map(format_cell).unwrap_or_default())
            .collect();
        push_composites(&mut record, analysis, i);
        w.write_record(&record)?;
    }
    w.flush()?;
    Ok(())
}

/// Like [`write_export_csv`] but keeps every original column in input order,
/// item cells in their coerced form. An input column that already carries a
/// composite name is replaced.
pub fn write_export_csv_passthrough(
    analysis: &Analysis,
    table: &SurveyTable,
    instrument: &Instrument,
    path: &Path,
) -> Result<(), ReportError> {
    let composite_columns = instrument.composite_columns();
    let kept: Vec<usize> = (0..table.columns.len())
        .filter(|&idx| !composite_columns.contains(&table.columns[idx]))
        .collect();

    let mut item_slot: Vec<Option<ItemSlot>> = vec![None; table.columns.len()];
    for (pos, &col) in analysis.item_columns.x.iter().enumerate() {
        item_slot[col] = Some(ItemSlot::X(pos));
    }
    for (pos, &col) in analysis.item_columns.y.iter().enumerate() {
        item_slot[col] = Some(ItemSlot::Y(pos));
    }

    let mut w = csv::Writer::from_path(path)?;
    let mut header: Vec<&str> = kept.iter().map(|&idx| table.columns[idx].as_str()).collect();
    header.extend(composite_columns.iter().map(String::as_str));
    w.write_record(&header)?;

    for (i, respondent) in analysis.filtered.rows.iter().enumerate() {
        let raw = &table.rows[respondent.row_index];
        let mut record: Vec<String> = Vec::with_capacity(header.len());
        for &idx in &kept {
            let cell = match item_slot[idx] {
                Some(ItemSlot::X(pos)) => respondent.x[pos].map(format_cell).unwrap_or_default(),
                Some(ItemSlot::Y(pos)) => respondent.y[pos].map(format_cell).unwrap_or_default(),
                None => raw[idx].clone(),
            };
            record.push(cell);
        }
        push_composites(&mut record, analysis, i);
        w.write_record(&record)?;
    }
    w.flush()?;
    Ok(())
}

fn push_composites(record: &mut Vec<String>, analysis: &Analysis, i: usize) {
    let scores = &analysis.composites;
    record.push(format_cell(scores.x_total[i]));
    record.push(format_cell(scores.y_total[i]));
    record.push(scores.x_mean[i].map(format_cell).unwrap_or_default());
    record.push(scores.y_mean[i].map(format_cell).unwrap_or_default());
}

#[derive(Debug, Clone, Copy)]
enum ItemSlot {
    X(usize),
    Y(usize),
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage8_report.rs"]
mod tests;
