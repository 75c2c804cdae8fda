pub mod stage1_schema;
pub mod stage2_coerce;
pub mod stage3_filter;
pub mod stage4_composites;
pub mod stage5_reliability;
pub mod stage6_normality;
pub mod stage7_correlation;
pub mod stage8_report;

use thiserror::Error;

use crate::input::SurveyTable;
use crate::instrument::Instrument;
use crate::model::composites::CompositeScores;
use crate::model::correlation::CorrelationResult;
use crate::model::descriptives::Descriptives;
use crate::model::normality::NormalityOutcome;
use crate::model::reliability::Reliability;
use crate::pipeline::stage1_schema::{ItemColumns, SchemaReport, run_stage1};
use crate::pipeline::stage2_coerce::run_stage2;
use crate::pipeline::stage3_filter::{Stage3Output, run_stage3};
use crate::pipeline::stage4_composites::run_stage4;
use crate::pipeline::stage5_reliability::run_stage5;
use crate::pipeline::stage6_normality::run_stage6;
use crate::pipeline::stage7_correlation::run_stage7;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{0}")]
    Schema(SchemaReport),
    #[error(
        "no valid respondents: none of {n_input} rows answered at least {min_valid} of {total_items} items"
    )]
    EmptySample {
        n_input: usize,
        min_valid: usize,
        total_items: usize,
    },
}

/// Everything the analysis derives from one survey export.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub n_input: usize,
    pub item_columns: ItemColumns,
    pub filtered: Stage3Output,
    pub composites: CompositeScores,
    pub item_descriptives: Vec<Descriptives>,
    pub composite_descriptives: Vec<Descriptives>,
    pub reliability_x: Reliability,
    pub reliability_y: Reliability,
    pub normality_x: NormalityOutcome,
    pub normality_y: NormalityOutcome,
    pub correlation: CorrelationResult,
}

impl Analysis {
    pub fn n_retained(&self) -> usize {
        self.filtered.rows.len()
    }

    pub fn n_dropped(&self) -> usize {
        self.n_input - self.n_retained()
    }
}

/// Runs stages 1-7 over an in-memory table. Pure: the only side effect is
/// logging.
pub fn analyze(table: &SurveyTable, instrument: &Instrument) -> Result<Analysis, PipelineError> {
    let columns = run_stage1(table, instrument).map_err(PipelineError::Schema)?;
    let coerced = run_stage2(table, &columns);
    let filtered = run_stage3(coerced, instrument.min_valid_items);
    if filtered.rows.is_empty() {
        return Err(PipelineError::EmptySample {
            n_input: table.n_rows(),
            min_valid: instrument.min_valid_items,
            total_items: instrument.total_items(),
        });
    }

    let composites = run_stage4(&filtered);
    let item_descriptives = describe_items(&filtered, instrument);
    let composite_descriptives = describe_composites(&composites, instrument);

    let reliability = run_stage5(&filtered, instrument);
    let normality = run_stage6(&composites, instrument);
    let correlation = run_stage7(&composites, &normality.x, &normality.y);

    Ok(Analysis {
        n_input: table.n_rows(),
        item_columns: columns,
        filtered,
        composites,
        item_descriptives,
        composite_descriptives,
        reliability_x: reliability.x,
        reliability_y: reliability.y,
        normality_x: normality.x,
        normality_y: normality.y,
        correlation,
    })
}

fn describe_items(filtered: &Stage3Output, instrument: &Instrument) -> Vec<Descriptives> {
    let mut out = Vec::with_capacity(instrument.total_items());
    for (idx, name) in instrument.x.items.iter().enumerate() {
        out.push(Descriptives::from_values(
            name,
            filtered.rows.iter().map(|r| r.x[idx]),
        ));
    }
    for (idx, name) in instrument.y.items.iter().enumerate() {
        out.push(Descriptives::from_values(
            name,
            filtered.rows.iter().map(|r| r.y[idx]),
        ));
    }
    out
}

fn describe_composites(composites: &CompositeScores, instrument: &Instrument) -> Vec<Descriptives> {
    let [x_total, y_total, x_mean, y_mean] = instrument.composite_columns();
    vec![
        Descriptives::from_values(&x_total, composites.x_total.iter().copied().map(Some)),
        Descriptives::from_values(&y_total, composites.y_total.iter().copied().map(Some)),
        Descriptives::from_values(&x_mean, composites.x_mean.iter().copied()),
        Descriptives::from_values(&y_mean, composites.y_mean.iter().copied()),
    ]
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
