use crate::instrument::{Instrument, ItemBlock};
use crate::model::reliability::{AlphaEstimate, Reliability};
use crate::pipeline::stage3_filter::Stage3Output;
use crate::stats::alpha::cronbach_alpha;

#[derive(Debug, Clone)]
pub struct Stage5Output {
    pub x: Reliability,
    pub y: Reliability,
}

pub fn run_stage5(filtered: &Stage3Output, instrument: &Instrument) -> Stage5Output {
    let x_rows: Vec<Vec<Option<f64>>> = filtered.rows.iter().map(|r| r.x.clone()).collect();
    let y_rows: Vec<Vec<Option<f64>>> = filtered.rows.iter().map(|r| r.y.clone()).collect();

    let x = cronbach_alpha(&x_rows, instrument.x.items.len());
    let y = cronbach_alpha(&y_rows, instrument.y.items.len());
    log_reliability(&instrument.x, &x);
    log_reliability(&instrument.y, &y);

    Stage5Output { x, y }
}

fn log_reliability(block: &ItemBlock, reliability: &Reliability) {
    match reliability.estimate {
        AlphaEstimate::Defined { alpha } => tracing::info!(
            block = %block.id,
            alpha,
            complete_rows = reliability.complete_rows,
            "cronbach alpha"
        ),
        AlphaEstimate::Undefined { reason } => tracing::warn!(
            block = %block.id,
            reason = reason.describe(),
            "cronbach alpha is undefined"
        ),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_reliability.rs"]
mod tests;
