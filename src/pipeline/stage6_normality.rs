use crate::instrument::Instrument;
use crate::model::composites::CompositeScores;
use crate::model::normality::{MIN_NORMALITY_N, NormalityOutcome};
use crate::stats::shapiro::{MAX_EXACT_N, ShapiroError, shapiro_wilk};

#[derive(Debug, Clone)]
pub struct Stage6Output {
    pub x: NormalityOutcome,
    pub y: NormalityOutcome,
}

pub fn run_stage6(composites: &CompositeScores, instrument: &Instrument) -> Stage6Output {
    Stage6Output {
        x: check_normality(&instrument.x.total_column(), &composites.x_total),
        y: check_normality(&instrument.y.total_column(), &composites.y_total),
    }
}

pub fn check_normality(column: &str, values: &[f64]) -> NormalityOutcome {
    if values.len() > MAX_EXACT_N {
        tracing::warn!(
            column,
            n = values.len(),
            "Shapiro-Wilk p-value may be inaccurate above 5000 observations"
        );
    }
    match shapiro_wilk(values) {
        Ok(result) => {
            tracing::info!(
                column,
                w = result.statistic,
                p = result.p_value,
                "Shapiro-Wilk normality test"
            );
            NormalityOutcome::Tested {
                statistic: result.statistic,
                p_value: result.p_value,
            }
        }
        Err(ShapiroError::TooFewObservations(n)) => {
            tracing::warn!(
                column,
                n,
                required = MIN_NORMALITY_N,
                "too few observations for a normality test"
            );
            NormalityOutcome::InsufficientObservations {
                n,
                required: MIN_NORMALITY_N,
            }
        }
        Err(ShapiroError::ZeroRange) => {
            tracing::warn!(column, "composite has zero range; reporting W = 1, p = 1");
            NormalityOutcome::Tested {
                statistic: 1.0,
                p_value: 1.0,
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_normality.rs"]
mod tests;
