use crate::model::composites::CompositeScores;
use crate::model::correlation::{
    CorrelationMethod, CorrelationResult, SIGNIFICANCE_LEVEL, SelectionBasis, Significance,
};
use crate::model::normality::NormalityOutcome;
use crate::stats::correlation::{pearson, spearman};

/// Pearson only when both composites were tested and both p-values are
/// strictly above the cut-off; anything else falls to Spearman.
pub fn select_method(
    x: &NormalityOutcome,
    y: &NormalityOutcome,
) -> (CorrelationMethod, SelectionBasis) {
    match (x.p_value(), y.p_value()) {
        (Some(px), Some(py)) if px > SIGNIFICANCE_LEVEL && py > SIGNIFICANCE_LEVEL => {
            (CorrelationMethod::Pearson, SelectionBasis::BothNormal)
        }
        (Some(_), Some(_)) => (CorrelationMethod::Spearman, SelectionBasis::NotNormal),
        _ => (
            CorrelationMethod::Spearman,
            SelectionBasis::InsufficientObservations,
        ),
    }
}

pub fn run_stage7(
    composites: &CompositeScores,
    normality_x: &NormalityOutcome,
    normality_y: &NormalityOutcome,
) -> CorrelationResult {
    let (method, basis) = select_method(normality_x, normality_y);
    let coefficient = match method {
        CorrelationMethod::Pearson => pearson(&composites.x_total, &composites.y_total),
        CorrelationMethod::Spearman => spearman(&composites.x_total, &composites.y_total),
    };
    let r = coefficient.map(|c| c.r);
    let p_value = coefficient.and_then(|c| c.p_value);
    let significance = Significance::classify(p_value);

    match r {
        Some(r) => tracing::info!(
            method = method.name(),
            r,
            p = p_value.unwrap_or(f64::NAN),
            %significance,
            "composite correlation"
        ),
        None => tracing::warn!(
            method = method.name(),
            "correlation undefined (constant composite or fewer than two respondents)"
        ),
    }

    CorrelationResult {
        method,
        basis,
        n: composites.len(),
        coefficient: r,
        p_value,
        significance,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage7_correlation.rs"]
mod tests;
