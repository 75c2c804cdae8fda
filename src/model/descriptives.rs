use serde::Serialize;

use crate::stats::{mean, quantile_linear, sample_std, sorted_copy};

/// count/mean/std/min/quartiles/max of one column over its present values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Descriptives {
    pub column: String,
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub median: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

impl Descriptives {
    pub fn from_values<I>(column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let present: Vec<f64> = values.into_iter().flatten().collect();
        let sorted = sorted_copy(&present);
        Self {
            column: column.to_string(),
            count: present.len(),
            mean: mean(&present),
            std: sample_std(&present),
            min: sorted.first().copied(),
            q25: quantile_linear(&sorted, 0.25),
            median: quantile_linear(&sorted, 0.50),
            q75: quantile_linear(&sorted, 0.75),
            max: sorted.last().copied(),
        }
    }
}
