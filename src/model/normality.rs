use serde::Serialize;

/// Shapiro-Wilk needs at least this many observations.
pub const MIN_NORMALITY_N: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NormalityOutcome {
    Tested { statistic: f64, p_value: f64 },
    InsufficientObservations { n: usize, required: usize },
}

impl NormalityOutcome {
    pub fn p_value(&self) -> Option<f64> {
        match self {
            NormalityOutcome::Tested { p_value, .. } => Some(*p_value),
            NormalityOutcome::InsufficientObservations { .. } => None,
        }
    }
}
