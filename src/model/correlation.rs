use std::fmt;

use serde::Serialize;

/// Cut-off shared by method selection and significance classification.
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationMethod {
    Pearson,
    Spearman,
}

impl CorrelationMethod {
    pub fn name(self) -> &'static str {
        match self {
            CorrelationMethod::Pearson => "Pearson correlation",
            CorrelationMethod::Spearman => "Spearman rank correlation",
        }
    }
}

/// Why a method was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionBasis {
    BothNormal,
    NotNormal,
    InsufficientObservations,
}

impl SelectionBasis {
    pub fn describe(self) -> &'static str {
        match self {
            SelectionBasis::BothNormal => "both composites look normally distributed",
            SelectionBasis::NotNormal => "at least one composite departs from normality",
            SelectionBasis::InsufficientObservations => {
                "too few observations to test normality"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Significance {
    Significant,
    NotSignificant,
}

impl Significance {
    /// Strictly below the cut-off is significant; an undefined p-value is not.
    pub fn classify(p_value: Option<f64>) -> Self {
        match p_value {
            Some(p) if p < SIGNIFICANCE_LEVEL => Significance::Significant,
            _ => Significance::NotSignificant,
        }
    }
}

impl fmt::Display for Significance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Significance::Significant => f.write_str("significant relationship"),
            Significance::NotSignificant => f.write_str("no significant relationship"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationResult {
    pub method: CorrelationMethod,
    pub basis: SelectionBasis,
    pub n: usize,
    pub coefficient: Option<f64>,
    pub p_value: Option<f64>,
    pub significance: Significance,
}
