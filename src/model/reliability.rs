use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UndefinedReason {
    TooFewItems,
    NoCompleteRows,
    SingleCompleteRow,
    ZeroTotalVariance,
}

impl UndefinedReason {
    pub fn describe(self) -> &'static str {
        match self {
            UndefinedReason::TooFewItems => "fewer than two items",
            UndefinedReason::NoCompleteRows => "no respondent answered every item",
            UndefinedReason::SingleCompleteRow => "only one respondent answered every item",
            UndefinedReason::ZeroTotalVariance => "total score has zero variance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AlphaEstimate {
    Defined { alpha: f64 },
    Undefined { reason: UndefinedReason },
}

impl AlphaEstimate {
    pub fn value(&self) -> Option<f64> {
        match self {
            AlphaEstimate::Defined { alpha } => Some(*alpha),
            AlphaEstimate::Undefined { .. } => None,
        }
    }
}

impl fmt::Display for AlphaEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(alpha) => write!(f, "{alpha:.4}"),
            None => f.write_str("undefined"),
        }
    }
}

/// Cronbach's alpha for one block, computed over the rows that answered
/// every item of the block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reliability {
    pub items: usize,
    pub complete_rows: usize,
    #[serde(flatten)]
    pub estimate: AlphaEstimate,
}
