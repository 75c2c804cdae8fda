use serde::Serialize;

/// Per-respondent composites, index-aligned with the retained respondents.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompositeScores {
    pub x_total: Vec<f64>,
    pub y_total: Vec<f64>,
    pub x_mean: Vec<Option<f64>>,
    pub y_mean: Vec<Option<f64>>,
}

impl CompositeScores {
    pub fn len(&self) -> usize {
        self.x_total.len()
    }
}
