use crate::model::composites::CompositeScores;
use crate::pipeline::stage3_filter::Stage3Output;

pub fn run_stage4(filtered: &Stage3Output) -> CompositeScores {
    let n = filtered.rows.len();
    let mut scores = CompositeScores {
        x_total: Vec::with_capacity(n),
        y_total: Vec::with_capacity(n),
        x_mean: Vec::with_capacity(n),
        y_mean: Vec::with_capacity(n),
    };

    for row in &filtered.rows {
        let (x_total, x_mean) = block_score(&row.x);
        let (y_total, y_mean) = block_score(&row.y);
        scores.x_total.push(x_total);
        scores.y_total.push(y_total);
        scores.x_mean.push(x_mean);
        scores.y_mean.push(y_mean);
    }

    scores
}

/// Sum and mean over the answered items only. A block with no answers sums
/// to zero and has no mean.
pub fn block_score(items: &[Option<f64>]) -> (f64, Option<f64>) {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in items.iter().flatten() {
        sum += v;
        count += 1;
    }
    let mean = if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    };
    (sum, mean)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_composites.rs"]
mod tests;
