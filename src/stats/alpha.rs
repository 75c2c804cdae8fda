use crate::model::reliability::{AlphaEstimate, Reliability, UndefinedReason};
use crate::stats::sample_variance;

/// Cronbach's alpha over `rows`, each holding the `k` item answers of one
/// respondent. Rows with any missing answer are left out before any variance
/// is taken, so item and total variances share one respondent subset.
pub fn cronbach_alpha(rows: &[Vec<Option<f64>>], k: usize) -> Reliability {
    let complete: Vec<Vec<f64>> = rows
        .iter()
        .filter(|row| row.len() == k && row.iter().all(Option::is_some))
        .map(|row| row.iter().flatten().copied().collect())
        .collect();
    let n = complete.len();

    let undefined = |reason| Reliability {
        items: k,
        complete_rows: n,
        estimate: AlphaEstimate::Undefined { reason },
    };

    if k <= 1 {
        return undefined(UndefinedReason::TooFewItems);
    }
    if n == 0 {
        return undefined(UndefinedReason::NoCompleteRows);
    }
    if n == 1 {
        return undefined(UndefinedReason::SingleCompleteRow);
    }

    let totals: Vec<f64> = complete.iter().map(|row| row.iter().sum()).collect();
    let total_var = match sample_variance(&totals) {
        Some(v) if v > 0.0 => v,
        _ => return undefined(UndefinedReason::ZeroTotalVariance),
    };

    let mut item_var_sum = 0.0;
    let mut column = Vec::with_capacity(n);
    for item in 0..k {
        column.clear();
        column.extend(complete.iter().map(|row| row[item]));
        item_var_sum += sample_variance(&column).unwrap_or(0.0);
    }

    let kf = k as f64;
    let alpha = (kf / (kf - 1.0)) * (1.0 - item_var_sum / total_var);
    Reliability {
        items: k,
        complete_rows: n,
        estimate: AlphaEstimate::Defined { alpha },
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/alpha.rs"]
mod tests;
