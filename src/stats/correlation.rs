use crate::stats::average_ranks;
use crate::stats::distributions::correlation_p_value;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficient {
    pub r: f64,
    pub p_value: Option<f64>,
}

/// Pearson product-moment correlation. `None` when fewer than two pairs or
/// either series is constant. Two pairs give r = +/-1 with p = 1.
pub fn pearson(x: &[f64], y: &[f64]) -> Option<Coefficient> {
    let n = x.len().min(y.len());
    if n < 2 {
        return None;
    }
    let (x, y) = (&x[..n], &y[..n]);
    let mx = x.iter().sum::<f64>() / n as f64;
    let my = y.iter().sum::<f64>() / n as f64;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (xi, yi) in x.iter().zip(y) {
        let dx = xi - mx;
        let dy = yi - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    if sxx == 0.0 || syy == 0.0 {
        return None;
    }

    let r = (sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0);
    let p_value = if n == 2 {
        Some(1.0)
    } else {
        correlation_p_value(r, n)
    };
    Some(Coefficient { r, p_value })
}

/// Spearman's rho: Pearson correlation of average ranks.
pub fn spearman(x: &[f64], y: &[f64]) -> Option<Coefficient> {
    let n = x.len().min(y.len());
    pearson(&average_ranks(&x[..n]), &average_ranks(&y[..n]))
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/correlation.rs"]
mod tests;
