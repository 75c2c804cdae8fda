//! Shapiro-Wilk W test for normality.
//!
//! Coefficients and the p-value follow Royston's approximation (Applied
//! Statistics algorithm AS R94), valid for 3 <= n <= 5000.

use std::f64::consts::PI;

use thiserror::Error;

use crate::stats::distributions::{normal_ppf, normal_sf};

const SMALL: f64 = 1e-19;

const C1: [f64; 6] = [0.0, 0.221157, -0.147981, -2.071190, 4.434685, -2.706056];
const C2: [f64; 6] = [0.0, 0.042981, -0.293762, -1.752461, 5.682633, -3.582633];
const C3: [f64; 4] = [0.5440, -0.39978, 0.025054, -6.714e-4];
const C4: [f64; 4] = [1.3822, -0.77857, 0.062767, -0.0020322];
const C5: [f64; 4] = [-1.5861, -0.31082, -0.083751, 0.0038915];
const C6: [f64; 3] = [-0.4803, -0.082676, 0.0030302];
const G: [f64; 2] = [-2.273, 0.459];

pub const MAX_EXACT_N: usize = 5000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapiroWilk {
    pub statistic: f64,
    pub p_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapiroError {
    #[error("Shapiro-Wilk needs at least 3 observations, got {0}")]
    TooFewObservations(usize),
    #[error("sample has zero range")]
    ZeroRange,
}

pub fn shapiro_wilk(values: &[f64]) -> Result<ShapiroWilk, ShapiroError> {
    let n = values.len();
    if n < 3 {
        return Err(ShapiroError::TooFewObservations(n));
    }

    let mut x = values.to_vec();
    x.sort_by(f64::total_cmp);
    let median = (x[(n - 1) / 2] + x[n / 2]) / 2.0;
    for v in &mut x {
        *v -= median;
    }

    let range = x[n - 1] - x[0];
    if range < SMALL {
        return Err(ShapiroError::ZeroRange);
    }

    let a = coefficients(n);
    let half = n / 2;
    let weight = |i: usize| -> f64 {
        if i < half {
            -a[i]
        } else if n - 1 - i < half {
            a[n - 1 - i]
        } else {
            0.0
        }
    };

    let scaled: Vec<f64> = x.iter().map(|v| v / range).collect();
    let xbar = scaled.iter().sum::<f64>() / n as f64;
    let mut ssa = 0.0;
    let mut ssx = 0.0;
    let mut sax = 0.0;
    for (i, &xi) in scaled.iter().enumerate() {
        let w = weight(i);
        let d = xi - xbar;
        ssa += w * w;
        ssx += d * d;
        sax += w * d;
    }

    // 1 - W, formed as a product to keep precision when W is close to 1.
    let ssassx = (ssa * ssx).sqrt();
    let w1 = ((ssassx - sax) * (ssassx + sax) / (ssa * ssx)).max(0.0);
    let statistic = 1.0 - w1;

    Ok(ShapiroWilk {
        statistic,
        p_value: p_value(statistic, w1, n),
    })
}

/// Upper half of the antisymmetric weight vector, largest first.
fn coefficients(n: usize) -> Vec<f64> {
    let half = n / 2;
    if n == 3 {
        return vec![std::f64::consts::FRAC_1_SQRT_2];
    }

    let an25 = n as f64 + 0.25;
    let m: Vec<f64> = (0..half)
        .map(|i| normal_ppf((i as f64 + 1.0 - 0.375) / an25))
        .collect();
    let summ2 = 2.0 * m.iter().map(|v| v * v).sum::<f64>();
    let ssumm2 = summ2.sqrt();
    let rsn = 1.0 / (n as f64).sqrt();

    let mut a = vec![0.0; half];
    let a1 = poly(&C1, rsn) - m[0] / ssumm2;
    let (fac, first) = if n > 5 {
        let a2 = -m[1] / ssumm2 + poly(&C2, rsn);
        a[1] = a2;
        let fac = ((summ2 - 2.0 * m[0] * m[0] - 2.0 * m[1] * m[1])
            / (1.0 - 2.0 * a1 * a1 - 2.0 * a2 * a2))
            .sqrt();
        (fac, 2)
    } else {
        let fac = ((summ2 - 2.0 * m[0] * m[0]) / (1.0 - 2.0 * a1 * a1)).sqrt();
        (fac, 1)
    };
    a[0] = a1;
    for i in first..half {
        a[i] = -m[i] / fac;
    }
    a
}

fn p_value(w: f64, w1: f64, n: usize) -> f64 {
    if w1 <= 0.0 {
        return 1.0;
    }
    if n == 3 {
        let pw = 6.0 / PI * (w.clamp(0.0, 1.0).sqrt().asin() - PI / 3.0);
        return pw.clamp(0.0, 1.0);
    }

    let an = n as f64;
    let mut y = w1.ln();
    let (m, s) = if n <= 11 {
        let gamma = poly(&G, an);
        if y >= gamma {
            return 1e-99;
        }
        y = -(gamma - y).ln();
        (poly(&C3, an), poly(&C4, an).exp())
    } else {
        let xx = an.ln();
        (poly(&C5, xx), poly(&C6, xx).exp())
    };
    normal_sf((y - m) / s).clamp(0.0, 1.0)
}

fn poly(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/shapiro.rs"]
mod tests;
