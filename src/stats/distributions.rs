use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

/// Upper tail of the standard normal, P(Z > z).
pub fn normal_sf(z: f64) -> f64 {
    Normal::standard().sf(z)
}

/// Standard normal quantile for p in [0, 1].
pub fn normal_ppf(p: f64) -> f64 {
    Normal::standard().inverse_cdf(p)
}

/// Two-sided p-value of a correlation coefficient `r` from `n` pairs under
/// the null of no association: P(|T| >= |t|) for Student's t with n - 2
/// degrees of freedom and t = r * sqrt((n - 2) / (1 - r^2)).
pub fn correlation_p_value(r: f64, n: usize) -> Option<f64> {
    if n < 3 || !r.is_finite() {
        return None;
    }
    let df = (n - 2) as f64;
    let r = r.clamp(-1.0, 1.0);
    let t = r.abs() * (df / (1.0 - r * r)).sqrt();
    let dist = StudentsT::new(0.0, 1.0, df).ok()?;
    Some((2.0 * dist.sf(t)).clamp(0.0, 1.0))
}
