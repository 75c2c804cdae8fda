pub mod json;
pub mod text;

pub const UNDEFINED: &str = "undefined";

/// Shortest text that parses back to exactly `v`; used for exported cells.
pub fn format_cell(v: f64) -> String {
    format!("{v}")
}

pub fn format_fixed(v: f64, decimals: usize) -> String {
    format!("{v:.decimals$}")
}

pub fn format_opt(v: Option<f64>, decimals: usize) -> String {
    match v {
        Some(v) if v.is_finite() => format_fixed(v, decimals),
        _ => UNDEFINED.to_string(),
    }
}

/// p-values keep six decimals unless that would print as zero.
pub fn format_p(p: Option<f64>) -> String {
    match p {
        Some(p) if p.is_finite() && p > 0.0 && p < 5e-7 => format!("{p:.3e}"),
        other => format_opt(other, 6),
    }
}
