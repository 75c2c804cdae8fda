use crate::instrument::{Instrument, ItemBlock};
use crate::model::correlation::{SIGNIFICANCE_LEVEL, Significance};
use crate::model::descriptives::Descriptives;
use crate::model::normality::NormalityOutcome;
use crate::model::reliability::{AlphaEstimate, Reliability};
use crate::pipeline::Analysis;
use crate::report::{format_opt, format_p};

pub fn render_report_text(analysis: &Analysis, instrument: &Instrument) -> String {
    let mut out = String::new();

    out.push_str("Survey Composite Association Report\n");
    out.push_str("===================================\n\n");
    out.push_str(&format!("Instrument: {}\n\n", instrument.name));

    out.push_str("1. Sample\n");
    out.push_str(&format!("Rows in export: {}\n", analysis.n_input));
    out.push_str(&format!(
        "Retained (at least {} of {} items answered): {}\n",
        instrument.min_valid_items,
        instrument.total_items(),
        analysis.n_retained()
    ));
    out.push_str(&format!("Dropped: {}\n\n", analysis.n_dropped()));

    out.push_str("2. Descriptive statistics, composites\n");
    push_descriptives_table(&mut out, &analysis.composite_descriptives, |d| {
        d.column.clone()
    });
    out.push('\n');

    out.push_str("3. Descriptive statistics, items\n");
    let codes = item_codes(instrument);
    push_descriptives_table(&mut out, &analysis.item_descriptives, |d| {
        codes
            .iter()
            .find(|(_, text)| *text == d.column)
            .map(|(code, _)| code.clone())
            .unwrap_or_else(|| d.column.clone())
    });
    for (code, text) in &codes {
        out.push_str(&format!("  {code}: {text}\n"));
    }
    out.push('\n');

    out.push_str("4. Reliability (Cronbach's alpha)\n");
    push_reliability(&mut out, &instrument.x, &analysis.reliability_x);
    push_reliability(&mut out, &instrument.y, &analysis.reliability_y);
    out.push('\n');

    out.push_str("5. Normality (Shapiro-Wilk)\n");
    push_normality(&mut out, &instrument.x.total_column(), &analysis.normality_x);
    push_normality(&mut out, &instrument.y.total_column(), &analysis.normality_y);
    out.push('\n');

    let corr = &analysis.correlation;
    out.push_str("6. Correlation\n");
    out.push_str(&format!(
        "Method: {} ({})\n",
        corr.method.name(),
        corr.basis.describe()
    ));
    out.push_str(&format!("Coefficient (r): {}\n", format_opt(corr.coefficient, 4)));
    out.push_str(&format!("p-value: {}\n", format_p(corr.p_value)));
    out.push_str(&format!(
        "Conclusion: {}\n",
        conclusion(corr.significance, &instrument.x, &instrument.y)
    ));

    out
}

fn push_descriptives_table<F>(out: &mut String, rows: &[Descriptives], label: F)
where
    F: Fn(&Descriptives) -> String,
{
    out.push_str(&format!(
        "{:<10} {:>6} {:>9} {:>9} {:>9} {:>9} {:>9} {:>9} {:>9}\n",
        "column", "count", "mean", "std", "min", "25%", "50%", "75%", "max"
    ));
    for d in rows {
        out.push_str(&format!(
            "{:<10} {:>6} {:>9} {:>9} {:>9} {:>9} {:>9} {:>9} {:>9}\n",
            label(d),
            d.count,
            format_opt(d.mean, 4),
            format_opt(d.std, 4),
            format_opt(d.min, 4),
            format_opt(d.q25, 4),
            format_opt(d.median, 4),
            format_opt(d.q75, 4),
            format_opt(d.max, 4),
        ));
    }
}

/// Short codes (`X1`, `Y3`, ...) for long question texts.
fn item_codes(instrument: &Instrument) -> Vec<(String, String)> {
    let mut codes = Vec::with_capacity(instrument.total_items());
    for block in [&instrument.x, &instrument.y] {
        for (idx, text) in block.items.iter().enumerate() {
            codes.push((format!("{}{}", block.id, idx + 1), text.clone()));
        }
    }
    codes
}

fn push_reliability(out: &mut String, block: &ItemBlock, reliability: &Reliability) {
    match reliability.estimate {
        AlphaEstimate::Defined { .. } => {
            out.push_str(&format!(
                "{} ({}): alpha = {} ({} items, {} complete rows)\n",
                block.id,
                block.label,
                reliability.estimate,
                reliability.items,
                reliability.complete_rows
            ));
        }
        AlphaEstimate::Undefined { reason } => {
            out.push_str(&format!(
                "{} ({}): alpha = {} ({})\n",
                block.id,
                block.label,
                reliability.estimate,
                reason.describe()
            ));
        }
    }
}

fn push_normality(out: &mut String, column: &str, outcome: &NormalityOutcome) {
    match outcome {
        NormalityOutcome::Tested { statistic, p_value } => {
            out.push_str(&format!(
                "{column}: W = {}, p = {}\n",
                format_opt(Some(*statistic), 4),
                format_p(Some(*p_value))
            ));
        }
        NormalityOutcome::InsufficientObservations { n, required } => {
            out.push_str(&format!(
                "{column}: not computable, insufficient observations (n = {n}, need {required})\n"
            ));
        }
    }
}

fn conclusion(significance: Significance, x: &ItemBlock, y: &ItemBlock) -> String {
    match significance {
        Significance::Significant => format!(
            "{significance} between {} and {} (p < {SIGNIFICANCE_LEVEL})",
            x.label, y.label
        ),
        Significance::NotSignificant => format!(
            "{significance} between {} and {} (p >= {SIGNIFICANCE_LEVEL} or undefined)",
            x.label, y.label
        ),
    }
}
