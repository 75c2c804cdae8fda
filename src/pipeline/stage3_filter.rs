use crate::pipeline::stage2_coerce::RespondentItems;

#[derive(Debug, Clone, PartialEq)]
pub struct Stage3Output {
    pub rows: Vec<RespondentItems>,
    pub dropped: Vec<usize>,
}

/// Keeps respondents with at least `min_valid` answered items across both
/// blocks. This is the only stage that shrinks the sample.
pub fn run_stage3(respondents: Vec<RespondentItems>, min_valid: usize) -> Stage3Output {
    let mut rows = Vec::with_capacity(respondents.len());
    let mut dropped = Vec::new();
    for respondent in respondents {
        if respondent.valid_count() >= min_valid {
            rows.push(respondent);
        } else {
            dropped.push(respondent.row_index);
        }
    }

    tracing::info!(
        retained = rows.len(),
        dropped = dropped.len(),
        min_valid,
        "listwise filter applied"
    );
    if !dropped.is_empty() {
        tracing::warn!(
            count = dropped.len(),
            "respondents dropped for too many missing answers"
        );
    }

    Stage3Output { rows, dropped }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_filter.rs"]
mod tests;
