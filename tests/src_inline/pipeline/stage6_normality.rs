
use super::*;
use crate::instrument::loader::builtin_instrument;

#[test]
fn test_insufficient_observations_is_distinct() {
    let outcome = check_normality("X_total", &[30.0, 31.0]);
    assert_eq!(
        outcome,
        NormalityOutcome::InsufficientObservations { n: 2, required: 3 }
    );
    assert_eq!(outcome.p_value(), None);
}

#[test]
fn test_zero_range_reports_unit_values() {
    let outcome = check_normality("Y_total", &[40.0; 5]);
    assert_eq!(
        outcome,
        NormalityOutcome::Tested {
            statistic: 1.0,
            p_value: 1.0
        }
    );
}

#[test]
fn test_runs_on_both_totals() {
    let composites = CompositeScores {
        x_total: vec![148.0, 154.0, 158.0, 160.0, 161.0, 162.0, 166.0, 170.0, 182.0, 195.0, 236.0],
        y_total: vec![2.1, 3.4, 1.9, 5.6, 4.4, 3.3, 2.8, 3.9, 4.1, 3.0, 2.5],
        x_mean: vec![None; 11],
        y_mean: vec![None; 11],
    };
    let out = run_stage6(&composites, &builtin_instrument());
    assert!(out.x.p_value().unwrap() < 0.05);
    assert!(out.y.p_value().unwrap() > 0.05);
}
