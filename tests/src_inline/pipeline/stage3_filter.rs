
use super::*;

fn respondent(row_index: usize, missing: usize) -> RespondentItems {
    let mut items: Vec<Option<f64>> = vec![Some(3.0); 20];
    for slot in items.iter_mut().take(missing) {
        *slot = None;
    }
    let y = items.split_off(10);
    RespondentItems {
        row_index,
        x: items,
        y,
    }
}

#[test]
fn test_threshold_boundary() {
    let out = run_stage3(
        vec![
            respondent(0, 0),
            respondent(1, 2),
            respondent(2, 3),
            respondent(3, 20),
        ],
        18,
    );
    let kept: Vec<usize> = out.rows.iter().map(|r| r.row_index).collect();
    assert_eq!(kept, vec![0, 1]);
    assert_eq!(out.dropped, vec![2, 3]);
}

#[test]
fn test_missing_spread_across_blocks_counts_jointly() {
    let mut r = respondent(0, 0);
    r.x[0] = None;
    r.y[9] = None;
    let mut s = respondent(1, 0);
    s.x[0] = None;
    s.y[4] = None;
    s.y[9] = None;
    let out = run_stage3(vec![r, s], 18);
    assert_eq!(out.rows.len(), 1);
    assert_eq!(out.rows[0].valid_count(), 18);
    assert_eq!(out.dropped, vec![1]);
}

#[test]
fn test_everyone_dropped_yields_empty_output() {
    let out = run_stage3(vec![respondent(0, 5), respondent(1, 10)], 18);
    assert!(out.rows.is_empty());
    assert_eq!(out.dropped.len(), 2);
}
