
use super::*;
use crate::pipeline::stage2_coerce::RespondentItems;

#[test]
fn test_block_score_complete() {
    let items: Vec<Option<f64>> = (1..=10).map(|v| Some(v as f64)).collect();
    let (sum, mean) = block_score(&items);
    assert_eq!(sum, 55.0);
    assert_eq!(mean, Some(5.5));
}

#[test]
fn test_block_score_skips_missing() {
    let mut items = vec![Some(4.0); 10];
    items[2] = None;
    let (sum, mean) = block_score(&items);
    assert_eq!(sum, 36.0);
    // mean over nine answers, not ten
    assert_eq!(mean, Some(4.0));
}

#[test]
fn test_block_score_all_missing() {
    let (sum, mean) = block_score(&[None, None]);
    assert_eq!(sum, 0.0);
    assert_eq!(mean, None);
}

#[test]
fn test_composites_align_with_rows() {
    let filtered = Stage3Output {
        rows: vec![
            RespondentItems {
                row_index: 0,
                x: vec![Some(1.0), Some(2.0)],
                y: vec![Some(5.0), None],
            },
            RespondentItems {
                row_index: 3,
                x: vec![Some(4.0), Some(4.0)],
                y: vec![Some(2.0), Some(3.0)],
            },
        ],
        dropped: vec![1, 2],
    };
    let scores = run_stage4(&filtered);
    assert_eq!(scores.len(), 2);
    assert_eq!(scores.x_total, vec![3.0, 8.0]);
    assert_eq!(scores.y_total, vec![5.0, 5.0]);
    assert_eq!(scores.x_mean, vec![Some(1.5), Some(4.0)]);
    assert_eq!(scores.y_mean, vec![Some(5.0), Some(2.5)]);
}
