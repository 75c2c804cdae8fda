
use super::*;

#[test]
fn test_parse_cell() {
    assert_eq!(parse_cell("4"), Some(4.0));
    assert_eq!(parse_cell(" 3.5 "), Some(3.5));
    assert_eq!(parse_cell("1e1"), Some(10.0));
    assert_eq!(parse_cell(""), None);
    assert_eq!(parse_cell("   "), None);
    assert_eq!(parse_cell("Setuju"), None);
    assert_eq!(parse_cell("4,5"), None);
    assert_eq!(parse_cell("NaN"), None);
    assert_eq!(parse_cell("inf"), None);
}

#[test]
fn test_non_finite_cells_are_missing() {
    for cell in ["inf", "-inf", "+inf", "infinity", "-Infinity", "INF", "nan", " -inf "] {
        assert_eq!(parse_cell(cell), None, "{cell:?} should be missing");
    }
    let table = SurveyTable {
        columns: vec!["a".into(), "b".into()],
        rows: vec![vec!["-inf".into(), "infinity".into()]],
    };
    let columns = ItemColumns {
        x: vec![0],
        y: vec![1],
    };
    let out = run_stage2(&table, &columns);
    assert_eq!(out[0].valid_count(), 0);
}

#[test]
fn test_coerce_maps_columns_per_block() {
    let table = SurveyTable {
        columns: vec!["t".into(), "a".into(), "b".into(), "c".into()],
        rows: vec![
            vec!["x".into(), "1".into(), "oops".into(), "3".into()],
            vec!["y".into(), "".into(), "2".into(), "5".into()],
        ],
    };
    let columns = ItemColumns {
        x: vec![1, 2],
        y: vec![3],
    };
    let out = run_stage2(&table, &columns);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].x, vec![Some(1.0), None]);
    assert_eq!(out[0].y, vec![Some(3.0)]);
    assert_eq!(out[0].valid_count(), 2);
    assert_eq!(out[1].row_index, 1);
    assert_eq!(out[1].x, vec![None, Some(2.0)]);
    assert_eq!(out[1].valid_count(), 2);
}
