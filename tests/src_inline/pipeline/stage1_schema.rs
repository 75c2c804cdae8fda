
use super::*;
use crate::instrument::loader::builtin_instrument;

fn table_with(columns: &[&str]) -> SurveyTable {
    SurveyTable {
        columns: columns.iter().map(|s| s.to_string()).collect(),
        rows: vec![],
    }
}

#[test]
fn test_all_columns_present_in_any_order() {
    let instrument = builtin_instrument();
    let mut columns: Vec<&str> = vec!["Timestamp"];
    columns.extend(instrument.y.items.iter().map(String::as_str));
    columns.extend(instrument.x.items.iter().rev().map(String::as_str));
    let table = table_with(&columns);

    let found = run_stage1(&table, &instrument).unwrap();
    assert_eq!(found.x.len(), 10);
    assert_eq!(found.y, (1..=10).collect::<Vec<_>>());
    // x items were written in reverse after the y block
    assert_eq!(found.x[0], 20);
    assert_eq!(found.x[9], 11);
}

#[test]
fn test_reports_exactly_the_missing_names() {
    let instrument = builtin_instrument();
    let mut columns: Vec<&str> = instrument.x.items.iter().map(String::as_str).collect();
    columns.extend(instrument.y.items.iter().map(String::as_str));
    let dropped = [
        instrument.x.items[3].as_str(),
        instrument.y.items[0].as_str(),
        instrument.y.items[9].as_str(),
    ];
    columns.retain(|c| !dropped.contains(c));
    let table = table_with(&columns);

    let report = run_stage1(&table, &instrument).unwrap_err();
    assert_eq!(report.x.columns, vec![instrument.x.items[3].clone()]);
    assert_eq!(
        report.y.columns,
        vec![instrument.y.items[0].clone(), instrument.y.items[9].clone()]
    );
    assert_eq!(report.missing_count(), 3);
    let text = report.to_string();
    assert!(text.contains(&instrument.x.items[3]));
    assert!(text.contains("missing Y columns"));
}

#[test]
fn test_empty_header_reports_every_item() {
    let instrument = builtin_instrument();
    let report = run_stage1(&table_with(&["Timestamp"]), &instrument).unwrap_err();
    assert_eq!(report.x.columns, instrument.x.items);
    assert_eq!(report.y.columns, instrument.y.items);
}
