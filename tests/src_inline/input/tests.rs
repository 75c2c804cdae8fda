
use super::*;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("kira_surveyqc_input_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_parse_trims_headers_and_strips_bom() {
    let data = "\u{feff}Timestamp , Saya mampu fokus saat belajar. ,Nama\n2024-01-01,4,Ani\n";
    let table = parse_table(data.as_bytes()).unwrap();
    assert_eq!(
        table.columns,
        vec!["Timestamp", "Saya mampu fokus saat belajar.", "Nama"]
    );
    assert_eq!(table.rows, vec![vec!["2024-01-01", "4", "Ani"]]);
    assert_eq!(table.column_index("  Nama "), Some(2));
    assert_eq!(table.column_index("missing"), None);
}

#[test]
fn test_parse_keeps_quoted_commas() {
    let data = "q,\"a, b\"\n1,\"x, y\"\n";
    let table = parse_table(data.as_bytes()).unwrap();
    assert_eq!(table.columns, vec!["q", "a, b"]);
    assert_eq!(table.rows[0], vec!["1", "x, y"]);
}

#[test]
fn test_parse_pads_and_truncates_ragged_rows() {
    let data = "a,b,c\n1\n1,2,3,4\n";
    let table = parse_table(data.as_bytes()).unwrap();
    assert_eq!(table.rows[0], vec!["1", "", ""]);
    assert_eq!(table.rows[1], vec!["1", "2", "3"]);
}

#[test]
fn test_parse_rejects_empty_header() {
    let err = parse_table("".as_bytes()).unwrap_err();
    assert!(matches!(err, InputError::Parse(_)));
}

#[test]
fn test_load_plain_and_gzip() {
    let dir = make_temp_dir();
    let content = "a,b\n1,2\n3,4\n";

    let plain = dir.join("survey.csv");
    fs::write(&plain, content).unwrap();
    let table = load_survey(&plain).unwrap();
    assert_eq!(table.n_rows(), 2);

    let gz = dir.join("survey.csv.gz");
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(content.as_bytes()).unwrap();
    fs::write(&gz, encoder.finish().unwrap()).unwrap();
    let table_gz = load_survey(&gz).unwrap();
    assert_eq!(table_gz, table);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = make_temp_dir();
    let err = load_survey(&dir.join("nope.csv")).unwrap_err();
    assert!(matches!(err, InputError::Io(_)));
}
