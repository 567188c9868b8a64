use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::NaiveDate;
use flate2::Compression;
use flate2::write::GzEncoder;

use super::records::{RawRow, load, parse_date, parse_score};
use super::{InputError, load_csv_reader, load_table_file};
use crate::model::record::ScoreField;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("oura_compare_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_file(path: &Path, contents: &str) {
    let mut f = BufWriter::new(File::create(path).unwrap());
    f.write_all(contents.as_bytes()).unwrap();
}

fn write_gz(path: &Path, contents: &str) {
    let mut enc = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    enc.write_all(contents.as_bytes()).unwrap();
    enc.finish().unwrap();
}

fn row(pairs: &[(&str, &str)]) -> RawRow {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

const SAMPLE: &str = "date,Sleep Score,Activity Score,Readiness Score,Steps\n\
2024-01-10,70,80,75,9000\n\
,88,88,88,1\n\
2024-01-20,90,,n/a,12000\n\
not-a-date,50,50,50,0\n";

#[test]
fn test_rows_without_date_are_dropped() {
    let outcome = load(vec![
        row(&[("date", ""), ("Sleep Score", "80")]),
        row(&[("Sleep Score", "80")]),
        row(&[("date", "   ")]),
        row(&[("date", "2024-01-10"), ("Sleep Score", "80")]),
    ]);
    assert_eq!(outcome.rows_read, 4);
    assert_eq!(outcome.dropped_missing_date, 3);
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].date, date(2024, 1, 10));
}

#[test]
fn test_unreadable_date_drops_row_and_is_counted() {
    let outcome = load(vec![
        row(&[("date", "garbage")]),
        row(&[("date", "2024-02-30")]),
        row(&[("date", "2024-02-29")]),
    ]);
    assert_eq!(outcome.dropped_invalid_date, 2);
    assert_eq!(outcome.records.len(), 1);
}

#[test]
fn test_scores_absent_or_non_numeric_become_none() {
    let outcome = load(vec![row(&[
        ("date", "2024-01-10"),
        ("Sleep Score", " 71.5 "),
        ("Activity Score", "abc"),
        ("Readiness Score", "0"),
    ])]);
    let r = &outcome.records[0];
    assert_eq!(r.score(ScoreField::Sleep), Some(71.5));
    assert_eq!(r.score(ScoreField::Activity), None);
    assert_eq!(r.score(ScoreField::Readiness), Some(0.0));
}

#[test]
fn test_order_preserved() {
    let outcome = load(vec![
        row(&[("date", "2024-03-01")]),
        row(&[("date", "2024-01-01")]),
        row(&[("date", "2024-02-01")]),
    ]);
    let dates: Vec<NaiveDate> = outcome.records.iter().map(|r| r.date).collect();
    assert_eq!(dates, vec![date(2024, 3, 1), date(2024, 1, 1), date(2024, 2, 1)]);
}

#[test]
fn test_parse_date_spellings() {
    let expected = Some(date(2024, 1, 10));
    assert_eq!(parse_date("2024-01-10"), expected);
    assert_eq!(parse_date(" 2024-01-10 "), expected);
    assert_eq!(parse_date("2024/01/10"), expected);
    assert_eq!(parse_date("20240110"), expected);
    assert_eq!(parse_date("10.01.2024"), expected);
    assert_eq!(parse_date("2024-01-10T23:59:59"), expected);
    assert_eq!(parse_date("2024-01-10 06:30:00.250"), expected);
    assert_eq!(parse_date("2024-01-10T23:30:00+07:00"), expected);
    assert_eq!(parse_date("2024-01-10T01:00:00Z"), expected);
    assert_eq!(parse_date(""), None);
    assert_eq!(parse_date("20241310"), None);
    assert_eq!(parse_date("tomorrow"), None);
}

#[test]
fn test_parse_score() {
    assert_eq!(parse_score(Some("85")), Some(85.0));
    assert_eq!(parse_score(Some("1e2")), Some(100.0));
    assert_eq!(parse_score(Some("")), None);
    assert_eq!(parse_score(Some("NaN")), None);
    assert_eq!(parse_score(Some("inf")), None);
    assert_eq!(parse_score(None), None);
}

#[test]
fn test_csv_reader_ignores_extra_columns() {
    let outcome = load_csv_reader(SAMPLE.as_bytes()).unwrap();
    assert_eq!(outcome.rows_read, 4);
    assert_eq!(outcome.dropped_missing_date, 1);
    assert_eq!(outcome.dropped_invalid_date, 1);
    assert_eq!(outcome.records.len(), 2);

    let second = &outcome.records[1];
    assert_eq!(second.date, date(2024, 1, 20));
    assert_eq!(second.sleep_score, Some(90.0));
    assert_eq!(second.activity_score, None);
    assert_eq!(second.readiness_score, None);
}

#[test]
fn test_csv_reader_handles_bom_and_padded_headers() {
    let text = "\u{feff}date , Sleep Score\n2024-01-10,66\n";
    let outcome = load_csv_reader(text.as_bytes()).unwrap();
    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].sleep_score, Some(66.0));
}

#[test]
fn test_csv_reader_requires_date_column() {
    let err = load_csv_reader("day,Sleep Score\n2024-01-10,66\n".as_bytes()).unwrap_err();
    assert!(matches!(err, InputError::InvalidInput(_)));
}

#[test]
fn test_load_table_file_plain_and_gz() {
    let dir = make_temp_dir();
    let plain = dir.join("oura.csv");
    let gz = dir.join("oura.csv.gz");
    write_file(&plain, SAMPLE);
    write_gz(&gz, SAMPLE);

    let a = load_table_file(&plain).unwrap();
    let b = load_table_file(&gz).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.records.len(), 2);
}

#[test]
fn test_load_table_file_missing() {
    let dir = make_temp_dir();
    let err = load_table_file(&dir.join("nope.csv")).unwrap_err();
    assert!(matches!(err, InputError::MissingInput(_)));
}

#[test]
fn test_csv_reader_survives_non_utf8_cells() {
    let mut bytes = b"date,Sleep Score,Comment\n2024-01-10,70,ok\n2024-01-11,80,caf".to_vec();
    bytes.push(0xE9);
    bytes.extend_from_slice(b"\n2024-01-12,90,ok\n");
    let outcome = load_csv_reader(bytes.as_slice()).unwrap();
    assert_eq!(outcome.records.len(), 3);
    assert_eq!(outcome.records[1].sleep_score, Some(80.0));
}

#[test]
fn test_csv_reader_empty_input_is_empty_table() {
    let outcome = load_csv_reader("".as_bytes()).unwrap();
    assert_eq!(outcome, super::records::LoadOutcome::default());
    let outcome = load_csv_reader("\n\n".as_bytes()).unwrap();
    assert!(outcome.records.is_empty());
}
