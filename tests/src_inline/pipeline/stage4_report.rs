use super::*;
use crate::locale::Locale;
use crate::model::notes::Notes;
use crate::model::record::{Record, ScoreField};
use crate::pipeline::compare;
use chrono::NaiveDate;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("oura_report_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn tool() -> ToolMeta {
    ToolMeta {
        name: "oura-compare".to_string(),
        version: "test".to_string(),
    }
}

fn table() -> Vec<Record> {
    let d = |m, day| NaiveDate::from_ymd_opt(2024, m, day).unwrap();
    vec![
        Record::new(d(1, 5)).with_score(ScoreField::Readiness, Some(74.4)),
        Record::new(d(2, 5)).with_score(ScoreField::Readiness, Some(74.6)),
    ]
}

#[test]
fn test_write_reports_ready() {
    let dir = make_temp_dir();
    let t = table();
    let cmp = compare(Some(t.as_slice()), "2024-01", "2024-02");
    let notes = Notes::new();
    let input = ReportInput {
        ctx: ReportContext::new(Locale::En, "2024-01", "2024-02", &cmp, &notes),
        tool: tool(),
        load: LoadStats::default(),
    };
    let paths = write_reports(&input, &dir).unwrap();

    let tsv = fs::read_to_string(&paths.chart).unwrap();
    assert_eq!(
        tsv,
        "field\t2024-01\t2024-02\nSleep Score\t0\t0\nActivity Score\t0\t0\nReadiness Score\t74\t75\n"
    );
    let report = fs::read_to_string(&paths.report).unwrap();
    assert!(report.contains("Readiness Score decreased 0.3% compared to the previous period."));
    let summary = fs::read_to_string(&paths.summary).unwrap();
    assert!(summary.contains("\"status\": \"ready\""));
}

#[test]
fn test_write_reports_unavailable() {
    let dir = make_temp_dir().join("nested");
    let cmp = compare(None, "2024-01", "2024-02");
    let notes = Notes::new();
    let input = ReportInput {
        ctx: ReportContext::new(Locale::Id, "2024-01", "2024-02", &cmp, &notes),
        tool: tool(),
        load: LoadStats::default(),
    };
    let paths = write_reports(&input, &dir).unwrap();
    let tsv = fs::read_to_string(&paths.chart).unwrap();
    assert_eq!(tsv, "field\t2024-01\t2024-02\n");
    let report = fs::read_to_string(&paths.report).unwrap();
    assert!(report.contains("Masukkan dua periode valid untuk perbandingan."));
}
