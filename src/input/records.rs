use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::model::record::{Record, ScoreField};

/// One decoded CSV row, keyed by header name.
pub type RawRow = BTreeMap<String, String>;

pub const DATE_COLUMN: &str = "date";

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y"];
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadOutcome {
    pub records: Vec<Record>,
    pub rows_read: usize,
    pub dropped_missing_date: usize,
    pub dropped_invalid_date: usize,
}

/// Turns header-keyed rows into records, keeping input order.
///
/// Rows with a blank or absent `date` are dropped, and so are rows whose date
/// cannot be read; both are counted in the outcome. Scores that are absent,
/// blank, non-numeric or non-finite become `None`.
pub fn load<I>(rows: I) -> LoadOutcome
where
    I: IntoIterator<Item = RawRow>,
{
    let mut out = LoadOutcome::default();

    for (idx, row) in rows.into_iter().enumerate() {
        out.rows_read += 1;
        let raw_date = row.get(DATE_COLUMN).map(|s| s.trim()).unwrap_or("");
        if raw_date.is_empty() {
            out.dropped_missing_date += 1;
            continue;
        }
        let Some(date) = parse_date(raw_date) else {
            tracing::warn!(row = idx + 1, date = raw_date, "unreadable date; dropping row");
            out.dropped_invalid_date += 1;
            continue;
        };

        let mut record = Record::new(date);
        for field in ScoreField::ALL {
            record = record.with_score(field, parse_score(row.get(field.column()).map(String::as_str)));
        }
        out.records.push(record);
    }

    out
}

/// Reads a calendar date from the common export spellings. A time of day or
/// UTC offset, when present, is discarded and the written date kept.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if s.len() == 8 && s.bytes().all(|b| b.is_ascii_digit()) {
        let year = s[..4].parse().ok()?;
        let month = s[4..6].parse().ok()?;
        let day = s[6..].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}

pub fn parse_score(raw: Option<&str>) -> Option<f64> {
    let value: f64 = raw?.trim().parse().ok()?;
    value.is_finite().then_some(value)
}
