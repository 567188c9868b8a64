use std::fmt;

use chrono::{Datelike, NaiveDate};

/// A user-entered period identifier.
///
/// Shapes are tested in a fixed order and the first match wins:
/// `YYYY`, `YYYY-MM`, `YYYY-Www` (one or two week digits), `YYYY-MM-DD`.
/// Components are kept as written, so `2024-13` is a valid month token that
/// simply selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PeriodToken {
    Year(i32),
    YearMonth { year: i32, month: u32 },
    IsoWeek { year: i32, week: u32 },
    Day { year: i32, month: u32, day: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodKind {
    Year,
    YearMonth,
    IsoWeek,
    Day,
}

impl PeriodToken {
    pub fn parse(token: &str) -> Option<Self> {
        let b = token.as_bytes();

        if b.len() == 4 {
            return digits(b).map(|y| PeriodToken::Year(y as i32));
        }

        if b.len() == 7 && b[4] == b'-' {
            if let (Some(year), Some(month)) = (digits(&b[..4]), digits(&b[5..])) {
                return Some(PeriodToken::YearMonth {
                    year: year as i32,
                    month,
                });
            }
        }

        if (b.len() == 7 || b.len() == 8) && b[4] == b'-' && b[5] == b'W' {
            if let (Some(year), Some(week)) = (digits(&b[..4]), digits(&b[6..])) {
                return Some(PeriodToken::IsoWeek {
                    year: year as i32,
                    week,
                });
            }
        }

        if b.len() == 10 && b[4] == b'-' && b[7] == b'-' {
            if let (Some(year), Some(month), Some(day)) =
                (digits(&b[..4]), digits(&b[5..7]), digits(&b[8..]))
            {
                return Some(PeriodToken::Day {
                    year: year as i32,
                    month,
                    day,
                });
            }
        }

        None
    }

    pub fn kind(&self) -> PeriodKind {
        match self {
            PeriodToken::Year(_) => PeriodKind::Year,
            PeriodToken::YearMonth { .. } => PeriodKind::YearMonth,
            PeriodToken::IsoWeek { .. } => PeriodKind::IsoWeek,
            PeriodToken::Day { .. } => PeriodKind::Day,
        }
    }

    /// Week matching pairs the ISO week number with the calendar year of the
    /// date, not the ISO week-numbering year.
    pub fn matches(&self, date: NaiveDate) -> bool {
        match *self {
            PeriodToken::Year(year) => date.year() == year,
            PeriodToken::YearMonth { year, month } => date.year() == year && date.month() == month,
            PeriodToken::IsoWeek { year, week } => {
                date.iso_week().week() == week && date.year() == year
            }
            PeriodToken::Day { year, month, day } => {
                date.year() == year && date.month() == month && date.day() == day
            }
        }
    }

    pub fn year_of(date: NaiveDate) -> Self {
        PeriodToken::Year(date.year())
    }

    pub fn month_of(date: NaiveDate) -> Self {
        PeriodToken::YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn week_of(date: NaiveDate) -> Self {
        PeriodToken::IsoWeek {
            year: date.year(),
            week: date.iso_week().week(),
        }
    }

    pub fn day_of(date: NaiveDate) -> Self {
        PeriodToken::Day {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for PeriodToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodToken::Year(year) => write!(f, "{year:04}"),
            PeriodToken::YearMonth { year, month } => write!(f, "{year:04}-{month:02}"),
            PeriodToken::IsoWeek { year, week } => write!(f, "{year:04}-W{week}"),
            PeriodToken::Day { year, month, day } => write!(f, "{year:04}-{month:02}-{day:02}"),
        }
    }
}

fn digits(b: &[u8]) -> Option<u32> {
    if b.is_empty() {
        return None;
    }
    let mut value = 0u32;
    for &c in b {
        if !c.is_ascii_digit() {
            return None;
        }
        value = value * 10 + u32::from(c - b'0');
    }
    Some(value)
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/period.rs"]
mod tests;
