use std::collections::BTreeMap;

use crate::model::period::PeriodToken;
use crate::model::record::Record;

/// How a raw period string was understood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodInput {
    Empty,
    Invalid,
    Valid(PeriodToken),
}

pub fn classify_period(raw: &str) -> PeriodInput {
    if raw.is_empty() {
        return PeriodInput::Empty;
    }
    match PeriodToken::parse(raw) {
        Some(token) => PeriodInput::Valid(token),
        None => PeriodInput::Invalid,
    }
}

/// Records of `table` falling inside the period named by `raw`, in table
/// order. Empty for an empty table, an empty token or an unrecognized token.
pub fn select_by_period<'a>(table: &'a [Record], raw: &str) -> Vec<&'a Record> {
    match classify_period(raw) {
        PeriodInput::Valid(token) => select_by_token(table, token),
        PeriodInput::Empty | PeriodInput::Invalid => Vec::new(),
    }
}

pub fn select_by_token(table: &[Record], token: PeriodToken) -> Vec<&Record> {
    table.iter().filter(|r| token.matches(r.date)).collect()
}

/// Year, month and ISO-week tokens that select at least one record, with
/// how many records each selects, in token order.
pub fn available_periods(table: &[Record]) -> Vec<(PeriodToken, usize)> {
    let mut counts: BTreeMap<PeriodToken, usize> = BTreeMap::new();
    for r in table {
        for token in [
            PeriodToken::year_of(r.date),
            PeriodToken::month_of(r.date),
            PeriodToken::week_of(r.date),
        ] {
            *counts.entry(token).or_insert(0) += 1;
        }
    }
    counts.into_iter().collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_select.rs"]
mod tests;
