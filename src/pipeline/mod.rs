pub mod stage1_select;
pub mod stage2_aggregate;
pub mod stage3_insights;
pub mod stage4_report;

use serde::Serialize;

use crate::model::period::PeriodToken;
use crate::model::record::Record;
use stage1_select::{PeriodInput, classify_period, select_by_period};
use stage2_aggregate::{ChartEntry, FieldAverages, chart_entries, field_averages};
use stage3_insights::{Insight, generate_insights};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodSlot {
    A,
    B,
}

/// Why no comparison could be drawn. Every reason renders the same
/// placeholder; the distinction is kept for logs and the JSON summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Unavailable {
    NoTable,
    EmptyPeriod { slot: PeriodSlot },
    InvalidPeriod { slot: PeriodSlot, token: String },
    NoMatchingRecords { slot: PeriodSlot },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub period_a: String,
    pub period_b: String,
    pub records_a: usize,
    pub records_b: usize,
    pub averages: Vec<FieldAverages>,
    pub chart: Vec<ChartEntry>,
    pub insights: Vec<Insight>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Comparison {
    Ready(ComparisonResult),
    Unavailable(Unavailable),
}

impl Comparison {
    pub fn result(&self) -> Option<&ComparisonResult> {
        match self {
            Comparison::Ready(r) => Some(r),
            Comparison::Unavailable(_) => None,
        }
    }
}

/// Averages, chart data and insights for two already-selected subsets.
/// `None` when either subset is empty.
pub fn summarize(
    period_a: &str,
    subset_a: &[&Record],
    period_b: &str,
    subset_b: &[&Record],
) -> Option<ComparisonResult> {
    if subset_a.is_empty() || subset_b.is_empty() {
        return None;
    }
    let averages = field_averages(subset_a, subset_b);
    let chart = chart_entries(&averages);
    let insights = generate_insights(&averages);
    Some(ComparisonResult {
        period_a: period_a.to_string(),
        period_b: period_b.to_string(),
        records_a: subset_a.len(),
        records_b: subset_b.len(),
        averages,
        chart,
        insights,
    })
}

/// Runs selection and aggregation for both periods over `table`.
/// `table` is `None` until a file has been loaded.
pub fn compare(table: Option<&[Record]>, period_a: &str, period_b: &str) -> Comparison {
    let Some(table) = table else {
        return Comparison::Unavailable(Unavailable::NoTable);
    };

    let token_a = match resolve(period_a, PeriodSlot::A) {
        Ok(t) => t,
        Err(reason) => return Comparison::Unavailable(reason),
    };
    let token_b = match resolve(period_b, PeriodSlot::B) {
        Ok(t) => t,
        Err(reason) => return Comparison::Unavailable(reason),
    };

    let subset_a = select_by_period(table, period_a);
    let subset_b = select_by_period(table, period_b);
    tracing::debug!(
        period_a,
        kind_a = ?token_a.kind(),
        period_b,
        kind_b = ?token_b.kind(),
        records_a = subset_a.len(),
        records_b = subset_b.len(),
        "selected periods"
    );

    if subset_a.is_empty() {
        return Comparison::Unavailable(Unavailable::NoMatchingRecords { slot: PeriodSlot::A });
    }
    if subset_b.is_empty() {
        return Comparison::Unavailable(Unavailable::NoMatchingRecords { slot: PeriodSlot::B });
    }

    match summarize(period_a, &subset_a, period_b, &subset_b) {
        Some(result) => Comparison::Ready(result),
        None => Comparison::Unavailable(Unavailable::NoMatchingRecords { slot: PeriodSlot::A }),
    }
}

fn resolve(raw: &str, slot: PeriodSlot) -> Result<PeriodToken, Unavailable> {
    match classify_period(raw) {
        PeriodInput::Valid(token) => Ok(token),
        PeriodInput::Empty => Err(Unavailable::EmptyPeriod { slot }),
        PeriodInput::Invalid => Err(Unavailable::InvalidPeriod {
            slot,
            token: raw.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/compare.rs"]
mod tests;
