use serde::Serialize;

use crate::model::record::{Record, ScoreField};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldAverages {
    pub field: ScoreField,
    pub average_a: Option<f64>,
    pub average_b: Option<f64>,
}

/// One bar group: both periods' averages rounded to whole points, with an
/// absent average drawn as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartEntry {
    pub field: ScoreField,
    pub value_a: i64,
    pub value_b: i64,
}

/// Mean of the values present for `field`. A recorded zero counts as a value;
/// `None` only when no record in the subset carries the field.
pub fn average(records: &[&Record], field: ScoreField) -> Option<f64> {
    let mut sum = 0.0f64;
    let mut n = 0usize;
    for r in records {
        if let Some(v) = r.score(field) {
            sum += v;
            n += 1;
        }
    }
    if n == 0 {
        return None;
    }
    Some(sum / n as f64)
}

pub fn field_averages(subset_a: &[&Record], subset_b: &[&Record]) -> Vec<FieldAverages> {
    ScoreField::ALL
        .iter()
        .map(|&field| FieldAverages {
            field,
            average_a: average(subset_a, field),
            average_b: average(subset_b, field),
        })
        .collect()
}

pub fn chart_entries(averages: &[FieldAverages]) -> Vec<ChartEntry> {
    averages
        .iter()
        .map(|a| ChartEntry {
            field: a.field,
            value_a: round_score(a.average_a),
            value_b: round_score(a.average_b),
        })
        .collect()
}

/// Nearest integer, halves away from zero.
pub fn round_score(value: Option<f64>) -> i64 {
    value.map(|v| v.round() as i64).unwrap_or(0)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_aggregate.rs"]
mod tests;
