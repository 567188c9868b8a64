use serde::Serialize;

use crate::model::record::ScoreField;
use crate::pipeline::stage2_aggregate::FieldAverages;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Increased,
    Decreased,
}

/// Relative change of one field between period A and period B (the
/// "previous" period).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Insight {
    pub field: ScoreField,
    pub direction: Direction,
    /// Magnitude of the change, rounded to one decimal.
    pub percent: f64,
}

/// One insight per field in fixed field order. A field is skipped when
/// either average is absent or zero.
pub fn generate_insights(averages: &[FieldAverages]) -> Vec<Insight> {
    let mut out = Vec::with_capacity(averages.len());
    for avg in averages {
        let (Some(a), Some(b)) = (avg.average_a, avg.average_b) else {
            continue;
        };
        if a == 0.0 || b == 0.0 {
            continue;
        }
        let diff = (a - b) / b * 100.0;
        out.push(Insight {
            field: avg.field,
            direction: if diff > 0.0 {
                Direction::Increased
            } else {
                Direction::Decreased
            },
            percent: round_tenth(diff.abs()),
        });
    }
    out
}

pub fn round_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_insights.rs"]
mod tests;
