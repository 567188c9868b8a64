pub mod json;
pub mod text;

use crate::locale::{Labels, Locale};
use crate::model::notes::Notes;
use crate::pipeline::Comparison;

pub const BAR_WIDTH: usize = 40;
/// Scores are drawn on a fixed 0-100 axis.
pub const SCORE_DOMAIN_MAX: f64 = 100.0;

#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    pub locale: Locale,
    pub labels: &'static Labels,
    pub period_a: &'a str,
    pub period_b: &'a str,
    pub comparison: &'a Comparison,
    pub notes: &'a Notes,
}

impl<'a> ReportContext<'a> {
    pub fn new(
        locale: Locale,
        period_a: &'a str,
        period_b: &'a str,
        comparison: &'a Comparison,
        notes: &'a Notes,
    ) -> Self {
        Self {
            locale,
            labels: locale.labels(),
            period_a,
            period_b,
            comparison,
            notes,
        }
    }

    pub fn insight_lines(&self) -> Vec<String> {
        match self.comparison.result() {
            Some(r) => r
                .insights
                .iter()
                .map(|i| self.labels.insight_sentence(i))
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Horizontal bar for `value` on the 0-100 axis; out-of-range values are
/// clamped to the axis.
pub fn bar(value: i64, width: usize) -> String {
    let clamped = (value as f64).clamp(0.0, SCORE_DOMAIN_MAX);
    let filled = ((clamped / SCORE_DOMAIN_MAX) * width as f64).round() as usize;
    let mut out = String::with_capacity(width * 3);
    for i in 0..width {
        out.push(if i < filled { '█' } else { '·' });
    }
    out
}

/// Drops the input-format hint from a period prompt, e.g.
/// `Period 1 (YYYY-MM-DD / ...)` becomes `Period 1`.
pub fn short_label(label: &str) -> &str {
    label.split(" (").next().unwrap_or(label).trim()
}

pub fn format_average(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", v),
        None => "-".to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
