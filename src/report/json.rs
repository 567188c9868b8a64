use serde::Serialize;

use crate::locale::Locale;
use crate::pipeline::stage2_aggregate::{ChartEntry, FieldAverages};
use crate::pipeline::stage3_insights::Insight;
use crate::pipeline::{Comparison, Unavailable};
use crate::report::ReportContext;

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadStats {
    pub input: String,
    pub rows_read: usize,
    pub records: usize,
    pub dropped_missing_date: usize,
    pub dropped_invalid_date: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderedInsight {
    #[serde(flatten)]
    pub insight: Insight,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NoteEntry {
    pub date: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ComparisonSummary {
    Ready {
        records_a: usize,
        records_b: usize,
        averages: Vec<FieldAverages>,
        chart: Vec<ChartEntry>,
        insights: Vec<RenderedInsight>,
    },
    Unavailable {
        #[serde(flatten)]
        reason: Unavailable,
        message: String,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub tool: ToolMeta,
    pub load: LoadStats,
    pub locale: Locale,
    pub period_a: String,
    pub period_b: String,
    pub comparison: ComparisonSummary,
    pub notes: Vec<NoteEntry>,
}

pub fn build_summary(ctx: &ReportContext<'_>, tool: ToolMeta, load: LoadStats) -> Summary {
    let comparison = match ctx.comparison {
        Comparison::Ready(result) => ComparisonSummary::Ready {
            records_a: result.records_a,
            records_b: result.records_b,
            averages: result.averages.clone(),
            chart: result.chart.clone(),
            insights: result
                .insights
                .iter()
                .map(|i| RenderedInsight {
                    insight: *i,
                    text: ctx.labels.insight_sentence(i),
                })
                .collect(),
        },
        Comparison::Unavailable(reason) => ComparisonSummary::Unavailable {
            reason: reason.clone(),
            message: ctx.labels.no_comparison.to_string(),
        },
    };

    Summary {
        tool,
        load,
        locale: ctx.locale,
        period_a: ctx.period_a.to_string(),
        period_b: ctx.period_b.to_string(),
        comparison,
        notes: ctx
            .notes
            .iter()
            .map(|(date, text)| NoteEntry {
                date: date.format("%Y-%m-%d").to_string(),
                text: text.to_string(),
            })
            .collect(),
    }
}

pub fn render_summary_json(summary: &Summary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}
