use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::pipeline::Comparison;
use crate::report::ReportContext;
use crate::report::json::{LoadStats, ToolMeta, build_summary, render_summary_json};
use crate::report::text::render_report_text;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct ReportInput<'a> {
    pub ctx: ReportContext<'a>,
    pub tool: ToolMeta,
    pub load: LoadStats,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub report: PathBuf,
    pub chart: PathBuf,
    pub summary: PathBuf,
}

/// Writes `report.txt`, `comparison.tsv` and `summary.json` into `out_dir`.
pub fn write_reports(input: &ReportInput<'_>, out_dir: &Path) -> Result<ReportPaths, ReportError> {
    fs::create_dir_all(out_dir)?;

    let paths = ReportPaths {
        report: out_dir.join("report.txt"),
        chart: out_dir.join("comparison.tsv"),
        summary: out_dir.join("summary.json"),
    };

    write_text(&paths.report, &render_report_text(&input.ctx))?;
    write_chart_tsv(&input.ctx, &paths.chart)?;

    let summary = build_summary(&input.ctx, input.tool.clone(), input.load.clone());
    write_text(&paths.summary, &render_summary_json(&summary)?)?;

    tracing::info!(out_dir = %out_dir.display(), "wrote reports");
    Ok(paths)
}

/// Chart table with one row per field; header only when no comparison is
/// available.
fn write_chart_tsv(ctx: &ReportContext<'_>, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "field\t{}\t{}", ctx.period_a, ctx.period_b)?;
    if let Comparison::Ready(result) = ctx.comparison {
        for entry in &result.chart {
            writeln!(
                w,
                "{}\t{}\t{}",
                entry.field.column(),
                entry.value_a,
                entry.value_b
            )?;
        }
    }
    w.flush()
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
