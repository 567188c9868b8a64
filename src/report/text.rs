use crate::report::{BAR_WIDTH, ReportContext, bar, format_average, short_label};

pub fn render_report_text(ctx: &ReportContext<'_>) -> String {
    let labels = ctx.labels;
    let mut out = String::new();

    out.push_str(labels.title);
    out.push('\n');
    out.push_str(&"=".repeat(labels.title.chars().count()));
    out.push_str("\n\n");

    out.push_str(labels.comparison);
    out.push('\n');
    out.push_str(&format!(
        "{}: {}\n",
        short_label(labels.compare_period_1),
        ctx.period_a
    ));
    out.push_str(&format!(
        "{}: {}\n\n",
        short_label(labels.compare_period_2),
        ctx.period_b
    ));

    match ctx.comparison.result() {
        Some(result) => {
            let key_width = ctx.period_a.chars().count().max(ctx.period_b.chars().count());
            for (entry, avg) in result.chart.iter().zip(result.averages.iter()) {
                out.push_str(labels.field_name(entry.field));
                out.push('\n');
                out.push_str(&format!(
                    "  {:<w$}  {}  {:>3}  ({})\n",
                    ctx.period_a,
                    bar(entry.value_a, BAR_WIDTH),
                    entry.value_a,
                    format_average(avg.average_a),
                    w = key_width
                ));
                out.push_str(&format!(
                    "  {:<w$}  {}  {:>3}  ({})\n",
                    ctx.period_b,
                    bar(entry.value_b, BAR_WIDTH),
                    entry.value_b,
                    format_average(avg.average_b),
                    w = key_width
                ));
            }
            out.push('\n');

            let lines = ctx.insight_lines();
            if !lines.is_empty() {
                out.push_str(labels.insight);
                out.push('\n');
                for line in lines {
                    out.push_str(&format!("- {}\n", line));
                }
                out.push('\n');
            }
        }
        None => {
            out.push_str(labels.no_comparison);
            out.push_str("\n\n");
        }
    }

    if !ctx.notes.is_empty() {
        out.push_str(labels.notes);
        out.push('\n');
        for (date, text) in ctx.notes.iter() {
            out.push_str(&format!("{}: {}\n", date.format("%Y-%m-%d"), text));
        }
        out.push('\n');
    }

    out.push_str(labels.footer);
    out.push('\n');
    out
}
