use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use oura_compare::input::InputError;
use oura_compare::input::load_table_file;
use oura_compare::locale::Locale;
use oura_compare::logging;
use oura_compare::pipeline::stage1_select::available_periods;
use oura_compare::pipeline::stage4_report::{ReportError, ReportInput, write_reports};
use oura_compare::pipeline::{Comparison, Unavailable};
use oura_compare::report::ReportContext;
use oura_compare::report::json::{LoadStats, ToolMeta};
use oura_compare::report::text::render_report_text;
use oura_compare::session::Session;

#[derive(Debug, Parser)]
#[command(
    name = "oura-compare",
    version,
    about = "Compare sleep, activity and readiness scores between two periods of a CSV export"
)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compare two periods and print the report.
    Compare(CompareArgs),
    /// List the years, months and ISO weeks present in an export.
    Periods(PeriodsArgs),
}

#[derive(Debug, Args)]
struct CompareArgs {
    /// CSV export with a `date` column (`.csv` or `.csv.gz`).
    #[arg(long)]
    input: PathBuf,
    /// Period of interest: YYYY, YYYY-MM, YYYY-Www or YYYY-MM-DD.
    #[arg(long = "period-a", allow_hyphen_values = true)]
    period_a: String,
    /// Period compared against, in the same shapes.
    #[arg(long = "period-b", allow_hyphen_values = true)]
    period_b: String,
    #[arg(long, default_value = "id")]
    lang: Locale,
    /// Directory for report.txt, comparison.tsv and summary.json.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Day note, repeatable.
    #[arg(long = "note", value_name = "DATE=TEXT")]
    notes: Vec<String>,
}

#[derive(Debug, Args)]
struct PeriodsArgs {
    #[arg(long)]
    input: PathBuf,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("invalid --note `{0}` (expected DATE=TEXT)")]
    InvalidNote(String),
}

#[derive(Debug, Clone, PartialEq)]
struct RunConfig {
    input: PathBuf,
    period_a: String,
    period_b: String,
    locale: Locale,
    out_dir: Option<PathBuf>,
    notes: Vec<(String, String)>,
}

impl TryFrom<CompareArgs> for RunConfig {
    type Error = CliError;

    fn try_from(args: CompareArgs) -> Result<Self, Self::Error> {
        let notes = args
            .notes
            .iter()
            .map(|raw| parse_note(raw))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RunConfig {
            input: args.input,
            period_a: args.period_a,
            period_b: args.period_b,
            locale: args.lang,
            out_dir: args.out,
            notes,
        })
    }
}

fn parse_note(raw: &str) -> Result<(String, String), CliError> {
    match raw.split_once('=') {
        Some((date, text)) if !date.trim().is_empty() => {
            Ok((date.trim().to_string(), text.to_string()))
        }
        _ => Err(CliError::InvalidNote(raw.to_string())),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Compare(args) => run_compare(RunConfig::try_from(args)?),
        Command::Periods(args) => run_periods(&args),
    }
}

fn run_compare(config: RunConfig) -> Result<(), CliError> {
    let outcome = load_table_file(&config.input)?;
    let load = LoadStats {
        input: config.input.display().to_string(),
        rows_read: outcome.rows_read,
        records: outcome.records.len(),
        dropped_missing_date: outcome.dropped_missing_date,
        dropped_invalid_date: outcome.dropped_invalid_date,
    };

    let mut session = Session::new(config.locale);
    session.replace_table(outcome.records);
    session.set_periods(&config.period_a, &config.period_b);
    for (date, text) in &config.notes {
        session.add_note(date, text);
    }
    log_unavailable(session.comparison());

    let ctx = ReportContext::new(
        session.locale(),
        session.period_a(),
        session.period_b(),
        session.comparison(),
        session.notes(),
    );
    print!("{}", render_report_text(&ctx));

    if let Some(out_dir) = &config.out_dir {
        let input = ReportInput {
            ctx,
            tool: ToolMeta {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            load,
        };
        write_reports(&input, out_dir)?;
    }
    Ok(())
}

fn run_periods(args: &PeriodsArgs) -> Result<(), CliError> {
    let outcome = load_table_file(&args.input)?;
    for (token, count) in available_periods(&outcome.records) {
        println!("{token}\t{count}");
    }
    Ok(())
}

fn log_unavailable(comparison: &Comparison) {
    let Comparison::Unavailable(reason) = comparison else {
        return;
    };
    match reason {
        Unavailable::NoTable => tracing::warn!("no table loaded"),
        Unavailable::EmptyPeriod { slot } => tracing::warn!(?slot, "period is empty"),
        Unavailable::InvalidPeriod { slot, token } => tracing::warn!(
            ?slot,
            token = token.as_str(),
            "period is not YYYY, YYYY-MM, YYYY-Www or YYYY-MM-DD"
        ),
        Unavailable::NoMatchingRecords { slot } => {
            tracing::warn!(?slot, "no records fall inside the period")
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
