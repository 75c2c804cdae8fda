mod error;
mod input;
mod instrument;
mod logging;
mod model;
mod pipeline;
mod report;
mod stats;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::error::AppError;
use crate::input::load_survey;
use crate::instrument::Instrument;
use crate::instrument::loader::{builtin_instrument, load_instrument};
use crate::pipeline::analyze;
use crate::pipeline::stage8_report::{DEFAULT_EXPORT_NAME, ReportMeta, write_reports};
use crate::report::text::render_report_text;

const TOOL_NAME: &str = "kira-surveyqc";

#[derive(Debug, Parser)]
#[command(
    name = TOOL_NAME,
    version,
    about = "Composite scoring, reliability and association analysis for Likert survey exports"
)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze one CSV export and write the scored table and reports.
    Run(RunArgs),
    /// Print the built-in instrument as JSON, usable as a template for --instrument.
    Instrument,
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Survey export (CSV, optionally .gz).
    #[arg(long)]
    input: PathBuf,

    /// Output directory.
    #[arg(long)]
    out: PathBuf,

    /// Instrument definition (JSON). Defaults to the built-in questionnaire.
    #[arg(long)]
    instrument: Option<PathBuf>,

    /// File name of the exported table inside --out.
    #[arg(long, default_value = DEFAULT_EXPORT_NAME)]
    export_name: String,

    /// Carry every input column into the exported table, not only the items.
    #[arg(long)]
    keep_columns: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), AppError> {
    match command {
        Command::Run(args) => run_analysis(&args),
        Command::Instrument => {
            println!("{}", serde_json::to_string_pretty(&builtin_instrument())?);
            Ok(())
        }
    }
}

fn run_analysis(args: &RunArgs) -> Result<(), AppError> {
    let instrument = resolve_instrument(args)?;
    let table = load_survey(&args.input)?;
    let analysis = analyze(&table, &instrument)?;

    let meta = ReportMeta {
        tool_name: TOOL_NAME.to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        input: args.input.display().to_string(),
    };
    write_reports(
        &analysis,
        &table,
        &instrument,
        &meta,
        &args.out,
        &args.export_name,
        args.keep_columns,
    )?;

    print!("{}", render_report_text(&analysis, &instrument));
    Ok(())
}

fn resolve_instrument(args: &RunArgs) -> Result<Instrument, AppError> {
    match &args.instrument {
        Some(path) => Ok(load_instrument(path)?),
        None => Ok(builtin_instrument()),
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
