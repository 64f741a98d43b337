use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
mod compose_cmd;
mod convert_cmd;
mod error;
mod explain_cmd;
mod shared;
mod slots_cmd;

use cli::{Cli, Commands};
use compose_cmd::run_compose;
use convert_cmd::run_convert;
use error::{CliResult, OutputFormat, output_format_hint, parse_output_format, render_error};
use explain_cmd::run_explain;
use slots_cmd::run_slots;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    debug!("Parsed CLI args: {:?}", cli);

    match cli.command {
        Commands::Convert(args) => {
            let format = args.output_format.clone();
            dispatch(&format, |output_format| run_convert(args, output_format))
        }
        Commands::Compose(args) => {
            let format = args.output_format.clone();
            dispatch(&format, |output_format| run_compose(args, output_format))
        }
        Commands::Slots(args) => {
            let format = args.output_format.clone();
            dispatch(&format, |output_format| run_slots(args, output_format))
        }
        Commands::Explain(args) => {
            let format = args.output_format.clone();
            dispatch(&format, |output_format| run_explain(args, output_format))
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn dispatch<F>(format: &str, run: F) -> ExitCode
where
    F: FnOnce(OutputFormat) -> CliResult<ExitCode>,
{
    let output_format = match parse_output_format(format) {
        Ok(output_format) => output_format,
        Err(err) => return render_error(&err, output_format_hint(format)),
    };

    match run(output_format) {
        Ok(code) => code,
        Err(err) => render_error(&err, output_format),
    }
}
