use std::process::ExitCode;

use chrono::Utc;
use serde::Serialize;
use slotzone_core::tz::{format_rfc3339, format_rfc3339_utc};

use crate::cli::ComposeArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{build_normalizer, print_json};

pub fn run_compose(args: ComposeArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let normalizer = build_normalizer(&args.zone)?;

    let scheduled = normalizer
        .try_compose_scheduled_instant(&args.time, args.date.as_deref())
        .map_err(|e| CliError::core("Cannot compose scheduled instant", e))?;

    let result = ComposeResult {
        time: args.time,
        date: scheduled.date_naive().format("%Y-%m-%d").to_string(),
        tz: normalizer.zone().to_string(),
        scheduled_datetime: format_rfc3339(&scheduled),
        scheduled_utc: format_rfc3339_utc(&scheduled.with_timezone(&Utc)),
    };

    match output_format {
        OutputFormat::Json => print_json(&result, true)?,
        OutputFormat::Text => {
            println!("Scheduled: {}", result.scheduled_datetime);
            println!("UTC: {}", result.scheduled_utc);
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

#[derive(Debug, Serialize)]
struct ComposeResult {
    time: String,
    date: String,
    tz: String,
    scheduled_datetime: String,
    scheduled_utc: String,
}
