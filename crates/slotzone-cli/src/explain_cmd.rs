use std::process::ExitCode;

use chrono::Utc;
use serde::Serialize;
use slotzone_core::parse::{ParsedInput, parse_input};
use slotzone_core::tz::{format_rfc3339, format_rfc3339_utc};
use slotzone_core::{Clock, InputKind, Normalizer};

use crate::cli::ExplainArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{build_normalizer, print_json};

pub fn run_explain(args: ExplainArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let normalizer = build_normalizer(&args.zone)?;
    let result = explain_value(&args.value, &normalizer)?;

    match output_format {
        OutputFormat::Json => print_json(&result, true)?,
        OutputFormat::Text => {
            println!("Input: {}", result.input);
            println!("Kind: {}", result.kind);
            println!("Timezone: {}", result.tz);
            println!("Reading: {}", result.reading);
            println!("Local: {}", result.local);
            println!("UTC: {}", result.utc);
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

#[derive(Debug, Serialize)]
struct ExplainResult {
    input: String,
    kind: InputKind,
    tz: String,
    reading: String,
    local: String,
    utc: String,
    date: String,
    time: String,
}

fn explain_value<C: Clock>(value: &str, normalizer: &Normalizer<C>) -> CliResult<ExplainResult> {
    let parsed = parse_input(value).map_err(|e| CliError::core("Cannot explain input", e))?;
    let resolved = normalizer
        .resolve(value)
        .map_err(|e| CliError::core("Cannot resolve input", e))?;

    let reading = match parsed {
        ParsedInput::Offset(dt) => format!("absolute instant with offset {}", dt.offset()),
        ParsedInput::LegacyTimeOnly(time) => format!(
            "legacy time-only payload, {} on {}",
            time.format("%H:%M"),
            normalizer.today()
        ),
        ParsedInput::Bare(_) => format!(
            "no offset, read as {} wall clock",
            normalizer.bare_policy()
        ),
    };

    Ok(ExplainResult {
        input: value.trim().to_string(),
        kind: parsed.kind(),
        tz: normalizer.zone().to_string(),
        reading,
        local: format_rfc3339(&resolved),
        utc: format_rfc3339_utc(&resolved.with_timezone(&Utc)),
        date: resolved.format("%Y-%m-%d").to_string(),
        time: resolved.format("%H:%M").to_string(),
    })
}
