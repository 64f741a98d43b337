use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use slotzone_core::{BareInputPolicy, Conversion, FixedClock, Normalizer};
use tracing::debug;

use crate::cli::ZoneArgs;
use crate::error::{CliError, CliResult};

pub fn parse_tz_or_input_error(name: &str) -> CliResult<Tz> {
    slotzone_core::tz::parse_tz(name)
        .map_err(|e| CliError::input(format!("Invalid timezone '{}': {}", name, e)))
}

pub fn parse_bare_policy(s: &str) -> CliResult<BareInputPolicy> {
    s.parse::<BareInputPolicy>().map_err(|_| {
        CliError::input(format!(
            "Invalid assume '{}'. Expected: reference, utc",
            s
        ))
    })
}

pub fn parse_conversion(s: &str) -> CliResult<Conversion> {
    s.parse::<Conversion>().map_err(|_| {
        CliError::input(format!(
            "Invalid conversion '{}'. Expected: local, utc, date, from_date, time",
            s
        ))
    })
}

pub fn parse_now(s: &str) -> CliResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| CliError::input(format!("Invalid now '{}': {}", s, e)))
}

/// Build a normalizer from the shared zone options.
///
/// Without `--now` the clock is pinned at startup so every line of one run
/// agrees on "today".
pub fn build_normalizer(args: &ZoneArgs) -> CliResult<Normalizer<FixedClock>> {
    let tz = parse_tz_or_input_error(&args.tz)?;
    let policy = parse_bare_policy(&args.assume)?;
    let now = match &args.now {
        Some(s) => parse_now(s)?,
        None => Utc::now(),
    };

    debug!(tz = %tz, assume = %policy, now = %now, "built normalizer");

    Ok(Normalizer::new(tz)
        .with_bare_policy(policy)
        .with_clock(FixedClock::new(now)))
}

pub fn open_lines(input: &str) -> CliResult<Box<dyn BufRead>> {
    if input == "-" {
        Ok(Box::new(io::stdin().lock()))
    } else {
        let file = File::open(input)
            .map_err(|e| CliError::runtime(format!("Failed to open file '{}': {}", input, e)))?;
        Ok(Box::new(BufReader::new(file)))
    }
}

pub fn read_all(input: &str) -> CliResult<String> {
    let mut content = String::new();
    open_lines(input)?
        .read_to_string(&mut content)
        .map_err(|e| CliError::runtime(format!("Failed to read '{}': {}", input, e)))?;
    Ok(content)
}

pub fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> CliResult<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
    println!("{}", json);
    Ok(())
}
