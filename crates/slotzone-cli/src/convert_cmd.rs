use std::io::BufRead;
use std::process::ExitCode;

use slotzone_core::{Clock, Conversion, ConversionResult, InputKind, Normalizer};
use tracing::{debug, warn};

use crate::cli::ConvertArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{build_normalizer, open_lines, parse_conversion, print_json};

pub fn run_convert(args: ConvertArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let normalizer = build_normalizer(&args.zone)?;
    let conversion = parse_conversion(&args.to)?;
    let reader = open_lines(&args.input)?;

    for line in reader.lines() {
        let line = line.map_err(|e| CliError::runtime(format!("Failed to read line: {}", e)))?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        let result = convert_line(trimmed, &normalizer, conversion, args.lenient)?;
        debug!(input = %result.input, output = %result.output, "converted");

        match output_format {
            OutputFormat::Json => print_json(&result, false)?,
            OutputFormat::Text => println!("{} -> {}", result.input, result.output),
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

fn convert_line<C: Clock>(
    input: &str,
    normalizer: &Normalizer<C>,
    conversion: Conversion,
    lenient: bool,
) -> CliResult<ConversionResult> {
    let output = match normalizer.convert(input, conversion) {
        Ok(output) => output,
        Err(err) if lenient => {
            warn!(input, error = %err, "passing input through unconverted");
            normalizer.convert_lenient(input, conversion)
        }
        Err(err) => return Err(CliError::core(&format!("Error processing '{}'", input), err)),
    };

    Ok(ConversionResult {
        input: input.to_string(),
        kind: InputKind::of(input),
        tz: normalizer.zone().to_string(),
        conversion,
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use slotzone_core::FixedClock;

    fn normalizer() -> Normalizer<FixedClock> {
        let now = Utc
            .with_ymd_and_hms(2025, 7, 23, 20, 0, 0)
            .single()
            .unwrap();
        Normalizer::default().with_clock(FixedClock::new(now))
    }

    #[test]
    fn strict_line_fails_on_garbage() {
        let err = convert_line("nope", &normalizer(), Conversion::Local, false).unwrap_err();
        assert!(err.to_string().contains("Error processing 'nope'"));
    }

    #[test]
    fn lenient_line_passes_through() {
        let result = convert_line("nope", &normalizer(), Conversion::Local, true).unwrap();
        assert_eq!(result.output, "nope");
        assert_eq!(result.kind, Some(InputKind::Bare));
    }

    #[test]
    fn line_result_carries_zone() {
        let result =
            convert_line("2025-07-23T09:30:00Z", &normalizer(), Conversion::Time, false).unwrap();
        assert_eq!(result.output, "14:30");
        assert_eq!(result.tz, "Asia/Tashkent");
        assert_eq!(result.kind, Some(InputKind::Offset));
    }
}
