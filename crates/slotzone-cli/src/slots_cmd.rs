use std::process::ExitCode;

use slotzone_core::{ScheduledSlot, TimeSlotsResponse, schedule_slots};
use tracing::debug;

use crate::cli::SlotsArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{build_normalizer, print_json, read_all};

pub fn run_slots(args: SlotsArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let normalizer = build_normalizer(&args.zone)?;

    let content = read_all(&args.input)?;
    let response: TimeSlotsResponse = serde_json::from_str(&content)
        .map_err(|e| CliError::input(format!("Invalid time-slots payload: {}", e)))?;
    debug!(date = %response.date, count = response.slots.len(), "loaded slots");

    let mut scheduled = schedule_slots(&normalizer, &response, args.date.as_deref())
        .map_err(|e| CliError::core("Cannot schedule slots", e))?;

    if args.available_only {
        scheduled.retain(|slot| slot.available);
    }

    match output_format {
        OutputFormat::Json => print_json(&scheduled, true)?,
        OutputFormat::Text => {
            for slot in &scheduled {
                println!("{}", slot_line(slot));
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

fn slot_line(slot: &ScheduledSlot) -> String {
    let mut line = format!("{} -> {}", slot.label, slot.scheduled_datetime);
    if !slot.available {
        line.push_str(" (unavailable)");
    } else if slot.queue_length > 0 {
        line.push_str(&format!(" (queue: {})", slot.queue_length));
    }
    line
}
