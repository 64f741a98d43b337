use clap::{Parser, Subcommand};

/// Reference-zone wall-clock normalizer for slot bookings
#[derive(Parser, Debug)]
#[command(name = "slotzone", version)]
#[command(about = "Reference-zone wall-clock normalizer for slot bookings")]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert timestamps line by line
    Convert(ConvertArgs),
    /// Compose a slot time with a date into one instant
    Compose(ComposeArgs),
    /// Resolve a time-slots payload into scheduled instants
    Slots(SlotsArgs),
    /// Explain how a timestamp is classified and resolved
    Explain(ExplainArgs),
}

/// Options shared by every command.
#[derive(clap::Args, Debug, Clone)]
pub struct ZoneArgs {
    /// Reference timezone (IANA name)
    #[arg(short, long, env = "SLOTZONE_TZ", default_value = "Asia/Tashkent")]
    pub tz: String,

    /// How to read timestamps without an offset: reference, utc
    #[arg(long, env = "SLOTZONE_ASSUME", default_value = "reference")]
    pub assume: String,

    /// Current instant (RFC3339), used to decide "today"
    #[arg(long, env = "SLOTZONE_NOW")]
    pub now: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub zone: ZoneArgs,

    /// Conversion: local, utc, date, from_date, time
    #[arg(long, default_value = "local")]
    pub to: String,

    /// Pass unparseable lines through instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,

    /// Input file path (use - for stdin)
    #[arg(long, default_value = "-")]
    pub input: String,
}

#[derive(clap::Args, Debug)]
pub struct ComposeArgs {
    #[command(flatten)]
    pub zone: ZoneArgs,

    /// Slot time: HH:MM, HHMM or HH:MM:SS
    #[arg(long)]
    pub time: String,

    /// Base date or timestamp (defaults to today in the reference zone)
    #[arg(long)]
    pub date: Option<String>,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct SlotsArgs {
    #[command(flatten)]
    pub zone: ZoneArgs,

    /// Selected date (defaults to the payload's date)
    #[arg(long)]
    pub date: Option<String>,

    /// Only list available slots
    #[arg(long)]
    pub available_only: bool,

    /// Time-slots JSON file (use - for stdin)
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct ExplainArgs {
    #[command(flatten)]
    pub zone: ZoneArgs,

    /// Timestamp to explain
    pub value: String,

    /// Output format: json, text
    #[arg(long, default_value = "json")]
    pub output_format: String,
}
