use std::fmt;
use std::process::ExitCode;

use serde::Serialize;
use slotzone_core::SlotZoneError;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_INPUT_ERROR: u8 = 2;
pub const EXIT_RUNTIME_ERROR: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Input,
    Runtime,
}

#[derive(Debug)]
pub struct CliError {
    kind: ErrorKind,
    message: String,
    status: Option<&'static str>,
}

impl CliError {
    pub fn input(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Input,
            message: message.into(),
            status: None,
        }
    }

    pub fn runtime(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Runtime,
            message: message.into(),
            status: None,
        }
    }

    /// Wrap a library error, tagging it with its category.
    pub fn core(context: &str, err: SlotZoneError) -> Self {
        let (kind, status) = match err {
            SlotZoneError::EmptyInput => (ErrorKind::Input, "empty_input"),
            SlotZoneError::InvalidTimezone(_) => (ErrorKind::Input, "invalid_timezone"),
            SlotZoneError::ParseError(_) => (ErrorKind::Input, "parse_error"),
            SlotZoneError::OutOfRange(_) => (ErrorKind::Runtime, "out_of_range"),
        };

        Self {
            kind,
            message: format!("{}: {}", context, err),
            status: Some(status),
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self.kind {
            ErrorKind::Input => EXIT_INPUT_ERROR,
            ErrorKind::Runtime => EXIT_RUNTIME_ERROR,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug, Serialize)]
struct ErrorOutput {
    error: String,
    exit_code: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<String>,
}

pub fn render_error(err: &CliError, output_format: OutputFormat) -> ExitCode {
    tracing::debug!(kind = ?err.kind, status = ?err.status, "command failed");

    match output_format {
        OutputFormat::Json => {
            let envelope = ErrorOutput {
                error: err.message.clone(),
                exit_code: err.exit_code(),
                status: err.status.map(str::to_string),
            };

            match serde_json::to_string_pretty(&envelope) {
                Ok(json) => eprintln!("{}", json),
                Err(_) => eprintln!("Error: {}", err.message),
            }
        }
        OutputFormat::Text => {
            eprintln!("Error: {}", err.message);
        }
    }

    ExitCode::from(err.exit_code())
}

pub fn output_format_hint(s: &str) -> OutputFormat {
    if s.eq_ignore_ascii_case("json") {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    }
}

pub fn parse_output_format(s: &str) -> CliResult<OutputFormat> {
    match s.to_lowercase().as_str() {
        "json" => Ok(OutputFormat::Json),
        "text" => Ok(OutputFormat::Text),
        _ => Err(CliError::input(format!(
            "Invalid output_format '{}'. Expected: json, text",
            s
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_exit_codes() {
        let err = CliError::core("convert", SlotZoneError::ParseError("bad".into()));
        assert_eq!(err.exit_code(), EXIT_INPUT_ERROR);
        assert_eq!(err.to_string(), "convert: Parse error: bad");

        let err = CliError::core("compose", SlotZoneError::OutOfRange("far".into()));
        assert_eq!(err.exit_code(), EXIT_RUNTIME_ERROR);
    }

    #[test]
    fn output_format_parsing() {
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_output_format("text").unwrap(), OutputFormat::Text);
        assert!(parse_output_format("yaml").is_err());
        assert_eq!(output_format_hint("yaml"), OutputFormat::Text);
    }
}
