//! Failure reporting for the `longweekend` binary.
//!
//! Bad arguments and bad holiday data exit with 2, I/O and serialization
//! failures with 3. Errors are printed on stderr in the command's output
//! format.

use std::fmt;
use std::process::ExitCode;
use std::str::FromStr;

use longweekend_core::LongWeekendError;
use serde::Serialize;
use tracing::debug;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_INPUT_ERROR: u8 = 2;
pub const EXIT_RUNTIME_ERROR: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}

impl OutputFormat {
    /// Format used to report an unparsable `--output-format` value itself.
    pub fn hint(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("json") {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            _ => Err(CliError::input(format!(
                "Invalid output format '{s}'. Expected: json, text"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Arguments or holiday data were rejected.
    Input,
    /// Reading input or writing output failed.
    Runtime,
}

impl ErrorKind {
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Input => EXIT_INPUT_ERROR,
            ErrorKind::Runtime => EXIT_RUNTIME_ERROR,
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    kind: ErrorKind,
    message: String,
}

impl CliError {
    pub fn input(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Input,
            message: message.into(),
        }
    }

    pub fn runtime(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Runtime,
            message: message.into(),
        }
    }

    /// Prefix the message with what was being processed.
    pub fn context(self, context: impl fmt::Display) -> Self {
        Self {
            kind: self.kind,
            message: format!("{context}: {}", self.message),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn exit_code(&self) -> u8 {
        self.kind.exit_code()
    }
}

/// Calculator errors are always caused by what the user passed in.
impl From<LongWeekendError> for CliError {
    fn from(err: LongWeekendError) -> Self {
        CliError::input(err.to_string())
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::runtime(format!("{err:#}"))
    }
}

/// Only used for output; holiday JSON input is mapped to an input error
/// where it is read.
impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::runtime(format!("Failed to serialize JSON: {err}"))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

pub type CliResult<T> = std::result::Result<T, CliError>;

/// Adds a [`CliError::context`] prefix to any error convertible into a [`CliError`].
pub trait CliContext<T> {
    fn cli_context<C: fmt::Display>(self, context: impl FnOnce() -> C) -> CliResult<T>;
}

impl<T, E: Into<CliError>> CliContext<T> for Result<T, E> {
    fn cli_context<C: fmt::Display>(self, context: impl FnOnce() -> C) -> CliResult<T> {
        self.map_err(|err| err.into().context(context()))
    }
}

#[derive(Debug, Serialize)]
struct ErrorEnvelope<'a> {
    error: &'a str,
    kind: ErrorKind,
    exit_code: u8,
}

impl<'a> From<&'a CliError> for ErrorEnvelope<'a> {
    fn from(err: &'a CliError) -> Self {
        Self {
            error: &err.message,
            kind: err.kind,
            exit_code: err.exit_code(),
        }
    }
}

/// Print the error on stderr and turn it into the process exit code.
pub fn render_error(err: &CliError, output_format: OutputFormat) -> ExitCode {
    debug!(kind = ?err.kind, exit_code = err.exit_code(), "command failed: {}", err);

    let rendered = match output_format {
        OutputFormat::Json => serde_json::to_string_pretty(&ErrorEnvelope::from(err)).ok(),
        OutputFormat::Text => None,
    };
    match rendered {
        Some(json) => eprintln!("{json}"),
        None => eprintln!("Error: {err}"),
    }

    ExitCode::from(err.exit_code())
}
