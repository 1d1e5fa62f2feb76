use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use longweekend_core::{HolidayRecord, WeekendDays, parse_bridge_days, parse_holidays, parse_weekend_days};
use tracing::debug;

use crate::cli::CalculateArgs;
use crate::error::{CliContext, CliError, CliResult};

/// Calculator inputs resolved from the arguments shared by all commands.
#[derive(Debug)]
pub struct Settings {
    pub weekend: WeekendDays,
    pub bridge_days: u32,
    pub holidays: Vec<HolidayRecord>,
}

impl Settings {
    pub fn from_args(args: &CalculateArgs) -> CliResult<Self> {
        let weekend =
            parse_weekend_days(&args.weekend).cli_context(|| format!("Invalid weekend '{}'", args.weekend))?;
        let bridge_days = parse_bridge_days(&args.bridge_days)
            .cli_context(|| format!("Invalid bridge days '{}'", args.bridge_days))?;
        let holidays = load_holidays(&args.holidays)?;

        Ok(Self {
            weekend,
            bridge_days,
            holidays,
        })
    }
}

fn read_source(path: &str) -> Result<String> {
    if path == "-" {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read holidays from stdin")?;
        return Ok(content);
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read holidays from '{path}'"))
}

/// Load holidays from a file or stdin.
///
/// Paths ending in `.json` hold an array of `{"date", "name"}` objects;
/// anything else is read line by line.
pub fn load_holidays(path: &str) -> CliResult<Vec<HolidayRecord>> {
    let content = read_source(path)?;

    let holidays = if path.ends_with(".json") {
        serde_json::from_str::<Vec<HolidayRecord>>(&content)
            .map_err(|e| CliError::input(format!("Invalid holiday JSON in '{path}': {e}")))?
    } else {
        parse_holidays(&content).cli_context(|| format!("Invalid holidays in '{path}'"))?
    };

    debug!(count = holidays.len(), source = path, "loaded holidays");
    Ok(holidays)
}
