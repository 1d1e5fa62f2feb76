//! Input parsing for holidays and calculator settings.
//!
//! This module provides functions for parsing:
//! - dates in `YYYY-MM-DD` form
//! - weekday names (`sat`, `Saturday`, ...) and comma-separated weekends
//! - bridge-day budgets
//! - holiday lines (`2020-01-10 New Year` or `2020-01-10,New Year`)

use chrono::{NaiveDate, Weekday};

use crate::calendar::WeekendDays;
use crate::error::{LongWeekendError, Result};
use crate::models::HolidayRecord;

/// Parse a calendar date in `YYYY-MM-DD` form.
///
/// # Examples
///
/// ```
/// use longweekend_core::parse::parse_date;
/// use chrono::NaiveDate;
///
/// let d = parse_date("2020-01-10").unwrap();
/// assert_eq!(d, NaiveDate::from_ymd_opt(2020, 1, 10).unwrap());
/// ```
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|e| {
        LongWeekendError::ParseError(format!(
            "Invalid date: '{}'. Expected YYYY-MM-DD. Error: {}",
            trimmed, e
        ))
    })
}

/// Parse a weekday name. Accepts full and three-letter English names in any case.
pub fn parse_weekday(input: &str) -> Result<Weekday> {
    let trimmed = input.trim();
    trimmed.parse::<Weekday>().map_err(|_| {
        LongWeekendError::ParseError(format!(
            "Unknown weekday: '{}'. Expected e.g. 'sat' or 'saturday'",
            trimmed
        ))
    })
}

/// Parse a comma-separated list of weekdays into a [`WeekendDays`].
///
/// An empty or blank string yields an empty weekend.
///
/// # Examples
///
/// ```
/// use longweekend_core::parse::parse_weekend_days;
/// use chrono::Weekday;
///
/// let weekend = parse_weekend_days("fri,sat").unwrap();
/// assert!(weekend.contains(Weekday::Fri));
/// assert_eq!(weekend.len(), 2);
/// ```
pub fn parse_weekend_days(input: &str) -> Result<WeekendDays> {
    let days = input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(parse_weekday)
        .collect::<Result<Vec<_>>>()?;

    WeekendDays::new(days)
}

/// Parse a bridge-day budget. Negative values are rejected.
pub fn parse_bridge_days(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    let value: i64 = trimmed.parse().map_err(|_| {
        LongWeekendError::ParseError(format!(
            "Invalid bridge day count: '{}'. Expected a non-negative integer.",
            trimmed
        ))
    })?;

    if value < 0 {
        return Err(LongWeekendError::InvalidArgument(format!(
            "Bridge day count must not be negative, got {}",
            value
        )));
    }

    u32::try_from(value).map_err(|_| {
        LongWeekendError::InvalidArgument(format!("Bridge day count out of range: {}", value))
    })
}

/// Parse a single holiday line.
///
/// The date comes first, followed by a comma or whitespace and the name.
/// The name may be omitted.
pub fn parse_holiday_line(line: &str) -> Result<HolidayRecord> {
    let trimmed = line.trim();
    let (date, name) = match trimmed.split_once(|c: char| c == ',' || c.is_whitespace()) {
        Some((date, name)) => (date, name.trim()),
        None => (trimmed, ""),
    };

    Ok(HolidayRecord::new(parse_date(date)?, name))
}

/// Parse holidays from multi-line text.
///
/// Blank lines and lines starting with `#` are skipped. Errors name the
/// offending line number.
pub fn parse_holidays(input: &str) -> Result<Vec<HolidayRecord>> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let t = line.trim();
            !t.is_empty() && !t.starts_with('#')
        })
        .map(|(index, line)| {
            parse_holiday_line(line).map_err(|e| match e {
                LongWeekendError::ParseError(msg) => {
                    LongWeekendError::ParseError(format!("line {}: {}", index + 1, msg))
                }
                other => other,
            })
        })
        .collect()
}
