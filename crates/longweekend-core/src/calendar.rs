//! Weekend definition and day-off lookups.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{LongWeekendError, Result};
use crate::models::HolidayRecord;

/// Weekdays that are non-working regardless of holidays.
///
/// Duplicates collapse, so [`WeekendDays::len`] is the number of distinct
/// weekend weekdays. An empty set is allowed; a set covering the whole
/// week is not, since no working day would ever end a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekendDays {
    days: Vec<Weekday>,
}

impl WeekendDays {
    /// Build a weekend from any collection of weekdays.
    pub fn new(days: impl IntoIterator<Item = Weekday>) -> Result<Self> {
        let mut unique: Vec<Weekday> = Vec::new();
        for day in days {
            if !unique.contains(&day) {
                unique.push(day);
            }
        }

        if unique.len() == 7 {
            return Err(LongWeekendError::InvalidArgument(
                "weekend must leave at least one working weekday".to_string(),
            ));
        }

        unique.sort_by_key(|d| d.num_days_from_monday());
        Ok(Self { days: unique })
    }

    /// A weekend without any weekday.
    pub fn none() -> Self {
        Self { days: Vec::new() }
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Weekend weekdays, Monday first.
    pub fn days(&self) -> &[Weekday] {
        &self.days
    }
}

impl Default for WeekendDays {
    /// Saturday and Sunday.
    fn default() -> Self {
        Self {
            days: vec![Weekday::Sat, Weekday::Sun],
        }
    }
}

/// Borrowed view over holidays and weekend used to classify dates.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DayOffCalendar<'a> {
    holidays: &'a [HolidayRecord],
    weekend_days: &'a WeekendDays,
}

impl<'a> DayOffCalendar<'a> {
    pub(crate) fn new(holidays: &'a [HolidayRecord], weekend_days: &'a WeekendDays) -> Self {
        Self {
            holidays,
            weekend_days,
        }
    }

    /// A date is a day off if its weekday is a weekend day or it is a holiday.
    pub(crate) fn is_day_off(&self, date: NaiveDate) -> bool {
        if self.weekend_days.contains(date.weekday()) {
            return true;
        }

        self.holidays.iter().any(|h| h.date == date)
    }
}
