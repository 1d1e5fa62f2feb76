//! Long weekend calculation.
//!
//! For every holiday the calculator scans backward and forward, each
//! direction with the full bridge budget. The two scans are then either
//! discarded, merged into one window, or kept as two separate windows when
//! together they would spend more bridge days than allowed. A window covered
//! by an accepted one is dropped; an accepted window covered by a new one is
//! replaced by it.

use chrono::NaiveDate;
use tracing::debug;

use crate::calendar::{DayOffCalendar, WeekendDays};
use crate::models::{
    FollowingDayReport, HolidayAnalysis, HolidayRecord, LongWeekendReport, SearchDirection,
    SkipReason, WindowDecision,
};
use crate::scan::analyze_following_days;

/// Bridge days a caller is assumed to spend when nothing else is given.
pub const DEFAULT_BRIDGE_DAYS: u32 = 1;

/// Anything that can turn a bridge budget into long weekend windows.
pub trait CalculateLongWeekends {
    /// Find all long weekends, spending up to `available_bridge_days`
    /// bridge days per direction. `0` disables bridging.
    fn calculate(&self, available_bridge_days: u32) -> Vec<LongWeekendReport>;

    /// [`CalculateLongWeekends::calculate`] with [`DEFAULT_BRIDGE_DAYS`].
    fn calculate_default(&self) -> Vec<LongWeekendReport> {
        self.calculate(DEFAULT_BRIDGE_DAYS)
    }
}

/// Calculator over a borrowed set of holidays and weekend days.
///
/// The calculator never copies or mutates its inputs, so one instance can be
/// shared across threads.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use longweekend_core::prelude::*;
///
/// let holidays = vec![
///     HolidayRecord::new(NaiveDate::from_ymd_opt(2020, 1, 10).unwrap(), "Holiday Friday"),
///     HolidayRecord::new(NaiveDate::from_ymd_opt(2020, 1, 14).unwrap(), "Holiday Tuesday"),
/// ];
/// let weekend = WeekendDays::default();
/// let calculator = LongWeekendCalculator::new(&holidays, &weekend);
///
/// let long_weekends = calculator.calculate(1);
/// assert_eq!(long_weekends.len(), 1);
/// assert_eq!(long_weekends[0].to_string(), "2020-01-10 - 2020-01-14 (5)");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LongWeekendCalculator<'a> {
    holidays: &'a [HolidayRecord],
    weekend_days: &'a WeekendDays,
}

impl<'a> LongWeekendCalculator<'a> {
    pub fn new(holidays: &'a [HolidayRecord], weekend_days: &'a WeekendDays) -> Self {
        Self {
            holidays,
            weekend_days,
        }
    }

    /// Trace the decision taken for every holiday, in input order.
    ///
    /// The windows listed here are candidates before deduplication.
    pub fn explain(&self, available_bridge_days: u32) -> Vec<HolidayAnalysis> {
        self.holidays
            .iter()
            .map(|holiday| self.analyze_holiday(holiday, available_bridge_days))
            .collect()
    }

    fn calendar(&self) -> DayOffCalendar<'a> {
        DayOffCalendar::new(self.holidays, self.weekend_days)
    }

    fn analyze_holiday(&self, holiday: &HolidayRecord, budget: u32) -> HolidayAnalysis {
        let calendar = self.calendar();
        let backward =
            analyze_following_days(&calendar, holiday.date, SearchDirection::Backward, budget);
        let forward =
            analyze_following_days(&calendar, holiday.date, SearchDirection::Forward, budget);

        let decision = assemble(
            holiday.date,
            &backward,
            &forward,
            self.weekend_days.len(),
            budget,
        );

        debug!(
            holiday = %holiday.date,
            name = %holiday.name,
            backward_days = backward.day_count,
            forward_days = forward.day_count,
            bridge_days = backward.bridge_day_count + forward.bridge_day_count,
            ?decision,
            "analyzed holiday"
        );

        HolidayAnalysis {
            holiday: holiday.clone(),
            backward,
            forward,
            decision,
        }
    }
}

impl CalculateLongWeekends for LongWeekendCalculator<'_> {
    fn calculate(&self, available_bridge_days: u32) -> Vec<LongWeekendReport> {
        let mut windows = WindowSet::default();

        for holiday in self.holidays {
            let analysis = self.analyze_holiday(holiday, available_bridge_days);
            for candidate in analysis.decision.candidates() {
                windows.insert(candidate.clone());
            }
        }

        windows.into_windows()
    }
}

/// Decide what window(s) a holiday contributes given both scan results.
fn assemble(
    holiday: NaiveDate,
    backward: &FollowingDayReport,
    forward: &FollowingDayReport,
    weekend_len: usize,
    budget: u32,
) -> WindowDecision {
    if backward.day_count == 0 && forward.day_count == 0 {
        return WindowDecision::Skipped {
            reason: SkipReason::NoAdjacentDaysOff,
        };
    }

    // The window also holds the holiday, so it is longer than a weekend
    // as soon as the extensions alone cover one.
    let extension = u64::from(backward.day_count) + u64::from(forward.day_count);
    if extension < weekend_len as u64 {
        return WindowDecision::Skipped {
            reason: SkipReason::NotLongerThanWeekend,
        };
    }

    let bridge_total = u64::from(backward.bridge_day_count) + u64::from(forward.bridge_day_count);
    if bridge_total > u64::from(budget) {
        let longer_than_weekend =
            |w: &LongWeekendReport| w.day_count() > i64::try_from(weekend_len).unwrap_or(i64::MAX);
        let before =
            LongWeekendReport::spanning(backward.reach, holiday, backward.bridge_days.clone());
        let after = LongWeekendReport::spanning(holiday, forward.reach, forward.bridge_days.clone());

        // Each side must stand on its own as a long weekend.
        let before = Some(before).filter(longer_than_weekend);
        let after = Some(after).filter(longer_than_weekend);
        if before.is_none() && after.is_none() {
            return WindowDecision::Skipped {
                reason: SkipReason::NotLongerThanWeekend,
            };
        }
        return WindowDecision::Split { before, after };
    }

    let bridge_days = backward
        .bridge_days
        .iter()
        .chain(forward.bridge_days.iter())
        .copied()
        .collect();

    WindowDecision::Merged {
        window: LongWeekendReport::spanning(backward.reach, forward.reach, bridge_days),
    }
}

/// Accepted windows in discovery order, none contained in another.
#[derive(Debug, Default)]
struct WindowSet {
    windows: Vec<LongWeekendReport>,
}

impl WindowSet {
    fn insert(&mut self, candidate: LongWeekendReport) {
        if self.windows.iter().any(|w| w.contains(&candidate)) {
            debug!(window = %candidate, "dropping window covered by an earlier one");
            return;
        }

        // A wider window takes the slot of the first window it covers.
        let slot = self.windows.iter().position(|w| candidate.contains(w));
        self.windows.retain(|w| {
            let covered = candidate.contains(w);
            if covered {
                debug!(window = %w, by = %candidate, "replacing covered window");
            }
            !covered
        });

        match slot {
            Some(index) => self.windows.insert(index, candidate),
            None => self.windows.push(candidate),
        }
    }

    fn into_windows(self) -> Vec<LongWeekendReport> {
        self.windows
    }
}
