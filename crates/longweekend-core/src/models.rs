//! Core data types for longweekend.
//!
//! This module defines the records that flow into and out of the calculator:
//! - [`HolidayRecord`] - A public holiday supplied by the caller
//! - [`SearchDirection`] - Which way a scan walks from a holiday
//! - [`LongWeekendReport`] - A detected long weekend window
//! - [`FollowingDayReport`] - Result of scanning one direction from a holiday
//! - [`HolidayAnalysis`] - Per-holiday trace of how a window was formed

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{LongWeekendError, Result};

/// A public holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRecord {
    /// Date of the holiday.
    pub date: NaiveDate,
    /// Name of the holiday. Informational only.
    pub name: String,
}

impl HolidayRecord {
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
        }
    }
}

/// Direction in which days are scanned, relative to a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDirection {
    /// Towards earlier dates.
    Backward,
    /// Towards later dates.
    Forward,
}

impl SearchDirection {
    /// Move `date` by `days` in this direction.
    ///
    /// Returns `None` when the result falls outside the representable
    /// calendar range.
    pub fn step(self, date: NaiveDate, days: u32) -> Option<NaiveDate> {
        let days = chrono::Days::new(u64::from(days));
        match self {
            SearchDirection::Backward => date.checked_sub_days(days),
            SearchDirection::Forward => date.checked_add_days(days),
        }
    }
}

impl fmt::Display for SearchDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchDirection::Backward => write!(f, "backward"),
            SearchDirection::Forward => write!(f, "forward"),
        }
    }
}

/// A long weekend window.
///
/// Both `start_date` and `end_date` are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongWeekendReport {
    start_date: NaiveDate,
    end_date: NaiveDate,
    day_count: i64,
    need_bridge_day: bool,
    bridge_days: Vec<NaiveDate>,
}

impl LongWeekendReport {
    /// Create a report for the window `[start_date, end_date]`.
    ///
    /// Fails with [`LongWeekendError::InvalidArgument`] when `end_date` is
    /// before `start_date`.
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        bridge_days: Vec<NaiveDate>,
    ) -> Result<Self> {
        if end_date < start_date {
            return Err(LongWeekendError::InvalidArgument(format!(
                "end date {} is before start date {}",
                end_date, start_date
            )));
        }

        Ok(Self::spanning(start_date, end_date, bridge_days))
    }

    /// Build a report from bounds the scanner already knows are ordered.
    pub(crate) fn spanning(
        start_date: NaiveDate,
        end_date: NaiveDate,
        bridge_days: Vec<NaiveDate>,
    ) -> Self {
        debug_assert!(start_date <= end_date);
        Self {
            start_date,
            end_date,
            day_count: (end_date - start_date).num_days() + 1,
            need_bridge_day: !bridge_days.is_empty(),
            bridge_days,
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Number of days in the window, both ends included.
    pub fn day_count(&self) -> i64 {
        self.day_count
    }

    /// Whether any bridge day has to be taken off to get this window.
    pub fn need_bridge_day(&self) -> bool {
        self.need_bridge_day
    }

    /// Bridge days in the order they were discovered.
    pub fn bridge_days(&self) -> &[NaiveDate] {
        &self.bridge_days
    }

    /// Whether `other` lies completely inside this window.
    pub fn contains(&self, other: &LongWeekendReport) -> bool {
        self.start_date <= other.start_date && other.end_date <= self.end_date
    }
}

impl fmt::Display for LongWeekendReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({})",
            self.start_date.format("%Y-%m-%d"),
            self.end_date.format("%Y-%m-%d"),
            self.day_count
        )
    }
}

/// Result of scanning one direction away from a holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FollowingDayReport {
    /// Days added to the window in this direction, bridge days included.
    pub day_count: u32,
    /// How many of those days are bridge days.
    pub bridge_day_count: u32,
    /// Whether any bridge day was spent.
    pub bridge_day_required: bool,
    /// Bridge days, nearest to the holiday first.
    pub bridge_days: Vec<NaiveDate>,
    /// Outermost date reached. Equals the holiday when nothing was added.
    pub reach: NaiveDate,
}

impl FollowingDayReport {
    pub(crate) fn empty(anchor: NaiveDate) -> Self {
        Self {
            day_count: 0,
            bridge_day_count: 0,
            bridge_day_required: false,
            bridge_days: Vec::new(),
            reach: anchor,
        }
    }
}

/// Result of probing for a day off reachable by spending bridge days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DayOffReport {
    pub is_day_off_possible: bool,
    pub bridge_day_count: u32,
    pub bridge_days: Vec<NaiveDate>,
}

impl DayOffReport {
    pub(crate) fn impossible() -> Self {
        Self {
            is_day_off_possible: false,
            bridge_day_count: 0,
            bridge_days: Vec::new(),
        }
    }
}

/// Why a holiday did not produce any window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Neither direction extends past the holiday.
    NoAdjacentDaysOff,
    /// The window is not longer than a plain weekend.
    NotLongerThanWeekend,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoAdjacentDaysOff => write!(f, "no adjacent days off"),
            SkipReason::NotLongerThanWeekend => write!(f, "not longer than a weekend"),
        }
    }
}

/// What the assembler decided for one holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum WindowDecision {
    /// The holiday contributes nothing.
    Skipped { reason: SkipReason },
    /// Both directions together need more bridge days than available, so
    /// each side forms its own window. A side no longer than a weekend is
    /// left out; at least one side is always present.
    Split {
        #[serde(skip_serializing_if = "Option::is_none")]
        before: Option<LongWeekendReport>,
        #[serde(skip_serializing_if = "Option::is_none")]
        after: Option<LongWeekendReport>,
    },
    /// One window spanning both directions.
    Merged { window: LongWeekendReport },
}

impl WindowDecision {
    /// Candidate windows in the order they are offered for deduplication.
    pub fn candidates(&self) -> Vec<&LongWeekendReport> {
        match self {
            WindowDecision::Skipped { .. } => Vec::new(),
            WindowDecision::Split { before, after } => {
                before.iter().chain(after.iter()).collect()
            }
            WindowDecision::Merged { window } => vec![window],
        }
    }
}

/// Per-holiday trace of the window calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayAnalysis {
    pub holiday: HolidayRecord,
    pub backward: FollowingDayReport,
    pub forward: FollowingDayReport,
    #[serde(flatten)]
    pub decision: WindowDecision,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn report_day_count_includes_both_ends() {
        let report = LongWeekendReport::new(date(2020, 1, 10), date(2020, 1, 13), vec![]).unwrap();
        assert_eq!(report.day_count(), 4);
        assert!(!report.need_bridge_day());
    }

    #[test]
    fn report_single_day() {
        let report = LongWeekendReport::new(date(2020, 1, 10), date(2020, 1, 10), vec![]).unwrap();
        assert_eq!(report.day_count(), 1);
    }

    #[test]
    fn report_rejects_reversed_range() {
        let err = LongWeekendReport::new(date(2020, 1, 13), date(2020, 1, 10), vec![]).unwrap_err();
        assert!(matches!(err, LongWeekendError::InvalidArgument(_)));
    }

    #[test]
    fn report_need_bridge_day_follows_bridge_days() {
        let report =
            LongWeekendReport::new(date(2020, 1, 10), date(2020, 1, 14), vec![date(2020, 1, 13)])
                .unwrap();
        assert!(report.need_bridge_day());
        assert_eq!(report.bridge_days(), &[date(2020, 1, 13)]);
    }

    #[test]
    fn report_display() {
        let report = LongWeekendReport::new(date(2020, 1, 10), date(2020, 1, 14), vec![]).unwrap();
        assert_eq!(format!("{}", report), "2020-01-10 - 2020-01-14 (5)");
    }

    #[test]
    fn report_containment() {
        let outer = LongWeekendReport::new(date(2020, 1, 10), date(2020, 1, 14), vec![]).unwrap();
        let inner = LongWeekendReport::new(date(2020, 1, 11), date(2020, 1, 14), vec![]).unwrap();
        let overlapping =
            LongWeekendReport::new(date(2020, 1, 12), date(2020, 1, 15), vec![]).unwrap();

        assert!(outer.contains(&inner));
        assert!(outer.contains(&outer));
        assert!(!inner.contains(&outer));
        assert!(!outer.contains(&overlapping));
    }

    #[test]
    fn direction_step() {
        let d = date(2020, 1, 10);
        assert_eq!(SearchDirection::Forward.step(d, 3), Some(date(2020, 1, 13)));
        assert_eq!(SearchDirection::Backward.step(d, 10), Some(date(2019, 12, 31)));
        assert_eq!(SearchDirection::Forward.step(NaiveDate::MAX, 1), None);
    }

    #[test]
    fn direction_display() {
        assert_eq!(format!("{}", SearchDirection::Backward), "backward");
        assert_eq!(format!("{}", SearchDirection::Forward), "forward");
    }

    #[test]
    fn report_serialization() {
        let report =
            LongWeekendReport::new(date(2020, 1, 10), date(2020, 1, 14), vec![date(2020, 1, 13)])
                .unwrap();
        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            "{\"start_date\":\"2020-01-10\",\"end_date\":\"2020-01-14\",\"day_count\":5,\
             \"need_bridge_day\":true,\"bridge_days\":[\"2020-01-13\"]}"
        );
    }

    #[test]
    fn holiday_round_trips_through_json() {
        let holiday = HolidayRecord::new(date(2020, 1, 10), "Holiday Friday");
        let json = serde_json::to_string(&holiday).unwrap();
        assert_eq!(json, "{\"date\":\"2020-01-10\",\"name\":\"Holiday Friday\"}");
        let parsed: HolidayRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, holiday);
    }

    #[test]
    fn skip_reason_serialization() {
        assert_eq!(
            serde_json::to_string(&SkipReason::NotLongerThanWeekend).unwrap(),
            "\"not_longer_than_weekend\""
        );
    }

    #[test]
    fn split_candidates_leave_out_missing_side() {
        let after = LongWeekendReport::new(date(2020, 1, 8), date(2020, 1, 12), vec![]).unwrap();
        let decision = WindowDecision::Split {
            before: None,
            after: Some(after.clone()),
        };
        assert_eq!(decision.candidates(), vec![&after]);

        let json = serde_json::to_value(&decision).unwrap();
        assert_eq!(json["decision"], "split");
        assert!(json.get("before").is_none());
    }
}
