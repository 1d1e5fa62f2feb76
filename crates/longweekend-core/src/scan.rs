//! Directional scanning away from a holiday.
//!
//! A scan starts one day next to the holiday and keeps absorbing days off.
//! When it hits a working day it asks whether a day off can be reached by
//! spending bridge days from the remaining budget. The scan ends at the
//! first working day that cannot be bridged.

use chrono::NaiveDate;
use tracing::trace;

use crate::calendar::DayOffCalendar;
use crate::models::{DayOffReport, FollowingDayReport, SearchDirection};

/// Scan from `holiday` in `direction`, spending at most `bridge_budget`
/// bridge days.
pub(crate) fn analyze_following_days(
    calendar: &DayOffCalendar<'_>,
    holiday: NaiveDate,
    direction: SearchDirection,
    bridge_budget: u32,
) -> FollowingDayReport {
    let mut report = FollowingDayReport::empty(holiday);
    let mut remaining = bridge_budget;

    let Some(mut cursor) = direction.step(holiday, 1) else {
        return report;
    };

    loop {
        if calendar.is_day_off(cursor) {
            report.day_count += 1;
            report.reach = cursor;
            match direction.step(cursor, 1) {
                Some(next) => cursor = next,
                None => break,
            }
            continue;
        }

        let jump = can_jump_with_bridge_days_to_day_off(calendar, cursor, direction, remaining);
        if !jump.is_day_off_possible {
            break;
        }

        trace!(
            %direction,
            from = %cursor,
            cost = jump.bridge_day_count,
            "bridging to next day off"
        );

        report.bridge_day_required = true;
        report.day_count += jump.bridge_day_count;
        report.bridge_day_count += jump.bridge_day_count;
        remaining -= jump.bridge_day_count;
        if let Some(last) = jump.bridge_days.last() {
            report.reach = *last;
        }
        report.bridge_days.extend(jump.bridge_days);

        // The jump only succeeds when the day off after the bridge exists.
        match direction.step(cursor, jump.bridge_day_count) {
            Some(next) => cursor = next,
            None => break,
        }
    }

    report
}

/// Probe up to `budget` days beyond the working day `cursor` for a day off.
///
/// The first day off at offset `k` wins; the cursor and the `k - 1` days
/// after it become bridge days.
pub(crate) fn can_jump_with_bridge_days_to_day_off(
    calendar: &DayOffCalendar<'_>,
    cursor: NaiveDate,
    direction: SearchDirection,
    budget: u32,
) -> DayOffReport {
    for offset in 1..=budget {
        let Some(target) = direction.step(cursor, offset) else {
            break;
        };

        if calendar.is_day_off(target) {
            let bridge_days: Vec<NaiveDate> = (0..offset)
                .filter_map(|i| direction.step(cursor, i))
                .collect();

            return DayOffReport {
                is_day_off_possible: true,
                bridge_day_count: offset,
                bridge_days,
            };
        }
    }

    DayOffReport::impossible()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::WeekendDays;
    use crate::models::HolidayRecord;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn holidays(dates: &[NaiveDate]) -> Vec<HolidayRecord> {
        dates
            .iter()
            .map(|d| HolidayRecord::new(*d, "Holiday"))
            .collect()
    }

    // January 2020: 9 Thu, 10 Fri, 11 Sat, 12 Sun, 13 Mon, 14 Tue, 15 Wed

    #[test]
    fn forward_absorbs_weekend() {
        let hs = holidays(&[date(2020, 1, 10)]);
        let weekend = WeekendDays::default();
        let calendar = DayOffCalendar::new(&hs, &weekend);

        let report =
            analyze_following_days(&calendar, date(2020, 1, 10), SearchDirection::Forward, 0);

        assert_eq!(report.day_count, 2);
        assert_eq!(report.bridge_day_count, 0);
        assert!(!report.bridge_day_required);
        assert_eq!(report.reach, date(2020, 1, 12));
    }

    #[test]
    fn forward_bridges_single_working_day() {
        let hs = holidays(&[date(2020, 1, 10), date(2020, 1, 14)]);
        let weekend = WeekendDays::default();
        let calendar = DayOffCalendar::new(&hs, &weekend);

        let report =
            analyze_following_days(&calendar, date(2020, 1, 10), SearchDirection::Forward, 1);

        // Sat, Sun, Mon (bridge), Tue
        assert_eq!(report.day_count, 4);
        assert_eq!(report.bridge_day_count, 1);
        assert!(report.bridge_day_required);
        assert_eq!(report.bridge_days, vec![date(2020, 1, 13)]);
        assert_eq!(report.reach, date(2020, 1, 14));
    }

    #[test]
    fn backward_lists_bridge_days_nearest_first() {
        let hs = holidays(&[date(2020, 1, 8)]);
        let weekend = WeekendDays::default();
        let calendar = DayOffCalendar::new(&hs, &weekend);

        let report =
            analyze_following_days(&calendar, date(2020, 1, 8), SearchDirection::Backward, 2);

        // Tue 7 and Mon 6 bridged, then Sun 5 and Sat 4
        assert_eq!(report.day_count, 4);
        assert_eq!(report.bridge_days, vec![date(2020, 1, 7), date(2020, 1, 6)]);
        assert_eq!(report.reach, date(2020, 1, 4));
    }

    #[test]
    fn budget_is_shared_within_one_direction() {
        let hs = holidays(&[date(2020, 1, 9), date(2020, 1, 14)]);
        let weekend = WeekendDays::default();
        let calendar = DayOffCalendar::new(&hs, &weekend);

        let one = analyze_following_days(&calendar, date(2020, 1, 9), SearchDirection::Forward, 1);
        assert_eq!(one.day_count, 3);
        assert_eq!(one.bridge_days, vec![date(2020, 1, 10)]);

        let two = analyze_following_days(&calendar, date(2020, 1, 9), SearchDirection::Forward, 2);
        assert_eq!(two.day_count, 5);
        assert_eq!(two.bridge_days, vec![date(2020, 1, 10), date(2020, 1, 13)]);
        assert_eq!(two.reach, date(2020, 1, 14));
    }

    #[test]
    fn no_extension_when_gap_too_wide() {
        let hs = holidays(&[date(2020, 1, 15)]);
        let weekend = WeekendDays::default();
        let calendar = DayOffCalendar::new(&hs, &weekend);

        let report =
            analyze_following_days(&calendar, date(2020, 1, 15), SearchDirection::Forward, 1);

        assert_eq!(report, FollowingDayReport::empty(date(2020, 1, 15)));
    }

    #[test]
    fn jump_picks_smallest_offset() {
        let hs = holidays(&[date(2020, 1, 14)]);
        let weekend = WeekendDays::default();
        let calendar = DayOffCalendar::new(&hs, &weekend);

        let jump = can_jump_with_bridge_days_to_day_off(
            &calendar,
            date(2020, 1, 13),
            SearchDirection::Forward,
            5,
        );

        assert!(jump.is_day_off_possible);
        assert_eq!(jump.bridge_day_count, 1);
        assert_eq!(jump.bridge_days, vec![date(2020, 1, 13)]);
    }

    #[test]
    fn jump_fails_beyond_budget() {
        let hs: Vec<HolidayRecord> = Vec::new();
        let weekend = WeekendDays::default();
        let calendar = DayOffCalendar::new(&hs, &weekend);

        // Wed 15 -> Sat 18 needs three bridge days
        let short = can_jump_with_bridge_days_to_day_off(
            &calendar,
            date(2020, 1, 15),
            SearchDirection::Forward,
            2,
        );
        assert_eq!(short, DayOffReport::impossible());

        let enough = can_jump_with_bridge_days_to_day_off(
            &calendar,
            date(2020, 1, 15),
            SearchDirection::Forward,
            3,
        );
        assert_eq!(enough.bridge_day_count, 3);
        assert_eq!(
            enough.bridge_days,
            vec![date(2020, 1, 15), date(2020, 1, 16), date(2020, 1, 17)]
        );
    }

    #[test]
    fn zero_budget_never_jumps() {
        let hs = holidays(&[date(2020, 1, 14)]);
        let weekend = WeekendDays::default();
        let calendar = DayOffCalendar::new(&hs, &weekend);

        let jump = can_jump_with_bridge_days_to_day_off(
            &calendar,
            date(2020, 1, 13),
            SearchDirection::Forward,
            0,
        );
        assert!(!jump.is_day_off_possible);
    }

    #[test]
    fn empty_weekend_only_follows_holidays() {
        let hs = holidays(&[date(2020, 1, 10), date(2020, 1, 11)]);
        let weekend = WeekendDays::none();
        let calendar = DayOffCalendar::new(&hs, &weekend);

        let report =
            analyze_following_days(&calendar, date(2020, 1, 10), SearchDirection::Forward, 0);
        assert_eq!(report.day_count, 1);
        assert_eq!(report.reach, date(2020, 1, 11));
    }
}
