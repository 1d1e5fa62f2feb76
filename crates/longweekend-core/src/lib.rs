//! # longweekend-core
//!
//! Find long weekends in a set of public holidays.
//!
//! A long weekend is a run of days off, built from holidays, weekend days
//! and optionally a few "bridge" working days taken off to connect them,
//! that is longer than an ordinary weekend.
//!
//! ## Features
//!
//! - **Bridge days**: Spend up to a budget of working days per direction
//!   to join a holiday with the next weekend or holiday.
//! - **Configurable weekend**: Any set of weekdays can be the weekend
//!   (Sat/Sun, Fri/Sat, none at all).
//! - **Maximal windows**: Windows covered by another window are never reported.
//! - **Explainable**: [`LongWeekendCalculator::explain`] shows the scan
//!   results and decision for every holiday.
//!
//! ## Example
//!
//! ```rust
//! use longweekend_core::prelude::*;
//!
//! let holidays = parse_holidays("2020-01-09 Holiday Thursday\n2020-01-14 Holiday Tuesday").unwrap();
//! let weekend = parse_weekend_days("sat,sun").unwrap();
//!
//! let calculator = LongWeekendCalculator::new(&holidays, &weekend);
//! for long_weekend in calculator.calculate(1) {
//!     println!("{} bridge days: {:?}", long_weekend, long_weekend.bridge_days());
//! }
//! ```

pub mod calendar;
pub mod compute;
pub mod error;
pub mod models;
pub mod parse;
mod scan;

// Re-export commonly used types at the crate root
pub use calendar::WeekendDays;
pub use compute::{CalculateLongWeekends, DEFAULT_BRIDGE_DAYS, LongWeekendCalculator};
pub use error::{LongWeekendError, Result};
pub use models::{
    FollowingDayReport, HolidayAnalysis, HolidayRecord, LongWeekendReport, SearchDirection,
    SkipReason, WindowDecision,
};
pub use parse::{parse_bridge_days, parse_date, parse_holidays, parse_weekend_days};

/// Prelude module for convenient imports.
///
/// ```
/// use longweekend_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::calendar::WeekendDays;
    pub use crate::compute::{CalculateLongWeekends, DEFAULT_BRIDGE_DAYS, LongWeekendCalculator};
    pub use crate::error::{LongWeekendError, Result};
    pub use crate::models::*;
    pub use crate::parse::{
        parse_bridge_days, parse_date, parse_holiday_line, parse_holidays, parse_weekday,
        parse_weekend_days,
    };
}
