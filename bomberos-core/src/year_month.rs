//! The month a calendar view is showing.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::{CalendarError, CalendarResult};

/// A calendar month. `month0` is 0-based (0 = January), matching what the
/// console passes around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth {
    pub year: i32,
    pub month0: u32,
}

impl YearMonth {
    /// Build a month, carrying out-of-range months into the year
    /// (month 12 of 2024 is January 2025, month -1 is December 2023).
    pub fn new(year: i32, month0: i32) -> CalendarResult<Self> {
        let out_of_range = || CalendarError::DateOutOfRange { year, month: month0 };

        let total = i64::from(year) * 12 + i64::from(month0);
        let normalized_year = i32::try_from(total.div_euclid(12)).map_err(|_| out_of_range())?;
        let normalized_month0 = total.rem_euclid(12) as u32;

        // Only accept months whose first day chrono can represent
        NaiveDate::from_ymd_opt(normalized_year, normalized_month0 + 1, 1).ok_or_else(out_of_range)?;

        Ok(YearMonth {
            year: normalized_year,
            month0: normalized_month0,
        })
    }

    /// The month containing a concrete date.
    pub fn from_date(date: NaiveDate) -> Self {
        YearMonth {
            year: date.year(),
            month0: date.month0(),
        }
    }

    /// 1-based month number (1 = January).
    pub fn month(&self) -> u32 {
        self.month0 + 1
    }

    pub fn first_day(&self) -> NaiveDate {
        // Checked in `new`; `from_date` starts from a real date
        NaiveDate::from_ymd_opt(self.year, self.month(), 1).unwrap_or(NaiveDate::MIN)
    }

    /// Build the date for a day of this month, if it exists.
    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month(), day)
    }

    pub fn days_in_month(&self) -> u32 {
        (28..=31)
            .rev()
            .find(|&d| self.day(d).is_some())
            .unwrap_or(28)
    }

    /// The month before this one.
    pub fn pred(&self) -> CalendarResult<Self> {
        Self::new(self.year, self.month0 as i32 - 1)
    }

    /// The month after this one.
    pub fn succ(&self) -> CalendarResult<Self> {
        Self::new(self.year, self.month0 as i32 + 1)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month())
    }
}
