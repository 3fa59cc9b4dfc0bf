//! Month grid generation.
//!
//! A month view is always 6 weeks of 7 days, Monday first. Days before the
//! 1st come from the previous month, days after the last come from the next
//! one, so every month renders with the same 42 cells.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::{CalendarError, CalendarResult};
use crate::event::DATE_KEY_FORMAT;
use crate::year_month::YearMonth;

/// Cells in a month grid (6 weeks × 7 days)
pub const GRID_CELLS: usize = 42;

/// Columns in a month grid
pub const WEEK_DAYS: usize = 7;

/// Which month a grid cell belongs to, relative to the month being viewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthOffset {
    Previous,
    Current,
    Next,
}

impl MonthOffset {
    pub fn as_i8(self) -> i8 {
        match self {
            MonthOffset::Previous => -1,
            MonthOffset::Current => 0,
            MonthOffset::Next => 1,
        }
    }
}

impl Serialize for MonthOffset {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.as_i8())
    }
}

/// One day in the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    pub date: NaiveDate,
    /// Day of month, relative to the cell's own month
    pub day: u32,
    pub month_offset: MonthOffset,
}

impl DayCell {
    fn new(date: NaiveDate, month_offset: MonthOffset) -> Self {
        DayCell {
            date,
            day: date.day(),
            month_offset,
        }
    }

    /// `YYYY-MM-DD` key used to look up this cell's events.
    pub fn date_key(&self) -> String {
        self.date.format(DATE_KEY_FORMAT).to_string()
    }

    pub fn is_current_month(&self) -> bool {
        self.month_offset == MonthOffset::Current
    }
}

/// Monday-first column of the first day of the month (Monday = 0, Sunday = 6).
pub fn first_day_index(month: YearMonth) -> usize {
    // num_days_from_sunday: Sunday = 0 .. Saturday = 6
    let weekday = month.first_day().weekday().num_days_from_sunday() as usize;
    (weekday + 6) % 7
}

/// Generate the 42 day cells for a month. `month` is 0-based and is
/// normalized the same way as [`YearMonth::new`].
pub fn generate_calendar(year: i32, month: i32) -> CalendarResult<Vec<DayCell>> {
    generate_month_grid(YearMonth::new(year, month)?)
}

/// Generate the 42 day cells for a month.
pub fn generate_month_grid(month: YearMonth) -> CalendarResult<Vec<DayCell>> {
    let out_of_range = || CalendarError::DateOutOfRange {
        year: month.year,
        month: month.month0 as i32,
    };

    let prev = month.pred()?;
    let next = month.succ()?;

    let leading = first_day_index(month);
    let days_in_month = month.days_in_month();
    let days_in_prev = prev.days_in_month();

    let mut cells = Vec::with_capacity(GRID_CELLS);

    for i in 1..=leading as u32 {
        let date = prev.day(days_in_prev - leading as u32 + i).ok_or_else(out_of_range)?;
        cells.push(DayCell::new(date, MonthOffset::Previous));
    }

    for day in 1..=days_in_month {
        let date = month.day(day).ok_or_else(out_of_range)?;
        cells.push(DayCell::new(date, MonthOffset::Current));
    }

    // 6 weeks always fit: at most 6 leading days + 31 days = 37
    let trailing = GRID_CELLS - cells.len();
    for day in 1..=trailing as u32 {
        let date = next.day(day).ok_or_else(out_of_range)?;
        cells.push(DayCell::new(date, MonthOffset::Next));
    }

    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Weekday};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_always_42_cells() {
        for year in [1900, 1999, 2000, 2023, 2024, 2025, 2100] {
            for month in 0..12 {
                let cells = generate_calendar(year, month).unwrap();
                assert_eq!(cells.len(), GRID_CELLS, "{}-{} should have 42 cells", year, month + 1);
            }
        }
    }

    #[test]
    fn test_current_month_cells_are_ascending_and_complete() {
        for month in 0..12 {
            let ym = YearMonth::new(2024, month).unwrap();
            let cells = generate_month_grid(ym).unwrap();

            let days: Vec<u32> = cells
                .iter()
                .filter(|c| c.is_current_month())
                .map(|c| c.day)
                .collect();
            let expected: Vec<u32> = (1..=ym.days_in_month()).collect();
            assert_eq!(days, expected, "Current-month days for {}", ym);
        }
    }

    #[test]
    fn test_cells_are_consecutive_days() {
        let cells = generate_calendar(2025, 5).unwrap();
        for pair in cells.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
    }

    #[test]
    fn test_february_2024_example() {
        let cells = generate_calendar(2024, 1).unwrap();
        assert_eq!(first_day_index(YearMonth::new(2024, 1).unwrap()), 3);

        let leading: Vec<u32> = cells
            .iter()
            .filter(|c| c.month_offset == MonthOffset::Previous)
            .map(|c| c.day)
            .collect();
        assert_eq!(leading, vec![29, 30, 31]);

        let current = cells.iter().filter(|c| c.is_current_month()).count();
        assert_eq!(current, 29);

        let trailing: Vec<u32> = cells
            .iter()
            .filter(|c| c.month_offset == MonthOffset::Next)
            .map(|c| c.day)
            .collect();
        assert_eq!(trailing, (1..=10).collect::<Vec<_>>());

        assert_eq!(cells[0].date, ymd(2024, 1, 29));
        assert_eq!(cells[41].date, ymd(2024, 3, 10));
    }

    #[test]
    fn test_monday_alignment_for_every_starting_weekday() {
        // 2024 month starts: Jan=Mon, Feb=Thu, Mar=Fri, Apr=Mon, May=Wed,
        // Jun=Sat, Sep=Sun, Oct=Tue
        let cases = [
            (0, Weekday::Mon, 0),
            (9, Weekday::Tue, 1),
            (4, Weekday::Wed, 2),
            (1, Weekday::Thu, 3),
            (2, Weekday::Fri, 4),
            (5, Weekday::Sat, 5),
            (8, Weekday::Sun, 6),
        ];

        for (month0, weekday, index) in cases {
            let ym = YearMonth::new(2024, month0).unwrap();
            assert_eq!(ym.first_day().weekday(), weekday);
            assert_eq!(first_day_index(ym), index);

            let cells = generate_month_grid(ym).unwrap();
            assert_eq!(cells[0].date.weekday(), Weekday::Mon, "{} grid starts on Monday", ym);
            assert_eq!(
                cells[0].date + Duration::days(index as i64),
                ym.first_day(),
                "First cell plus index is the 1st of {}",
                ym
            );
        }
    }

    #[test]
    fn test_february_starting_on_monday_gets_two_trailing_weeks() {
        // February 2021: 28 days, starts on a Monday
        let cells = generate_calendar(2021, 1).unwrap();
        assert_eq!(cells[0].date, ymd(2021, 2, 1));
        let trailing = cells.iter().filter(|c| c.month_offset == MonthOffset::Next).count();
        assert_eq!(trailing, 14);
    }

    #[test]
    fn test_long_month_starting_on_sunday_fills_six_weeks() {
        // December 2024: 31 days, starts on a Sunday
        let cells = generate_calendar(2024, 11).unwrap();
        let leading = cells.iter().filter(|c| c.month_offset == MonthOffset::Previous).count();
        let trailing = cells.iter().filter(|c| c.month_offset == MonthOffset::Next).count();
        assert_eq!(leading, 6);
        assert_eq!(trailing, 5);
        assert_eq!(cells[41].date, ymd(2025, 1, 5));
    }

    #[test]
    fn test_generation_is_idempotent() {
        let first = generate_calendar(2024, 1).unwrap();
        let second = generate_calendar(2024, 1).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_date_key_and_offset_serialization() {
        let cells = generate_calendar(2024, 1).unwrap();
        assert_eq!(cells[0].date_key(), "2024-01-29");

        let json = serde_json::to_value(&cells[0]).unwrap();
        assert_eq!(json["date"], "2024-01-29");
        assert_eq!(json["day"], 29);
        assert_eq!(json["monthOffset"], -1);
    }
}
