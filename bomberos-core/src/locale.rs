//! Localized weekday headers for the month grid.

use chrono::{Days, Locale, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::error::{CalendarError, CalendarResult};
use crate::grid::WEEK_DAYS;

/// Locale used when none is configured
pub const DEFAULT_LOCALE: &str = "es_ES";

/// Parse a POSIX-style locale name such as `es_ES` or `en_US`.
pub fn parse_locale(name: &str) -> CalendarResult<Locale> {
    Locale::try_from(name).map_err(|_| CalendarError::UnknownLocale(name.to_string()))
}

/// Short weekday names, Monday first, in the given locale.
pub fn weekday_headers(locale: &str) -> CalendarResult<[String; WEEK_DAYS]> {
    let locale = parse_locale(locale)?;

    // 2024-01-01 is a Monday
    let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or(NaiveDate::MIN);

    let headers = std::array::from_fn(|i| {
        let date = monday + Days::new(i as u64);
        Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
            .format_localized("%a", locale)
            .to_string()
    });

    Ok(headers)
}
