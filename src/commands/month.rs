use anyhow::{Context, Result};
use bomberos_core::locale::weekday_headers;
use bomberos_core::{DisplayConfig, YearMonth, project_month};
use chrono::{Local, NaiveDate};

use super::load_index;
use crate::EventFiles;
use crate::render::render_month;

/// Work out which month to show from the command line.
/// `month` is 1-based here; out-of-range values roll over into the year.
pub fn resolve_month(date: Option<&str>, year: Option<i32>, month: Option<i32>) -> Result<YearMonth> {
    match (date, year, month) {
        (Some(date), _, _) => {
            let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .with_context(|| format!("Invalid date format '{}'. Expected YYYY-MM-DD", date))?;
            Ok(YearMonth::from_date(date))
        }
        (None, Some(year), Some(month)) => {
            let month0 = month.checked_sub(1).context("Month out of range")?;
            Ok(YearMonth::new(year, month0)?)
        }
        _ => Ok(YearMonth::from_date(Local::now().date_naive())),
    }
}

pub fn run(target: YearMonth, files: &EventFiles, config: &DisplayConfig, json: bool) -> Result<()> {
    let index = load_index(files)?;
    let view = project_month(target, &index)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let headers = weekday_headers(&config.locale)?;
    println!("{}", render_month(&view, &headers, config));

    Ok(())
}
