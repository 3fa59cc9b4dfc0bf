//! Projecting indexed events onto a month grid.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::error::CalendarResult;
use crate::event::{CalendarEvent, EventType};
use crate::grid::{DayCell, WEEK_DAYS, generate_month_grid};
use crate::index::EventIndex;
use crate::year_month::YearMonth;

/// A grid cell paired with the event chosen for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedDay {
    #[serde(flatten)]
    pub cell: DayCell,
    pub event: Option<CalendarEvent>,
}

/// Everything a renderer needs to draw one month.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthView {
    pub month: YearMonth,
    pub days: Vec<ProjectedDay>,
    /// Event dates that matched no cell (outside the grid or malformed)
    pub unmatched_dates: Vec<String>,
}

/// Counts of what the current-month cells show.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthSummary {
    pub guard_days: usize,
    pub request_days: usize,
    pub other_days: usize,
    pub empty_days: usize,
}

/// Build the month view: 42 cells, each with at most one event.
pub fn project_month(month: YearMonth, index: &EventIndex) -> CalendarResult<MonthView> {
    let cells = generate_month_grid(month)?;

    let keys: HashSet<String> = cells.iter().map(DayCell::date_key).collect();

    let days = cells
        .into_iter()
        .map(|cell| {
            let event = index.select_event_for_date(&cell.date_key()).cloned();
            ProjectedDay { cell, event }
        })
        .collect();

    let mut unmatched_dates: Vec<String> = index
        .dates()
        .filter(|d| !keys.contains(*d))
        .map(str::to_string)
        .collect();
    unmatched_dates.sort();

    if !unmatched_dates.is_empty() {
        debug!(
            month = %month,
            count = unmatched_dates.len(),
            "Event dates outside the month grid are not shown"
        );
    }

    Ok(MonthView {
        month,
        days,
        unmatched_dates,
    })
}

impl MonthView {
    /// The grid as rows of 7 days, Monday first.
    pub fn weeks(&self) -> impl Iterator<Item = &[ProjectedDay]> {
        self.days.chunks(WEEK_DAYS)
    }

    pub fn summary(&self) -> MonthSummary {
        let mut summary = MonthSummary::default();

        for day in self.days.iter().filter(|d| d.cell.is_current_month()) {
            match day.event.as_ref().map(|e| &e.event_type) {
                Some(EventType::Guard) => summary.guard_days += 1,
                Some(EventType::Request) => summary.request_days += 1,
                Some(EventType::Other(_)) => summary.other_days += 1,
                None => summary.empty_days += 1,
            }
        }

        summary
    }
}
