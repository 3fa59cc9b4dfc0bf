//! Core of the Bomberos GRX month calendar.
//!
//! - `grid`: the 42-cell, Monday-first month grid
//! - `index`: grouping guard and request events by date and picking one per day
//! - `projection`: the two combined into a renderable month view
//! - `config` and `locale`: explicit display context for renderers

pub mod config;
pub mod error;
pub mod event;
pub mod grid;
pub mod index;
pub mod locale;
pub mod projection;
pub mod source;
pub mod year_month;

pub use config::DisplayConfig;
pub use error::{CalendarError, CalendarResult};
pub use event::{CalendarEvent, EventType};
pub use grid::{DayCell, MonthOffset, generate_calendar, generate_month_grid};
pub use index::{EventIndex, index_events_by_date};
pub use projection::{MonthSummary, MonthView, ProjectedDay, project_month};
pub use year_month::YearMonth;
