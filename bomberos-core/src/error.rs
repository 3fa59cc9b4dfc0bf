//! Error types for the Bomberos calendar.

use thiserror::Error;

/// Errors that can occur while building or rendering a month calendar.
///
/// Grid generation and event selection never fail on malformed events;
/// these errors come from the edges (files, config, locales, strict
/// validation).
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Date out of range: year {year}, month {month}")]
    DateOutOfRange { year: i32, month: i32 },

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Invalid event on {date}: {reason}")]
    InvalidEvent { date: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for calendar operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
