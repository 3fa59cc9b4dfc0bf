//! Calendar events as the console receives them from the backend.
//!
//! Two lists feed the month view: guard shifts and shift-change requests.
//! Both use the same record shape and are told apart by `eventType`.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};

/// Format of the `date` grouping key.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// A single calendar entry (guard shift or shift-change request)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// ISO `YYYY-MM-DD` string. Kept raw: a malformed value just never
    /// matches a grid cell.
    pub date: String,
    pub event_type: EventType,
    pub label: String,
    /// Semantic style token, only meaningful to the renderer
    #[serde(default)]
    pub color: String,
}

/// Discriminates selection priority between events on the same date.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventType {
    /// An assigned shift/duty
    Guard,
    /// A pending or resolved shift-change request
    Request,
    /// Anything else the backend sends; never rejected at load time
    Other(String),
}

impl EventType {
    pub fn as_str(&self) -> &str {
        match self {
            EventType::Guard => "guard",
            EventType::Request => "request",
            EventType::Other(s) => s,
        }
    }

    pub fn is_request(&self) -> bool {
        matches!(self, EventType::Request)
    }
}

impl From<&str> for EventType {
    fn from(s: &str) -> Self {
        match s {
            "guard" => EventType::Guard,
            "request" => EventType::Request,
            other => EventType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EventType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EventType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(EventType::from(s.as_str()))
    }
}

impl CalendarEvent {
    pub fn new(
        date: impl Into<String>,
        event_type: EventType,
        label: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        CalendarEvent {
            date: date.into(),
            event_type,
            label: label.into(),
            color: color.into(),
        }
    }

    pub fn guard(date: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(date, EventType::Guard, label, "")
    }

    pub fn request(date: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(date, EventType::Request, label, "")
    }

    /// Parse the grouping key as a calendar date, if it is one.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_KEY_FORMAT).ok()
    }

    /// Strict check for callers that want to reject bad records up front.
    /// The grid and index never call this.
    pub fn validate(&self) -> CalendarResult<()> {
        let parsed = self.parsed_date().ok_or_else(|| CalendarError::InvalidEvent {
            date: self.date.clone(),
            reason: "date is not YYYY-MM-DD".into(),
        })?;

        // parse_from_str accepts unpadded fields ("2024-2-1"), which would
        // never match a cell key
        if parsed.format(DATE_KEY_FORMAT).to_string() != self.date {
            return Err(CalendarError::InvalidEvent {
                date: self.date.clone(),
                reason: "date is not zero-padded YYYY-MM-DD".into(),
            });
        }

        if let EventType::Other(kind) = &self.event_type {
            return Err(CalendarError::InvalidEvent {
                date: self.date.clone(),
                reason: format!("unknown event type '{}'", kind),
            });
        }

        Ok(())
    }
}

impl fmt::Display for CalendarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.date, self.event_type, self.label)
    }
}
