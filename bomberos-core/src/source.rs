//! Loading event lists that the backend has already produced.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{CalendarError, CalendarResult};
use crate::event::CalendarEvent;

/// Path that means "read from stdin"
pub const STDIN_PATH: &str = "-";

/// Parse a JSON array of events.
pub fn parse_events(json: &str) -> CalendarResult<Vec<CalendarEvent>> {
    serde_json::from_str(json).map_err(|e| CalendarError::Serialization(e.to_string()))
}

/// Read a JSON array of events from a file, or from stdin when the path is `-`.
pub fn load_events(path: &Path) -> CalendarResult<Vec<CalendarEvent>> {
    let content = if path.as_os_str() == STDIN_PATH {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };

    let events = parse_events(&content).map_err(|e| match e {
        CalendarError::Serialization(msg) => {
            CalendarError::Serialization(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })?;

    debug!(path = %path.display(), count = events.len(), "Loaded events");
    Ok(events)
}

/// Check every event, returning the first problem found.
pub fn validate_events(events: &[CalendarEvent]) -> CalendarResult<()> {
    events.iter().try_for_each(CalendarEvent::validate)
}
