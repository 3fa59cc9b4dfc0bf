pub mod config;
pub mod day;
pub mod month;

use std::path::Path;

use anyhow::{Context, Result};
use bomberos_core::source::{STDIN_PATH, load_events, validate_events};
use bomberos_core::{CalendarEvent, EventIndex, index_events_by_date};
use tracing::info;

use crate::EventFiles;

fn load_list(path: Option<&Path>, strict: bool) -> Result<Vec<CalendarEvent>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };

    let events =
        load_events(path).with_context(|| format!("Could not load events from {}", path.display()))?;

    if strict {
        validate_events(&events).with_context(|| format!("Invalid event in {}", path.display()))?;
    }

    Ok(events)
}

/// Load both event lists and index them by date.
pub fn load_index(files: &EventFiles) -> Result<EventIndex> {
    let is_stdin = |p: &Option<std::path::PathBuf>| p.as_deref().is_some_and(|p| p.as_os_str() == STDIN_PATH);
    if is_stdin(&files.guards) && is_stdin(&files.requests) {
        anyhow::bail!("Only one of --guards and --requests can read from stdin");
    }

    let guards = load_list(files.guards.as_deref(), files.strict)?;
    let requests = load_list(files.requests.as_deref(), files.strict)?;

    info!(guards = guards.len(), requests = requests.len(), "Loaded event lists");

    Ok(index_events_by_date(&guards, &requests))
}
