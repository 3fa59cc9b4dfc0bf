use anyhow::{Context, Result};
use bomberos_core::DisplayConfig;
use bomberos_core::event::DATE_KEY_FORMAT;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use serde_json::json;

use super::load_index;
use crate::EventFiles;
use crate::render::Render;

pub fn run(date: &str, files: &EventFiles, config: &DisplayConfig, json: bool) -> Result<()> {
    let parsed = NaiveDate::parse_from_str(date, DATE_KEY_FORMAT)
        .with_context(|| format!("Invalid date format '{}'. Expected YYYY-MM-DD", date))?;
    let key = parsed.format(DATE_KEY_FORMAT).to_string();

    let index = load_index(files)?;
    let selected = index.select_event_for_date(&key);
    let all = index.events_on(&key);

    if json {
        let out = json!({
            "date": key,
            "selected": selected,
            "events": all,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let Some(selected) = selected else {
        println!("{}", format!("No events on {}", key).dimmed());
        return Ok(());
    };

    println!("{}", selected.render(config));

    let hidden = all.len() - 1;
    if hidden > 0 {
        println!("{}", format!("   ({} more on this day, not shown)", hidden).dimmed());
    }

    Ok(())
}
