//! Terminal rendering for month views.
//!
//! Extension traits that draw bomberos-core types with owo_colors. The
//! display config is passed in explicitly; nothing here reads global state.

use bomberos_core::projection::{MonthSummary, MonthView, ProjectedDay};
use bomberos_core::{CalendarEvent, DisplayConfig};
use owo_colors::{AnsiColors, OwoColorize};

/// Width of one day column, without the separating space
const CELL_WIDTH: usize = 10;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self, config: &DisplayConfig) -> String;
}

/// Map a semantic color token onto a terminal color.
fn token_color(token: &str, dark_mode: bool) -> AnsiColors {
    let (normal, bright) = match token {
        "primary" => (AnsiColors::Blue, AnsiColors::BrightBlue),
        "success" => (AnsiColors::Green, AnsiColors::BrightGreen),
        "warning" => (AnsiColors::Yellow, AnsiColors::BrightYellow),
        "danger" => (AnsiColors::Red, AnsiColors::BrightRed),
        "info" => (AnsiColors::Cyan, AnsiColors::BrightCyan),
        _ => (AnsiColors::Magenta, AnsiColors::BrightMagenta),
    };
    if dark_mode { bright } else { normal }
}

/// Cut a string to at most `width` characters.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

impl Render for CalendarEvent {
    fn render(&self, config: &DisplayConfig) -> String {
        let color = token_color(config.color_for(self), config.dark_mode);
        format!("{} {}", self.date.dimmed(), self.label.color(color))
    }
}

impl Render for ProjectedDay {
    fn render(&self, config: &DisplayConfig) -> String {
        let label = self.event.as_ref().map(|e| e.label.as_str()).unwrap_or("");
        let text = format!("{:>2} {}", self.cell.day, label);
        // Pad before coloring so escape codes don't skew the columns
        let padded = format!("{:<width$}", truncate(&text, CELL_WIDTH), width = CELL_WIDTH);

        match (&self.event, self.cell.is_current_month()) {
            (Some(event), true) => {
                let color = token_color(config.color_for(event), config.dark_mode);
                padded.color(color).to_string()
            }
            (None, true) => padded,
            (_, false) => padded.dimmed().to_string(),
        }
    }
}

impl Render for MonthSummary {
    fn render(&self, _config: &DisplayConfig) -> String {
        let mut parts = vec![
            format!("{} guard", self.guard_days),
            format!("{} request", self.request_days),
        ];
        if self.other_days > 0 {
            parts.push(format!("{} other", self.other_days));
        }
        parts.push(format!("{} free", self.empty_days));
        parts.join(" · ").dimmed().to_string()
    }
}

/// Draw a whole month: title, weekday headers, six week rows and a summary.
pub fn render_month(view: &MonthView, headers: &[String], config: &DisplayConfig) -> String {
    let mut lines = Vec::new();

    lines.push(view.month.to_string().bold().to_string());

    let header_row: Vec<String> = headers
        .iter()
        .map(|h| format!("{:<width$}", truncate(h, CELL_WIDTH), width = CELL_WIDTH))
        .collect();
    lines.push(header_row.join(" ").dimmed().to_string());

    for week in view.weeks() {
        let row: Vec<String> = week.iter().map(|d| d.render(config)).collect();
        lines.push(row.join(" "));
    }

    lines.push(String::new());
    lines.push(view.summary().render(config));

    if !view.unmatched_dates.is_empty() {
        let note = format!(
            "{} event date(s) not on this grid: {}",
            view.unmatched_dates.len(),
            view.unmatched_dates.join(", ")
        );
        lines.push(note.dimmed().to_string());
    }

    lines.join("\n")
}
