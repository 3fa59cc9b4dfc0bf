//! Grouping events by date and choosing the one to show.

use std::collections::HashMap;

use tracing::debug;

use crate::event::CalendarEvent;

/// Events grouped by their raw `date` key.
///
/// Within a date, guard events come before request events, and each source
/// keeps its input order. Rebuilt from scratch for every render.
#[derive(Debug, Clone, Default)]
pub struct EventIndex {
    by_date: HashMap<String, Vec<CalendarEvent>>,
}

/// Group guard and request events by date.
pub fn index_events_by_date(
    guard_events: &[CalendarEvent],
    request_events: &[CalendarEvent],
) -> EventIndex {
    let mut by_date: HashMap<String, Vec<CalendarEvent>> = HashMap::new();

    for event in guard_events.iter().chain(request_events) {
        by_date
            .entry(event.date.clone())
            .or_default()
            .push(event.clone());
    }

    debug!(
        guards = guard_events.len(),
        requests = request_events.len(),
        dates = by_date.len(),
        "Indexed calendar events"
    );

    EventIndex { by_date }
}

impl EventIndex {
    /// All events on a date, in concatenation order.
    pub fn events_on(&self, date_key: &str) -> &[CalendarEvent] {
        self.by_date.get(date_key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The event to display for a date: the first request if there is one,
    /// otherwise the first event of any type.
    pub fn select_event_for_date(&self, date_key: &str) -> Option<&CalendarEvent> {
        let events = self.events_on(date_key);

        events
            .iter()
            .find(|e| e.event_type.is_request())
            .or_else(|| events.first())
    }

    /// Date keys that have at least one event.
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.by_date.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    /// Number of distinct dates.
    pub fn len(&self) -> usize {
        self.by_date.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventType;

    #[test]
    fn test_request_overrides_guard_on_same_date() {
        let guards = vec![CalendarEvent::guard("2024-02-10", "G")];
        let requests = vec![CalendarEvent::request("2024-02-10", "R")];
        let index = index_events_by_date(&guards, &requests);

        let selected = index.select_event_for_date("2024-02-10").unwrap();
        assert_eq!(selected.event_type, EventType::Request);
        assert_eq!(selected.label, "R");
    }

    #[test]
    fn test_guard_only_date_selects_guard() {
        let guards = vec![CalendarEvent::guard("2024-02-11", "G")];
        let index = index_events_by_date(&guards, &[]);

        let selected = index.select_event_for_date("2024-02-11").unwrap();
        assert_eq!(selected.label, "G");
    }

    #[test]
    fn test_empty_date_selects_nothing() {
        let guards = vec![CalendarEvent::guard("2024-02-11", "G")];
        let index = index_events_by_date(&guards, &[]);

        assert!(index.select_event_for_date("2024-02-12").is_none());
        assert!(index_events_by_date(&[], &[]).select_event_for_date("2024-02-12").is_none());
    }

    #[test]
    fn test_first_request_wins() {
        let requests = vec![
            CalendarEvent::request("2024-02-10", "R1"),
            CalendarEvent::request("2024-02-10", "R2"),
        ];
        let index = index_events_by_date(&[], &requests);

        assert_eq!(index.select_event_for_date("2024-02-10").unwrap().label, "R1");
    }

    #[test]
    fn test_first_guard_wins_without_requests() {
        let guards = vec![
            CalendarEvent::guard("2024-02-10", "G1"),
            CalendarEvent::guard("2024-02-10", "G2"),
        ];
        let index = index_events_by_date(&guards, &[]);

        assert_eq!(index.select_event_for_date("2024-02-10").unwrap().label, "G1");
    }

    #[test]
    fn test_guards_precede_requests_within_a_date() {
        let guards = vec![
            CalendarEvent::guard("2024-02-10", "G1"),
            CalendarEvent::guard("2024-02-11", "G2"),
            CalendarEvent::guard("2024-02-10", "G3"),
        ];
        let requests = vec![CalendarEvent::request("2024-02-10", "R1")];
        let index = index_events_by_date(&guards, &requests);

        let labels: Vec<&str> = index
            .events_on("2024-02-10")
            .iter()
            .map(|e| e.label.as_str())
            .collect();
        assert_eq!(labels, vec!["G1", "G3", "R1"]);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_request_misfiled_in_guard_list_still_wins() {
        // Selection looks at the event type, not at which list it came from
        let guards = vec![
            CalendarEvent::guard("2024-02-10", "G"),
            CalendarEvent::request("2024-02-10", "R-early"),
        ];
        let requests = vec![CalendarEvent::request("2024-02-10", "R-late")];
        let index = index_events_by_date(&guards, &requests);

        assert_eq!(index.select_event_for_date("2024-02-10").unwrap().label, "R-early");
    }

    #[test]
    fn test_unknown_type_falls_back_to_first_event() {
        let guards = vec![CalendarEvent::new("2024-02-10", EventType::from("holiday"), "H", "")];
        let index = index_events_by_date(&guards, &[]);

        assert_eq!(index.select_event_for_date("2024-02-10").unwrap().label, "H");
    }

    #[test]
    fn test_malformed_dates_group_under_their_raw_key() {
        let guards = vec![CalendarEvent::guard("2024-02-10T00:00:00Z", "G")];
        let index = index_events_by_date(&guards, &[]);

        assert!(index.select_event_for_date("2024-02-10").is_none());
        assert!(index.select_event_for_date("2024-02-10T00:00:00Z").is_some());
    }
}
