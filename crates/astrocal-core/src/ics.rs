//! Calendar-feed parser — event blocks out of calendar interchange text.
//!
//! Supports exactly the subset of the format the events feed needs: line
//! unfolding, `BEGIN:VEVENT`/`END:VEVENT` blocks, and the handful of
//! properties that map onto [`CalendarEvent`]. Parameter lists on property
//! names (`DTSTART;TZID=Europe/Madrid:…`) are discarded.
//!
//! Parsing runs as two passes (unfold continuation lines into logical
//! lines, then scan the logical lines with a two-state block machine) and
//! is total over arbitrary text: no input raises, absence of data yields an
//! empty sequence.

use std::collections::HashMap;

use serde::Serialize;

/// Title used when an event block carries no `SUMMARY`.
pub const DEFAULT_EVENT_TITLE: &str = "Activity";

const BEGIN_EVENT: &str = "BEGIN:VEVENT";
const END_EVENT: &str = "END:VEVENT";

/// One event extracted from a feed block. Every field except `title` may
/// be empty; `title` falls back to [`DEFAULT_EVENT_TITLE`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    pub title: String,
    pub location: String,
    pub description: String,
    pub url: String,
    /// Raw start stamp as it appeared in the feed (`20260815T210000Z`).
    pub dtstart: String,
    /// Raw end stamp, when present.
    pub dtend: String,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Unfold continuation lines: a line beginning with a single space
/// continues the previous logical line, minus that space.
fn unfold_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for raw in text.split('\n') {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        match (line.strip_prefix(' '), lines.last_mut()) {
            (Some(continuation), Some(prev)) => prev.push_str(continuation),
            _ => lines.push(line.to_string()),
        }
    }
    lines
}

/// Parse feed text into event records.
///
/// `BEGIN:VEVENT` always starts a fresh accumulator, so a nested BEGIN
/// restarts the block; `END:VEVENT` with no open block is a no-op. Property
/// lines split on the first `:`; repeated property names within a block
/// collide last-wins; lines with no `:` are ignored.
pub fn parse_events(text: &str) -> Vec<CalendarEvent> {
    let mut events = Vec::new();
    let mut current: Option<HashMap<String, String>> = None;

    for line in unfold_lines(text) {
        if line == BEGIN_EVENT {
            current = Some(HashMap::new());
            continue;
        }
        if line == END_EVENT {
            if let Some(props) = current.take() {
                events.push(event_from_props(props));
            }
            continue;
        }
        let Some(props) = current.as_mut() else {
            continue;
        };
        let Some((left, value)) = line.split_once(':') else {
            continue;
        };
        let name = left.split(';').next().unwrap_or(left);
        props.insert(name.to_string(), value.to_string());
    }

    events
}

fn event_from_props(mut props: HashMap<String, String>) -> CalendarEvent {
    let mut take = |name: &str| props.remove(name).unwrap_or_default();
    let summary = take("SUMMARY");
    CalendarEvent {
        title: if summary.is_empty() { DEFAULT_EVENT_TITLE.to_string() } else { summary },
        location: take("LOCATION"),
        description: take("DESCRIPTION"),
        url: take("URL"),
        dtstart: take("DTSTART"),
        dtend: take("DTEND"),
    }
}

/// Drop transport chatter ahead of the payload: some fetch paths route the
/// feed through a CORS proxy that prepends its own headers. Everything
/// before the first `BEGIN:VCALENDAR` is cut; text without the marker
/// passes through unchanged.
pub fn strip_transport_preamble(text: &str) -> &str {
    match text.find("BEGIN:VCALENDAR") {
        Some(idx) => &text[idx..],
        None => text,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
