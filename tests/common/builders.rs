//! Test builders — ergonomic constructors for records and events.
//!
//! These are for readability in assertions, not for production use.

use astrocal_core::{CalendarEvent, TabularRecord};

// ---------------------------------------------------------------------------
// Tabular records
// ---------------------------------------------------------------------------

/// Build a record from display-form header/value pairs.
pub fn record(pairs: &[(&str, &str)]) -> TabularRecord {
    TabularRecord::from_pairs(pairs.iter().copied())
}

/// A special-dates sheet row.
pub fn special_row(date: &str, code: &str, title: &str, time: &str) -> TabularRecord {
    record(&[("date", date), ("code", code), ("title", title), ("time", time)])
}

/// A holidays sheet row.
pub fn holiday_row(date: &str, name: &str) -> TabularRecord {
    record(&[("date", date), ("name", name)])
}

/// A monthly-photo sheet row.
pub fn photo_row(month: &str, title: &str, author: &str) -> TabularRecord {
    record(&[("month", month), ("title", title), ("author", author)])
}

// ---------------------------------------------------------------------------
// EventBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`CalendarEvent`] fixtures.
///
/// # Example
///
/// ```rust
/// let event = EventBuilder::new("Star Party")
///     .dtstart("20260815T210000Z")
///     .location("Palma")
///     .build();
/// ```
pub struct EventBuilder {
    event: CalendarEvent,
}

impl EventBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            event: CalendarEvent {
                title: title.into(),
                ..CalendarEvent::default()
            },
        }
    }

    pub fn dtstart(mut self, stamp: impl Into<String>) -> Self {
        self.event.dtstart = stamp.into();
        self
    }

    pub fn dtend(mut self, stamp: impl Into<String>) -> Self {
        self.event.dtend = stamp.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.event.location = location.into();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.event.url = url.into();
        self
    }

    pub fn build(self) -> CalendarEvent {
        self.event
    }
}
