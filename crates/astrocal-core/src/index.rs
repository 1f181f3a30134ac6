//! Day index — the merged, per-day view of all sources.
//!
//! Four independent reducer passes fold the parsed source records into
//! per-day (and per-month, for photos) mappings, joined on the canonical
//! keys from [`crate::date`]. The resulting [`DayIndex`] is an immutable
//! value: a reload builds a fresh index and replaces the old one wholesale,
//! so readers never observe a partially-updated mix of sources.
//!
//! Upstream data entry is expected to contain stray rows. Any record that
//! cannot be assigned a valid day or month key is excluded with at most a
//! debug-level advisory, never an error.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::almanac::{AlmanacDay, AlmanacFile};
use crate::date::{DateKey, MonthKey};
use crate::ics::CalendarEvent;
use crate::tabular::TabularRecord;

/// Holiday name used when the sheet row leaves the name column empty.
pub const DEFAULT_HOLIDAY_NAME: &str = "Holiday";

// ---------------------------------------------------------------------------
// Entry types
// ---------------------------------------------------------------------------

/// One special-date entry (eclipse, meteor-shower maximum, conjunction…).
///
/// A row with an empty code or title is still kept — absence is data here,
/// not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpecialDate {
    pub code: String,
    pub title: String,
    pub time: String,
}

/// The featured photo for one month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MonthPhoto {
    pub image: String,
    pub title: String,
    pub author: String,
    pub location: String,
    pub description_short: String,
    pub description_long: String,
}

impl MonthPhoto {
    fn from_record(record: &TabularRecord) -> Self {
        Self {
            image: record.field("image").to_string(),
            title: record.field("title").to_string(),
            author: record.field("author").to_string(),
            location: record.field("location").to_string(),
            description_short: record.field("description_short").to_string(),
            description_long: record.field("description_long").to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Reducer passes
// ---------------------------------------------------------------------------

/// Photo sheet → per-month photo. The `month` column arrives pre-formatted
/// as `MM-YYYY`; rows with an empty key are skipped; a later row for the
/// same month overwrites an earlier one (source row order).
pub fn build_photo_index(records: &[TabularRecord]) -> BTreeMap<MonthKey, MonthPhoto> {
    let mut out = BTreeMap::new();
    for record in records {
        let Some(month) = MonthKey::from_raw(record.field("month")) else {
            tracing::debug!("photo row without a month key, skipping");
            continue;
        };
        out.insert(month, MonthPhoto::from_record(record));
    }
    out
}

/// Special-dates sheet → per-day entry lists, in source row order.
///
/// The code column falls back to the `key` column, mirroring the sheet's
/// historical layout where the short label lived under either header.
pub fn build_special_dates(records: &[TabularRecord]) -> BTreeMap<DateKey, Vec<SpecialDate>> {
    let mut out: BTreeMap<DateKey, Vec<SpecialDate>> = BTreeMap::new();
    for record in records {
        let Some(day) = DateKey::parse_dmy(record.field("date")) else {
            tracing::debug!(date = record.field("date"), "unparseable special-date row, skipping");
            continue;
        };
        let code = match record.field("code") {
            "" => record.field("key"),
            code => code,
        };
        out.entry(day).or_default().push(SpecialDate {
            code: code.to_string(),
            title: record.field("title").to_string(),
            time: record.field("time").to_string(),
        });
    }
    out
}

/// Holidays sheet → per-day holiday name; the last row for a day wins.
pub fn build_holidays(records: &[TabularRecord]) -> BTreeMap<DateKey, String> {
    let mut out = BTreeMap::new();
    for record in records {
        let Some(day) = DateKey::parse_dmy(record.field("date")) else {
            tracing::debug!(date = record.field("date"), "unparseable holiday row, skipping");
            continue;
        };
        let name = match record.field("name") {
            "" => DEFAULT_HOLIDAY_NAME,
            name => name,
        };
        out.insert(day, name.to_string());
    }
    out
}

/// Events feed → per-day event lists, keyed by the start stamp, in feed
/// order. Events without a parseable start are skipped.
pub fn build_events_by_day(events: Vec<CalendarEvent>) -> BTreeMap<DateKey, Vec<CalendarEvent>> {
    let mut out: BTreeMap<DateKey, Vec<CalendarEvent>> = BTreeMap::new();
    for event in events {
        let Some(day) = DateKey::parse_stamp(&event.dtstart) else {
            tracing::debug!(dtstart = %event.dtstart, title = %event.title, "event without a parseable start, skipping");
            continue;
        };
        out.entry(day).or_default().push(event);
    }
    out
}

// ---------------------------------------------------------------------------
// DayIndex
// ---------------------------------------------------------------------------

/// The merged output of one full load cycle.
///
/// Built atomically by [`DayIndex::build`]; queried by the rendering layer
/// through the accessors, which degrade to empty views for days the
/// sources say nothing about.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DayIndex {
    pub almanac: BTreeMap<DateKey, AlmanacDay>,
    pub special_dates: BTreeMap<DateKey, Vec<SpecialDate>>,
    pub holidays: BTreeMap<DateKey, String>,
    pub events: BTreeMap<DateKey, Vec<CalendarEvent>>,
    pub photos: BTreeMap<MonthKey, MonthPhoto>,
}

impl DayIndex {
    /// Run the four reducer passes and adopt the almanac unchanged.
    ///
    /// The passes are independent — no output feeds another — so the order
    /// here is arbitrary.
    pub fn build(
        almanac: AlmanacFile,
        photo_rows: &[TabularRecord],
        special_rows: &[TabularRecord],
        holiday_rows: &[TabularRecord],
        events: Vec<CalendarEvent>,
    ) -> Self {
        Self {
            almanac: almanac.days,
            special_dates: build_special_dates(special_rows),
            holidays: build_holidays(holiday_rows),
            events: build_events_by_day(events),
            photos: build_photo_index(photo_rows),
        }
    }

    pub fn almanac_for(&self, day: &DateKey) -> Option<&AlmanacDay> {
        self.almanac.get(day)
    }

    pub fn special_on(&self, day: &DateKey) -> &[SpecialDate] {
        self.special_dates.get(day).map_or(&[], Vec::as_slice)
    }

    pub fn holiday_on(&self, day: &DateKey) -> Option<&str> {
        self.holidays.get(day).map(String::as_str)
    }

    pub fn events_on(&self, day: &DateKey) -> &[CalendarEvent] {
        self.events.get(day).map_or(&[], Vec::as_slice)
    }

    pub fn photo_for(&self, month: &MonthKey) -> Option<&MonthPhoto> {
        self.photos.get(month)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
