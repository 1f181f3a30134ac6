//! Load orchestration — fetch every source, assemble one [`DayIndex`].
//!
//! The five reads are independent I/O and run concurrently. The three
//! sheets and the almanac are mandatory: any of them failing fails the
//! load. The events feed is explicitly decoupled — a public calendar
//! behind a third-party proxy goes down often enough that its failure only
//! degrades the events mapping to empty, with a warning.

use astrocal_core::config::SourcesConfig;
use astrocal_core::index::DayIndex;
use reqwest::Client;

use crate::error::FeedError;
use crate::{almanac, calendar, sheet};

/// Fetch all sources and build a fresh index.
///
/// The index is assembled only after every fetch has settled, so from the
/// caller's perspective a reload replaces the previous index atomically —
/// the old value stays visible until this returns.
pub async fn load_day_index(client: &Client, sources: &SourcesConfig) -> Result<DayIndex, FeedError> {
    let (almanac, photo_rows, special_rows, holiday_rows, events) = tokio::join!(
        almanac::read_almanac(&sources.almanac_path),
        sheet::fetch_records(client, &sources.photos_csv_url),
        sheet::fetch_records(client, &sources.special_dates_csv_url),
        sheet::fetch_records(client, &sources.holidays_csv_url),
        calendar::fetch_events(client, &sources.events_ics_url),
    );

    let events = events.unwrap_or_else(|err| {
        tracing::warn!(%err, "events feed unavailable, continuing without activities");
        Vec::new()
    });

    Ok(DayIndex::build(
        almanac?,
        &photo_rows?,
        &special_rows?,
        &holiday_rows?,
        events,
    ))
}
