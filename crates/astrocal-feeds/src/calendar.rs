//! Calendar-feed source — interchange text over HTTP into event records.

use astrocal_core::ics::{self, CalendarEvent};
use reqwest::Client;

use crate::error::FeedError;
use crate::http;

/// Fetch the public calendar feed and parse its event blocks.
///
/// The fetch may be routed through a CORS proxy that prepends its own
/// chatter, so everything before `BEGIN:VCALENDAR` is dropped first.
pub async fn fetch_events(client: &Client, url: &str) -> Result<Vec<CalendarEvent>, FeedError> {
    let text = http::fetch_text(client, url).await?;
    Ok(ics::parse_events(ics::strip_transport_preamble(&text)))
}
