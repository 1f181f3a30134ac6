//! Published-sheet source — CSV text over HTTP into tabular records.

use astrocal_core::tabular::{self, TabularRecord};
use reqwest::Client;

use crate::error::FeedError;
use crate::http;

/// Fetch one published sheet and parse it into records.
///
/// Transport failures surface as [`FeedError`]; the parse itself is total,
/// so a structurally odd sheet degrades to fewer records, not an error.
pub async fn fetch_records(client: &Client, url: &str) -> Result<Vec<TabularRecord>, FeedError> {
    let text = http::fetch_text(client, url).await?;
    Ok(tabular::parse_records(&text))
}
