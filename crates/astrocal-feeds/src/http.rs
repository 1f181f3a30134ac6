//! Shared GET-text helper for the remote sources.

use reqwest::header::CACHE_CONTROL;
use reqwest::Client;

use crate::error::FeedError;

/// Fetch a URL as text, bypassing intermediary caches — the sheets are
/// republished in place, so a cached copy may be a stale edition.
pub(crate) async fn fetch_text(client: &Client, url: &str) -> Result<String, FeedError> {
    let response = client
        .get(url)
        .header(CACHE_CONTROL, "no-store")
        .send()
        .await
        .map_err(|source| FeedError::Http { url: url.to_string(), source })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FeedError::Status { url: url.to_string(), status });
    }

    response
        .text()
        .await
        .map_err(|source| FeedError::Http { url: url.to_string(), source })
}
