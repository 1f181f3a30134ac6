//! Local almanac source — the precomputed JSON file shipped with the app.

use std::path::Path;

use astrocal_core::almanac::AlmanacFile;

use crate::error::FeedError;

/// Read and parse the almanac file.
///
/// Unlike the remote sheets, this file is part of the deployment: a missing
/// or malformed almanac is a hard load failure, not a degradable source.
pub async fn read_almanac(path: &Path) -> Result<AlmanacFile, FeedError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| FeedError::Io { path: path.to_path_buf(), source })?;
    serde_json::from_str(&text)
        .map_err(|source| FeedError::Json { path: path.to_path_buf(), source })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
