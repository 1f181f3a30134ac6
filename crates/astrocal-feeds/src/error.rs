//! Transport-failure taxonomy for the source loaders.
//!
//! Only transport and file-shape conditions live here. Format anomalies
//! inside fetched text (stray rows, malformed blocks, unparseable dates)
//! are recovered locally by the core parsers and never become errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    /// The request could not be performed (DNS, TLS, connection reset…).
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The local almanac file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The local almanac file is not valid JSON for the almanac model.
    #[error("malformed almanac file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
