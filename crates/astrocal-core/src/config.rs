//! Configuration types for astrocal.
//!
//! [`Config::load`] reads `~/.config/astrocal/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[sources]
photos_csv_url        = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQJ3kJb0FhVt7nYwzXJm4dR2c/pub?gid=0&single=true&output=csv"
special_dates_csv_url = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQJ3kJb0FhVt7nYwzXJm4dR2c/pub?gid=1305356303&single=true&output=csv"
holidays_csv_url      = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQJ3kJb0FhVt7nYwzXJm4dR2c/pub?gid=1058273430&single=true&output=csv"
events_ics_url        = "https://calendar.google.com/calendar/ical/astrocal%40example.org/public/basic.ics"
almanac_path          = "data/almanac_2026.json"

[calendar]
year        = 2026
start_month = "2026-08"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/astrocal/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
}

/// `[sources]` section of `config.toml` — where each feed comes from.
///
/// The three sheet URLs point at one published spreadsheet, one tab each;
/// the almanac path is relative to the working directory.
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    #[serde(default = "default_photos_csv_url")]
    pub photos_csv_url: String,
    #[serde(default = "default_special_dates_csv_url")]
    pub special_dates_csv_url: String,
    #[serde(default = "default_holidays_csv_url")]
    pub holidays_csv_url: String,
    #[serde(default = "default_events_ics_url")]
    pub events_ics_url: String,
    #[serde(default = "default_almanac_path")]
    pub almanac_path: PathBuf,
}

fn default_photos_csv_url() -> String {
    "https://docs.google.com/spreadsheets/d/e/2PACX-1vQJ3kJb0FhVt7nYwzXJm4dR2c/pub?gid=0&single=true&output=csv".to_string()
}
fn default_special_dates_csv_url() -> String {
    "https://docs.google.com/spreadsheets/d/e/2PACX-1vQJ3kJb0FhVt7nYwzXJm4dR2c/pub?gid=1305356303&single=true&output=csv".to_string()
}
fn default_holidays_csv_url() -> String {
    "https://docs.google.com/spreadsheets/d/e/2PACX-1vQJ3kJb0FhVt7nYwzXJm4dR2c/pub?gid=1058273430&single=true&output=csv".to_string()
}
fn default_events_ics_url() -> String {
    "https://calendar.google.com/calendar/ical/astrocal%40example.org/public/basic.ics".to_string()
}
fn default_almanac_path() -> PathBuf {
    PathBuf::from("data/almanac_2026.json")
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            photos_csv_url: default_photos_csv_url(),
            special_dates_csv_url: default_special_dates_csv_url(),
            holidays_csv_url: default_holidays_csv_url(),
            events_ics_url: default_events_ics_url(),
            almanac_path: default_almanac_path(),
        }
    }
}

/// `[calendar]` section of `config.toml` — the covered year and the month
/// the viewer opens on.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    #[serde(default = "default_year")]
    pub year: i32,
    #[serde(default = "default_start_month")]
    pub start_month: String,
}

fn default_year() -> i32 { 2026 }
fn default_start_month() -> String { "2026-08".to_string() }

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            year: default_year(),
            start_month: default_start_month(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/astrocal/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load from an explicit path, layered on top of the built-in defaults.
    pub fn load_from(path: &std::path::Path) -> anyhow::Result<Self> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("astrocal")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
