//! Date normalizer — canonical day and month keys.
//!
//! Every per-day mapping in the pipeline is joined on a [`DateKey`]
//! (`YYYY-MM-DD`), and the monthly-photo mapping on a [`MonthKey`]
//! (`MM-YYYY`). Both are derivable deterministically from every supported
//! source format; anything that does not match is rejected so the caller
//! can skip the record.
//!
//! Unlike the permissive token match alone, both constructors also require
//! the fields to form a real calendar date (`15/13/2026` and `29/02/2026`
//! are rejected).

use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// `D/M/YYYY` or `DD/MM/YYYY`, with `/` or `-` as separator.
static DMY_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})[/-](\d{1,2})[/-](\d{4})$").expect("date token pattern is valid")
});

// ---------------------------------------------------------------------------
// DateKey
// ---------------------------------------------------------------------------

/// Canonical per-day key, `YYYY-MM-DD`.
///
/// Lexicographic order equals chronological order, so these sort correctly
/// as `BTreeMap` keys and serialize as plain strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    /// Build a key from calendar fields. `None` when the fields do not form
    /// a real date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)?;
        Some(Self(format!("{year:04}-{month:02}-{day:02}")))
    }

    /// Parse a day/month/year text cell (`15/08/2026`, `1-8-2026`).
    ///
    /// Whitespace is trimmed from both ends first, including the
    /// non-breaking spaces that spreadsheet exports sprinkle around cells.
    /// Interior whitespace, two-digit years, and out-of-pattern text are
    /// all rejected rather than guessed at.
    pub fn parse_dmy(raw: &str) -> Option<Self> {
        let clean = raw.replace('\u{00a0}', " ");
        let caps = DMY_TOKEN.captures(clean.trim())?;
        let day: u32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let year: i32 = caps[3].parse().ok()?;
        Self::from_ymd(year, month, day)
    }

    /// Parse a string already in canonical `YYYY-MM-DD` form.
    pub fn parse_iso(raw: &str) -> Option<Self> {
        let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()?;
        Some(Self(date.format("%Y-%m-%d").to_string()))
    }

    /// Parse a calendar-feed date-time stamp (`20260815`, `20260815T210000`,
    /// `20260815T210000Z`).
    ///
    /// The date is taken verbatim from the first 8 characters; any time
    /// portion and zone indicator are discarded. No timezone conversion is
    /// performed. `None` when fewer than 8 characters are present.
    pub fn parse_stamp(raw: &str) -> Option<Self> {
        let date: String = raw.chars().take(8).collect();
        if date.chars().count() < 8 || !date.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let year: i32 = date[0..4].parse().ok()?;
        let month: u32 = date[4..6].parse().ok()?;
        let day: u32 = date[6..8].parse().ok()?;
        Self::from_ymd(year, month, day)
    }

    /// The month this day belongs to, as a photo-index key.
    pub fn month_key(&self) -> MonthKey {
        MonthKey(format!("{}-{}", &self.0[5..7], &self.0[0..4]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// MonthKey
// ---------------------------------------------------------------------------

/// Canonical per-month key, `MM-YYYY`. Used only by the monthly-photo
/// index, whose source sheet is keyed by month rather than day.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthKey(String);

impl MonthKey {
    /// Accept a raw month cell that is expected to arrive pre-formatted as
    /// `MM-YYYY`: trim and pass through. `None` when the cell is empty.
    pub fn from_raw(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    /// Reorder an ISO year-month (`2026-08`) into a month key (`08-2026`).
    pub fn from_iso_ym(iso_ym: &str) -> Option<Self> {
        let (year, month) = iso_ym.split_once('-')?;
        if year.len() != 4 || month.len() != 2 {
            return None;
        }
        if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self(format!("{month}-{year}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// MonthCursor
// ---------------------------------------------------------------------------

/// A year-month position with wrap-around navigation, used to step through
/// the displayed month. The printed form is ISO `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    /// 1-based month, always in `1..=12`.
    pub month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// Parse an ISO year-month (`2026-08`).
    pub fn parse(iso_ym: &str) -> Option<Self> {
        let (year, month) = iso_ym.split_once('-')?;
        if year.len() != 4 {
            return None;
        }
        Self::new(year.parse().ok()?, month.parse().ok()?)
    }

    pub fn next(self) -> Self {
        match self.month {
            12 => Self { year: self.year + 1, month: 1 },
            m => Self { year: self.year, month: m + 1 },
        }
    }

    pub fn prev(self) -> Self {
        match self.month {
            1 => Self { year: self.year - 1, month: 12 },
            m => Self { year: self.year, month: m - 1 },
        }
    }

    /// Clamp to the covered year: January of `year` when before it,
    /// December of `year` when past it.
    pub fn clamp_to_year(self, year: i32) -> Self {
        if self.year < year {
            Self { year, month: 1 }
        } else if self.year > year {
            Self { year, month: 12 }
        } else {
            self
        }
    }

    pub fn month_key(self) -> MonthKey {
        MonthKey(format!("{:02}-{:04}", self.month, self.year))
    }

    /// Number of days in this month.
    pub fn days_in_month(self) -> u32 {
        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("month is always in 1..=12");
        let next = self.next();
        let next_first = NaiveDate::from_ymd_opt(next.year, next.month, 1)
            .expect("month is always in 1..=12");
        next_first.signed_duration_since(first).num_days() as u32
    }

    /// The day key for a given day of this month, when it exists.
    pub fn day(self, day: u32) -> Option<DateKey> {
        DateKey::from_ymd(self.year, self.month, day)
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
