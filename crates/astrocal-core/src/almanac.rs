//! Almanac pass-through — the precomputed astronomical data file.
//!
//! The almanac is built offline for the covered year and shipped alongside
//! the application as JSON, keyed by canonical day. This module only gives
//! it a typed shape; nothing is derived or recomputed here, and fields the
//! model does not know about are carried through untouched in `extra`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::date::DateKey;

/// The whole almanac file: one entry per covered day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlmanacFile {
    #[serde(default)]
    pub days: BTreeMap<DateKey, AlmanacDay>,
}

/// Precomputed fields for one day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlmanacDay {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moon: Option<MoonInfo>,
    /// Day-cell color hint for the darkest nights of the month.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_color: Option<DayColorHint>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoonInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub illumination_percent: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayColorHint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
