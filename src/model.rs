//! Shared configuration document for the GradientClock displays
//!
//! The document is a plain value: every mutation constructs a new
//! [`ClockConfig`] and persists it whole. JSON is the interchange format
//! between the phone, watch, and widget processes, so the serde renames
//! here are the wire contract.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ConfigError;
use crate::theme::Theme;

/// Clock display format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFormat {
    #[serde(rename = "HOURS_12")]
    Hours12,
    #[serde(rename = "HOURS_24")]
    Hours24,
}

impl TimeFormat {
    /// Format an hour of the day (0-23) for display.
    ///
    /// 12-hour: `"12 AM"` at midnight, `"12 PM"` at noon, hours past noon
    /// wrap back to 1-11, no zero padding. 24-hour: zero-padded to two
    /// digits, no suffix. Pure function, no side effects.
    pub fn format_hour(self, hour: u8) -> String {
        match self {
            TimeFormat::Hours12 => {
                let display = match hour {
                    0 => 12,
                    1..=12 => hour,
                    _ => hour - 12,
                };
                let suffix = if hour < 12 { "AM" } else { "PM" };
                format!("{display} {suffix}")
            }
            TimeFormat::Hours24 => format!("{hour:02}"),
        }
    }
}

/// The persisted configuration document shared by all displays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockConfig {
    pub time_format: TimeFormat,
    pub theme: Theme,
    /// Epoch milliseconds of the last mutating operation
    pub last_updated: i64,
}

impl ClockConfig {
    /// Canonical JSON encoding; exact inverse of [`ClockConfig::from_json`]
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|source| ConfigError::Serialize { source })
    }

    /// Decode a document from JSON text.
    ///
    /// Unknown theme names are accepted here: the document carries the full
    /// theme value, and catalog resolution is a display-time concern.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse { source })
    }
}

impl Default for ClockConfig {
    /// 24-hour format, first catalog theme, stamped at the time of the call
    fn default() -> Self {
        Self {
            time_format: TimeFormat::Hours24,
            theme: Theme::all()[0].clone(),
            last_updated: now_millis(),
        }
    }
}

/// Wall-clock time in epoch milliseconds
pub(crate) fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
