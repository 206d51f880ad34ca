//! Audit log entries and their display helpers
//!
//! Entries are read-only snapshots owned by the audit log source. This module
//! only knows how to classify an entry's action and how to format timestamps.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder rendered for timestamps that cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";

/// A single audit log entry describing an action on a scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    pub id: String,
    pub performed_at: String,
    pub action: String,
    pub scenario_name: String,
    pub user_name: String,
    #[serde(default)]
    pub additional_data: Option<AdditionalData>,
}

/// Optional extra timestamps attached to delete/restore actions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalData {
    #[serde(default)]
    pub deleted_at: Option<String>,
    #[serde(default)]
    pub restored_at: Option<String>,
}

/// Visual emphasis used for an action badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Destructive,
    Default,
    Secondary,
    Outline,
}

impl BadgeVariant {
    /// Classify an action label. Comparison ignores case; unknown labels
    /// fall back to `Outline`.
    pub fn from_action(action: &str) -> Self {
        match action.to_lowercase().as_str() {
            "deleted" => BadgeVariant::Destructive,
            "restored" => BadgeVariant::Default,
            "created" => BadgeVariant::Secondary,
            "updated" => BadgeVariant::Outline,
            _ => BadgeVariant::Outline,
        }
    }
}

impl AuditLogEntry {
    pub fn badge_variant(&self) -> BadgeVariant {
        BadgeVariant::from_action(&self.action)
    }

    /// Badge text is the action upper-cased
    pub fn badge_label(&self) -> String {
        self.action.to_uppercase()
    }
}

/// Short date+time convention used when rendering timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateLocale {
    /// `6/1/2024, 2:30 PM`
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    /// `01/06/2024, 14:30`
    #[serde(rename = "en-GB")]
    EnGb,
}

impl DateLocale {
    fn short_datetime_format(&self) -> &'static str {
        match self {
            DateLocale::EnUs => "%-m/%-d/%Y, %-I:%M %p",
            DateLocale::EnGb => "%d/%m/%Y, %H:%M",
        }
    }
}

impl fmt::Display for DateLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateLocale::EnUs => write!(f, "en-US"),
            DateLocale::EnGb => write!(f, "en-GB"),
        }
    }
}

/// Parse a timestamp into an instant.
///
/// Accepts RFC 3339 (seconds optional), naive date-times (interpreted in
/// `tz`) and bare `YYYY-MM-DD` dates (interpreted as UTC midnight).
pub fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    // Minute precision with an offset, `Z` taken as UTC
    let with_offset = match raw.strip_suffix('Z').or_else(|| raw.strip_suffix('z')) {
        Some(stripped) => format!("{}+00:00", stripped),
        None => raw.to_string(),
    };
    for format in ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"] {
        if let Ok(dt) = DateTime::parse_from_str(&with_offset, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return tz
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc));
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Format a timestamp for display in the given zone
pub fn format_timestamp_in<Tz>(raw: &str, locale: DateLocale, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    match parse_timestamp(raw, tz) {
        Some(instant) => instant
            .with_timezone(tz)
            .format(locale.short_datetime_format())
            .to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Format a timestamp for display in the local time zone
pub fn format_timestamp(raw: &str, locale: DateLocale) -> String {
    format_timestamp_in(raw, locale, &Local)
}

/// Lines for the details column, in Deleted-at then Restored-at order
pub fn detail_lines(entry: &AuditLogEntry, locale: DateLocale) -> Vec<String> {
    let Some(data) = &entry.additional_data else {
        return Vec::new();
    };

    let mut lines = Vec::new();
    if let Some(deleted_at) = &data.deleted_at {
        lines.push(format!("Deleted at: {}", format_timestamp(deleted_at, locale)));
    }
    if let Some(restored_at) = &data.restored_at {
        lines.push(format!("Restored at: {}", format_timestamp(restored_at, locale)));
    }
    lines
}
