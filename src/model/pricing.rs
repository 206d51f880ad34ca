//! Pricing request data

use super::audit::parse_timestamp;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder shown when no closing date has been entered
pub const CLOSING_DATE_NOT_SET: &str = "Not set";

/// Editable values held by the pricing confirmation form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PricingFormState {
    pub desired_ltv: String,
    pub desired_closing_date: String,
}

impl PricingFormState {
    pub fn seeded(current_ltv: &str, current_closing_date: &str) -> Self {
        Self {
            desired_ltv: current_ltv.to_string(),
            desired_closing_date: current_closing_date.to_string(),
        }
    }

    /// Snapshot the current values as a request, unmodified
    pub fn to_request(&self) -> PricingRequest {
        PricingRequest {
            desired_ltv: self.desired_ltv.clone(),
            desired_closing_date: self.desired_closing_date.clone(),
        }
    }
}

/// Values handed to the parent when the user confirms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRequest {
    #[serde(rename = "desiredLTV")]
    pub desired_ltv: String,
    pub desired_closing_date: String,
}

/// Human readable "Month Day, Year" rendering of an entered closing date.
///
/// Empty input gives `Not set`; anything unparseable is echoed back as-is.
pub fn closing_date_hint(raw: &str) -> String {
    if raw.is_empty() {
        return CLOSING_DATE_NOT_SET.to_string();
    }

    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .ok()
        .or_else(|| parse_timestamp(raw, &Utc).map(|dt| dt.date_naive()));

    match date {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closing_date_hint_formats_iso_date() {
        assert_eq!(closing_date_hint("2024-06-01"), "June 1, 2024");
        assert_eq!(closing_date_hint("2024-12-25"), "December 25, 2024");
    }

    #[test]
    fn test_closing_date_hint_empty_is_not_set() {
        assert_eq!(closing_date_hint(""), "Not set");
    }

    #[test]
    fn test_closing_date_hint_unparseable_is_verbatim() {
        assert_eq!(closing_date_hint("not-a-date"), "not-a-date");
        assert_eq!(closing_date_hint("2024-13-45"), "2024-13-45");
    }

    #[test]
    fn test_closing_date_hint_accepts_full_timestamp() {
        assert_eq!(closing_date_hint("2024-07-15T00:00:00Z"), "July 15, 2024");
        assert_eq!(closing_date_hint("2024-06-01T14:30Z"), "June 1, 2024");
        assert_eq!(closing_date_hint("2024-06-01T14:30+02:00"), "June 1, 2024");
    }

    #[test]
    fn test_request_keeps_strings_unmodified() {
        let state = PricingFormState::seeded(" 70 ", "2024-07-15");
        let request = state.to_request();
        assert_eq!(request.desired_ltv, " 70 ");
        assert_eq!(request.desired_closing_date, "2024-07-15");
    }

    #[test]
    fn test_request_serializes_with_camel_case_keys() {
        let request = PricingRequest {
            desired_ltv: "70".to_string(),
            desired_closing_date: "2024-07-15".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["desiredLTV"], "70");
        assert_eq!(json["desiredClosingDate"], "2024-07-15");
    }
}
