use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A lifecycle milestone that the API reports either as a date or as a flag.
///
/// `"eol": "2027-10-24"`, `"eol": true` (reached, date unknown) and
/// `"eol": false` (not reached) are all valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateOrBool {
    Date(NaiveDate),
    Bool(bool),
}

impl DateOrBool {
    /// The milestone date, if the API gave one.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            Self::Bool(_) => None,
        }
    }

    /// Whether the milestone has been reached as of `today`.
    pub fn is_reached(&self, today: NaiveDate) -> bool {
        match self {
            Self::Bool(reached) => *reached,
            Self::Date(date) => *date <= today,
        }
    }
}

impl fmt::Display for DateOrBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Bool(true) => write!(f, "yes"),
            Self::Bool(false) => write!(f, "no"),
        }
    }
}

/// Long-term-support marker.
///
/// A date means the cycle becomes LTS on that day. Some products put a
/// free-form label here instead, which is kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LtsStatus {
    Bool(bool),
    Date(NaiveDate),
    Text(String),
}

impl LtsStatus {
    pub fn is_lts(&self, today: NaiveDate) -> bool {
        match self {
            Self::Bool(lts) => *lts,
            Self::Date(date) => *date <= today,
            Self::Text(_) => true,
        }
    }
}

impl fmt::Display for LtsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(true) => write!(f, "yes"),
            Self::Bool(false) => write!(f, "no"),
            Self::Date(date) => write!(f, "from {}", date.format("%Y-%m-%d")),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

/// Support phase of a cycle on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CycleStatus {
    /// Actively supported
    Supported,
    /// Active support ended, still before end of life
    SecurityOnly,
    /// Past end of life
    EndOfLife,
}

impl CycleStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Supported => "Supported",
            Self::SecurityOnly => "Security only",
            Self::EndOfLife => "End of life",
        }
    }
}

impl fmt::Display for CycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_or_bool_from_date_string() {
        let value: DateOrBool = serde_json::from_str("\"2027-10-24\"").unwrap();
        assert_eq!(value, DateOrBool::Date(ymd(2027, 10, 24)));
        assert_eq!(value.as_date(), Some(ymd(2027, 10, 24)));
    }

    #[test]
    fn test_date_or_bool_from_bool() {
        let value: DateOrBool = serde_json::from_str("false").unwrap();
        assert_eq!(value, DateOrBool::Bool(false));
        assert!(value.as_date().is_none());
    }

    #[test]
    fn test_date_or_bool_rejects_other_strings() {
        assert!(serde_json::from_str::<DateOrBool>("\"soon\"").is_err());
        assert!(serde_json::from_str::<DateOrBool>("null").is_err());
    }

    #[test]
    fn test_date_or_bool_is_reached() {
        let today = ymd(2026, 1, 1);
        assert!(DateOrBool::Bool(true).is_reached(today));
        assert!(!DateOrBool::Bool(false).is_reached(today));
        assert!(DateOrBool::Date(ymd(2025, 12, 31)).is_reached(today));
        assert!(DateOrBool::Date(today).is_reached(today));
        assert!(!DateOrBool::Date(ymd(2026, 1, 2)).is_reached(today));
    }

    #[test]
    fn test_date_or_bool_serializes_to_api_shape() {
        assert_eq!(
            serde_json::to_string(&DateOrBool::Date(ymd(2024, 4, 1))).unwrap(),
            "\"2024-04-01\""
        );
        assert_eq!(serde_json::to_string(&DateOrBool::Bool(true)).unwrap(), "true");
    }

    #[test]
    fn test_lts_variants() {
        let flag: LtsStatus = serde_json::from_str("true").unwrap();
        assert_eq!(flag, LtsStatus::Bool(true));

        let date: LtsStatus = serde_json::from_str("\"2024-10-22\"").unwrap();
        assert_eq!(date, LtsStatus::Date(ymd(2024, 10, 22)));

        let text: LtsStatus = serde_json::from_str("\"extended\"").unwrap();
        assert_eq!(text, LtsStatus::Text("extended".to_string()));
    }

    #[test]
    fn test_lts_is_lts() {
        let today = ymd(2024, 6, 1);
        assert!(!LtsStatus::Bool(false).is_lts(today));
        assert!(LtsStatus::Date(ymd(2024, 5, 1)).is_lts(today));
        assert!(!LtsStatus::Date(ymd(2024, 10, 22)).is_lts(today));
        assert!(LtsStatus::Text("extended".to_string()).is_lts(today));
    }

    #[test]
    fn test_display() {
        assert_eq!(DateOrBool::Bool(false).to_string(), "no");
        assert_eq!(DateOrBool::Date(ymd(2027, 10, 24)).to_string(), "2027-10-24");
        assert_eq!(LtsStatus::Date(ymd(2024, 10, 22)).to_string(), "from 2024-10-22");
        assert_eq!(CycleStatus::SecurityOnly.to_string(), "Security only");
    }
}
