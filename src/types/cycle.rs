use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CycleStatus, DateOrBool, LtsStatus};

/// One release cycle of a product, as served by `/api/{product}.json`.
///
/// Every key must be present and no others are accepted, so a change to the
/// upstream schema surfaces as an error instead of silently dropped data.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Cycle {
    /// Release cycle identifier (e.g. "3.11")
    pub cycle: String,
    /// Date of the first release in this cycle
    pub release_date: NaiveDate,
    pub eol: DateOrBool,
    /// Latest release in this cycle
    pub latest: String,
    /// Changelog link for the latest release, empty when unknown
    pub link: String,
    pub lts: LtsStatus,
    /// Active support
    pub support: DateOrBool,
    pub discontinued: DateOrBool,
}

impl Cycle {
    /// Support phase as of `today`.
    pub fn status(&self, today: NaiveDate) -> CycleStatus {
        if self.eol.is_reached(today) {
            CycleStatus::EndOfLife
        } else if self.support.is_reached(today) {
            CycleStatus::SecurityOnly
        } else {
            CycleStatus::Supported
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PYTHON_311: &str = r#"{
        "cycle": "3.11",
        "releaseDate": "2022-10-24",
        "eol": "2027-10-24",
        "latest": "3.11.9",
        "link": "",
        "lts": false,
        "support": "2024-04-01",
        "discontinued": false
    }"#;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_cycle_deserialization() {
        let cycle: Cycle = serde_json::from_str(PYTHON_311).unwrap();
        assert_eq!(cycle.cycle, "3.11");
        assert_eq!(cycle.release_date, ymd(2022, 10, 24));
        assert_eq!(cycle.eol, DateOrBool::Date(ymd(2027, 10, 24)));
        assert_eq!(cycle.latest, "3.11.9");
        assert_eq!(cycle.link, "");
        assert_eq!(cycle.lts, LtsStatus::Bool(false));
        assert_eq!(cycle.support, DateOrBool::Date(ymd(2024, 4, 1)));
        assert_eq!(cycle.discontinued, DateOrBool::Bool(false));
    }

    #[test]
    fn test_cycle_missing_field_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(PYTHON_311).unwrap();
        value.as_object_mut().unwrap().remove("eol");
        let err = serde_json::from_value::<Cycle>(value).unwrap_err();
        assert!(err.to_string().contains("missing field `eol`"));
    }

    #[test]
    fn test_cycle_unknown_field_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(PYTHON_311).unwrap();
        value
            .as_object_mut()
            .unwrap()
            .insert("extendedSupport".to_string(), serde_json::Value::Bool(true));
        let err = serde_json::from_value::<Cycle>(value).unwrap_err();
        assert!(err.to_string().contains("unknown field `extendedSupport`"));
    }

    #[test]
    fn test_cycle_null_link_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(PYTHON_311).unwrap();
        value
            .as_object_mut()
            .unwrap()
            .insert("link".to_string(), serde_json::Value::Null);
        assert!(serde_json::from_value::<Cycle>(value).is_err());
    }

    #[test]
    fn test_cycle_serializes_with_api_keys() {
        let cycle: Cycle = serde_json::from_str(PYTHON_311).unwrap();
        let value = serde_json::to_value(&cycle).unwrap();
        assert_eq!(value["releaseDate"], "2022-10-24");
        assert_eq!(value["eol"], "2027-10-24");
        assert_eq!(value["discontinued"], false);
    }

    #[test]
    fn test_cycle_status() {
        let cycle: Cycle = serde_json::from_str(PYTHON_311).unwrap();
        assert_eq!(cycle.status(ymd(2023, 1, 1)), CycleStatus::Supported);
        assert_eq!(cycle.status(ymd(2025, 1, 1)), CycleStatus::SecurityOnly);
        assert_eq!(cycle.status(ymd(2027, 10, 24)), CycleStatus::EndOfLife);
    }
}
