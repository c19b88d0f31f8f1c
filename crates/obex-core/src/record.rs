use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Column names in output order, matching the bulletin table layout.
pub const CSV_COLUMNS: [&str; 12] = [
    "ISO3",
    "COUNTRY",
    "EVENT_NAME",
    "GRADE",
    "DATE_NOTIFY",
    "DATE_START",
    "DATE_END",
    "CASES_TOTAL",
    "CASES_CONFIRMED",
    "DEATHS",
    "CFR",
    "NOTES",
];

/// One row of the bulletin's "events currently being monitored" table.
///
/// Counts and dates are optional because the table prints "-" for
/// values a country has not reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutbreakRecord {
    #[serde(rename = "ISO3")]
    pub iso3: Option<String>,
    #[serde(rename = "COUNTRY")]
    pub country: String,
    #[serde(rename = "EVENT_NAME")]
    pub event: String,
    #[serde(rename = "GRADE")]
    pub grade: String,
    #[serde(rename = "DATE_NOTIFY")]
    pub date_notified: Option<NaiveDate>,
    #[serde(rename = "DATE_START")]
    pub date_start: Option<NaiveDate>,
    #[serde(rename = "DATE_END")]
    pub date_end: Option<NaiveDate>,
    #[serde(rename = "CASES_TOTAL")]
    pub cases_total: Option<i64>,
    #[serde(rename = "CASES_CONFIRMED")]
    pub cases_confirmed: Option<i64>,
    #[serde(rename = "DEATHS")]
    pub deaths: Option<i64>,
    #[serde(rename = "CFR")]
    pub cfr: String,
    #[serde(rename = "NOTES")]
    pub notes: String,
}

impl OutbreakRecord {
    #[must_use]
    pub fn new(country: String, event: String) -> Self {
        Self {
            country,
            event,
            ..Self::default()
        }
    }
}
