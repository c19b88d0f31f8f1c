use chrono::NaiveDate;

/// Case and death counts, as printed: spaces as thousands separators,
/// "-" when a country has not reported. Unparseable values are logged
/// and dropped rather than failing the record.
#[must_use]
pub fn parse_count(raw: &str) -> Option<i64> {
    let cleaned = raw.trim().replace(' ', "");
    if cleaned.is_empty() || cleaned == "-" {
        return None;
    }
    match cleaned.parse() {
        Ok(count) => Some(count),
        Err(_) => {
            tracing::warn!(value = raw, "could not parse count");
            None
        }
    }
}

/// Dates as printed in the table, e.g. "5-Jan-21" or "16-Mar-2020".
const DATE_FORMATS: [&str; 2] = ["%d-%b-%y", "%d-%b-%Y"];

#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    tracing::warn!(value = raw, "could not parse date");
    None
}
