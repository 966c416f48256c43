/// Utilities for date formatting and `<input type="date|month">` values
use chrono::{Datelike, NaiveDate};

const INPUT_DATE: &str = "%Y-%m-%d";

/// Format a date for tables and reports
/// Example: 2024-03-15 -> "15 Mar 2024"
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_default()
}

/// Value for a date input ("" when unset)
pub fn date_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(INPUT_DATE).to_string())
        .unwrap_or_default()
}

/// Parse a date input value; empty or malformed input clears the date
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), INPUT_DATE).ok()
}

/// Parse a month input value ("2024-03") into its first day
pub fn parse_month(value: &str) -> Option<NaiveDate> {
    let (year, month) = value.trim().split_once('-')?;
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

/// Heading for a month input value
/// Example: "2024-03" -> "March 2024"
pub fn month_title(value: &str) -> String {
    parse_month(value)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| value.to_string())
}

pub fn month_value(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Current month from the browser clock, as a month input value
pub fn current_month() -> String {
    let now = js_sys::Date::new_0();
    format!("{:04}-{:02}", now.get_full_year(), now.get_month() + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 15);
        assert_eq!(format_date(d), "15 Mar 2024");
        assert_eq!(format_date(None), "");
    }

    #[test]
    fn test_date_input_roundtrip() {
        let d = NaiveDate::from_ymd_opt(2024, 12, 1);
        assert_eq!(date_input_value(d), "2024-12-01");
        assert_eq!(parse_date_input("2024-12-01"), d);
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("01.12.2024"), None);
    }

    #[test]
    fn test_month_helpers() {
        assert_eq!(parse_month("2024-03"), NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(parse_month("2024-13"), None);
        assert_eq!(month_title("2024-03"), "March 2024");
        assert_eq!(month_title("garbage"), "garbage");
        assert_eq!(month_value(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()), "2025-01");
    }
}
