// Date utility functions
// Calendar-date helpers shared by the display calculator and the settings state

use chrono::{Datelike, Local, NaiveDate};

/// Storage format for the birth date setting (`YYYY-MM-DD`).
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's date on the host clock, time of day stripped.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses an ISO `YYYY-MM-DD` date. Surrounding whitespace is ignored.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT).ok()
}

pub fn to_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Whole calendar days from `from` to `to`; negative when `to` is earlier.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Completed calendar months from `from` to `to`.
///
/// The month only counts once its anniversary day has been reached, so
/// Jan 31 -> Mar 1 is one month, not two.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    let mut months = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    if to.day() < from.day() {
        months -= 1;
    }
    months
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2024-03-01"), Some(date(2024, 3, 1)));
        assert_eq!(parse_iso_date(" 2024-03-01 "), Some(date(2024, 3, 1)));
        assert_eq!(parse_iso_date("2024-02-30"), None);
        assert_eq!(parse_iso_date("not a date"), None);
        assert_eq!(parse_iso_date(""), None);
    }

    #[test]
    fn test_iso_round_trip_keeps_zero_padding() {
        assert_eq!(to_iso_date(date(2025, 1, 5)), "2025-01-05");
    }

    #[test]
    fn test_days_between_crosses_leap_day() {
        assert_eq!(days_between(date(2024, 2, 28), date(2024, 3, 1)), 2);
        assert_eq!(days_between(date(2024, 3, 1), date(2024, 2, 28)), -2);
    }

    #[test]
    fn test_months_between_waits_for_anniversary() {
        assert_eq!(months_between(date(2024, 1, 31), date(2024, 3, 1)), 1);
        assert_eq!(months_between(date(2024, 1, 15), date(2024, 3, 15)), 2);
        assert_eq!(months_between(date(2023, 11, 20), date(2024, 2, 19)), 2);
    }
}
