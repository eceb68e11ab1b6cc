//! Calendar date parsing.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{DataError, Result};

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d/%m/%Y"];
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse a calendar date.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, `MM/DD/YYYY`, and ISO date-times whose
/// time part is dropped. Slash dates are month-first; `DD/MM/YYYY` is only
/// used when the first field cannot be a month.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DataError::InvalidDate("empty date".to_string()));
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
                .map(|dt| dt.date())
        })
        .ok_or_else(|| DataError::InvalidDate(format!("Expected YYYY-MM-DD, got: {}", trimmed)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_date() {
        let date = parse_date("2024-03-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_day_first_date() {
        let date = parse_date("31/01/2009").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2009, 1, 31).unwrap());
    }

    #[test]
    fn test_ambiguous_slash_date_is_month_first() {
        let date = parse_date("01/02/2009").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2009, 1, 2).unwrap());
    }

    #[test]
    fn test_datetime_drops_time() {
        let date = parse_date("2020-06-30 00:00:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 6, 30).unwrap());
        let date = parse_date("2020-06-30T12:30:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 6, 30).unwrap());
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert!(parse_date("  2021-01-01 ").is_ok());
    }

    #[test]
    fn test_invalid_dates() {
        assert!(matches!(parse_date(""), Err(DataError::InvalidDate(_))));
        assert!(matches!(parse_date("2024-13-45"), Err(DataError::InvalidDate(_))));
        assert!(matches!(parse_date("yesterday"), Err(DataError::InvalidDate(_))));
    }
}
