//! Date/time parsing and formatting.
//!
//! Exactly two input formats are accepted: a bare date (`2024-12-01`,
//! implying midnight) and a day-first date with a 24-hour time
//! (`1/12/2024 1800`). Storage uses a single canonical format that
//! round-trips losslessly; display formatting drops the time of day
//! when it is exactly midnight.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

static DATE_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());
static DATE_WITH_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}/\d{1,2}/\d{4} \d{4}$").unwrap());

const STORAGE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parses user-facing date text into an instant.
pub fn parse_date_time(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();

    if DATE_ONLY.is_match(trimmed) {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Ok(date.and_time(NaiveTime::MIN));
        }
    }

    if DATE_WITH_TIME.is_match(trimmed) {
        if let Ok(instant) = NaiveDateTime::parse_from_str(trimmed, "%d/%m/%Y %H%M") {
            return Ok(instant);
        }
    }

    Err(Error::DateFormat {
        input: input.to_string(),
    })
}

/// Human display form, e.g. `Dec 01 2024` or `Dec 01 2024 6:30 PM`.
pub fn format_for_display(instant: &NaiveDateTime) -> String {
    if instant.hour() == 0 && instant.minute() == 0 {
        instant.format("%b %d %Y").to_string()
    } else {
        instant.format("%b %d %Y %-I:%M %p").to_string()
    }
}

/// Canonical storage form (`yyyy-MM-dd HH:mm`), the single source of
/// truth for round-tripping.
pub fn format_for_storage(instant: &NaiveDateTime) -> String {
    instant.format(STORAGE_FORMAT).to_string()
}

/// Strict inverse of [`format_for_storage`].
pub fn parse_from_storage(input: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input.trim(), STORAGE_FORMAT).map_err(|_| Error::DateFormat {
        input: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn parses_bare_date_as_midnight() {
        let instant = parse_date_time("2024-12-25").unwrap();
        assert_eq!(
            (instant.year(), instant.month(), instant.day()),
            (2024, 12, 25)
        );
        assert_eq!((instant.hour(), instant.minute()), (0, 0));
    }

    #[test]
    fn parses_day_first_date_with_time() {
        let instant = parse_date_time("25/12/2024 1430").unwrap();
        assert_eq!(
            (instant.year(), instant.month(), instant.day()),
            (2024, 12, 25)
        );
        assert_eq!((instant.hour(), instant.minute()), (14, 30));
    }

    #[test]
    fn accepts_single_digit_day_and_month() {
        let instant = parse_date_time("2/1/2024 0900").unwrap();
        assert_eq!((instant.month(), instant.day()), (1, 2));
        assert_eq!(instant.hour(), 9);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert!(parse_date_time("  2024-12-25  ").is_ok());
    }

    #[test]
    fn rejects_other_shapes() {
        for bad in [
            "tomorrow",
            "2024/12/25",
            "25-12-2024",
            "1/1/2024",
            "1/1/2024 18:00",
            "",
        ] {
            assert!(
                matches!(parse_date_time(bad), Err(Error::DateFormat { .. })),
                "expected DateFormat error for {bad:?}"
            );
        }
    }

    #[test]
    fn rejects_impossible_calendar_dates() {
        assert!(parse_date_time("2024-13-01").is_err());
        assert!(parse_date_time("30/2/2024 1000").is_err());
    }

    #[test]
    fn display_omits_midnight() {
        let midnight = parse_date_time("2024-12-01").unwrap();
        assert_eq!(format_for_display(&midnight), "Dec 01 2024");
    }

    #[test]
    fn display_appends_twelve_hour_time() {
        let evening = parse_date_time("1/12/2024 1800").unwrap();
        assert_eq!(format_for_display(&evening), "Dec 01 2024 6:00 PM");

        let morning = parse_date_time("1/12/2024 0605").unwrap();
        assert_eq!(format_for_display(&morning), "Dec 01 2024 6:05 AM");
    }

    #[test]
    fn storage_format_round_trips() {
        for text in ["2024-12-25", "25/12/2024 1430", "1/1/2000 0001"] {
            let instant = parse_date_time(text).unwrap();
            let stored = format_for_storage(&instant);
            assert_eq!(parse_from_storage(&stored).unwrap(), instant);
        }
    }

    #[test]
    fn storage_parse_rejects_display_format() {
        assert!(parse_from_storage("Dec 01 2024").is_err());
    }
}
