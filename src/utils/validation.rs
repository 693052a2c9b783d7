//! Pure domain validators, run before any write.

use crate::error::{Error, Result};
use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

pub fn parse_test_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| Error::Format {
        field: "test_date".to_string(),
        message: format!("expected YYYY-MM-DD, got \"{}\"", raw),
    })
}

pub fn parse_start_time(raw: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), TIME_FORMAT).map_err(|_| Error::Format {
        field: "start_time".to_string(),
        message: format!("expected HH:MM, got \"{}\"", raw),
    })
}

/// Sessions run only on Fridays and Saturdays.
pub fn is_test_day(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Fri | Weekday::Sat)
}

pub fn ensure_test_day(date: NaiveDate) -> Result<()> {
    if is_test_day(date) {
        Ok(())
    } else {
        Err(Error::Validation(
            "Tests can only be scheduled on Fridays or Saturdays.".to_string(),
        ))
    }
}

/// Human-readable grouping key for the schedule listing, e.g.
/// "2024-06-07 (Friday)".
pub fn day_label(date: NaiveDate) -> String {
    date.format("%Y-%m-%d (%A)").to_string()
}
