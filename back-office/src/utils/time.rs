//! Time helpers

use chrono::{NaiveDate, NaiveTime};

use crate::repository::{RepoError, RepoResult};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> RepoResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| RepoError::Validation(format!("Invalid date format: {}", date)))
}

/// Parse a time-of-day string (HH:MM)
pub fn parse_hhmm(time: &str) -> RepoResult<NaiveTime> {
    NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| RepoError::Validation(format!("Invalid time format: {}", time)))
}
