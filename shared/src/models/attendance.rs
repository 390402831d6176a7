//! Attendance Model
//!
//! One record per (date, employee). Records are either written by hand on
//! the attendance sheet or auto-filled once from the weekly schedule; the
//! `auto_filled` marker records that provenance.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::schedule::duration_minutes;
use super::serde_helpers::{bool_false, hhmm_option};

/// Actual presence of one employee on one date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub employee_id: String,
    pub date: NaiveDate,
    pub present: bool,
    #[serde(with = "hhmm_option", default)]
    pub start: Option<NaiveTime>,
    #[serde(with = "hhmm_option", default)]
    pub end: Option<NaiveTime>,
    /// Unpaid break, minutes
    #[serde(default)]
    pub pause_minutes: u32,
    /// Revenue attributed to this employee for the day (floor/bar only)
    pub individual_revenue: Option<Decimal>,
    pub note: Option<String>,
    /// Set once when the record was derived from the schedule; such records
    /// are never re-synced (and neither is anything written by hand).
    #[serde(default, deserialize_with = "bool_false")]
    pub auto_filled: bool,
}

impl AttendanceRecord {
    /// Worked duration before the break deduction, minutes
    pub fn duration_minutes(&self) -> i64 {
        duration_minutes(self.start, self.end)
    }

    /// Paid minutes: worked duration minus the unpaid break, floored at 0
    pub fn paid_minutes(&self) -> i64 {
        (self.duration_minutes() - i64::from(self.pause_minutes)).max(0)
    }
}

/// Manual edit of an attendance record.
///
/// Times, revenue, and note are doubly optional so an edit can clear them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttendanceUpdate {
    pub present: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Option<NaiveTime>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Option<NaiveTime>>,
    pub pause_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub individual_revenue: Option<Option<Decimal>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<Option<String>>,
}
