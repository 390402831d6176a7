//! Weekly Schedule Model
//!
//! The schedule is a weekly template: one [`ShiftCell`] per (employee,
//! weekday). The same template applies to every calendar week; attendance
//! sheets materialize it into dated records.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::serde_helpers::hhmm_option;

/// Day of the week (schedule grid column)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Weekday {
    #[serde(rename = "MON")]
    Mon,
    #[serde(rename = "TUE")]
    Tue,
    #[serde(rename = "WED")]
    Wed,
    #[serde(rename = "THU")]
    Thu,
    #[serde(rename = "FRI")]
    Fri,
    #[serde(rename = "SAT")]
    Sat,
    #[serde(rename = "SUN")]
    Sun,
}

impl Weekday {
    /// All days, Monday first (grid column order)
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Weekday slot a calendar date falls into
    pub fn from_date(date: NaiveDate) -> Self {
        match date.weekday() {
            chrono::Weekday::Mon => Weekday::Mon,
            chrono::Weekday::Tue => Weekday::Tue,
            chrono::Weekday::Wed => Weekday::Wed,
            chrono::Weekday::Thu => Weekday::Thu,
            chrono::Weekday::Fri => Weekday::Fri,
            chrono::Weekday::Sat => Weekday::Sat,
            chrono::Weekday::Sun => Weekday::Sun,
        }
    }
}

/// Named shift template with default start/end times
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ServicePeriod {
    #[default]
    #[serde(rename = "OFF")]
    Off,
    #[serde(rename = "LUNCH")]
    Lunch,
    #[serde(rename = "DINNER")]
    Dinner,
    #[serde(rename = "FULL_DAY")]
    FullDay,
    #[serde(rename = "CUSTOM")]
    Custom,
}

impl ServicePeriod {
    /// Default (start, end) for the template; Off and Custom carry none.
    pub fn default_times(&self) -> Option<(NaiveTime, NaiveTime)> {
        let hm = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        match self {
            ServicePeriod::Lunch => Some((hm(11, 0), hm(15, 0))),
            ServicePeriod::Dinner => Some((hm(18, 0), hm(23, 0))),
            ServicePeriod::FullDay => Some((hm(11, 0), hm(23, 0))),
            ServicePeriod::Off | ServicePeriod::Custom => None,
        }
    }
}

/// Duration between two optional times of day, in minutes.
///
/// `end <= start` is read as crossing midnight (+24h), so a 23:00–02:00
/// shift is 3h and equal non-empty times are a full 24h. Either endpoint
/// missing means no duration at all.
pub fn duration_minutes(start: Option<NaiveTime>, end: Option<NaiveTime>) -> i64 {
    let (Some(start), Some(end)) = (start, end) else {
        return 0;
    };
    let s = start.signed_duration_since(NaiveTime::MIN).num_minutes();
    let e = end.signed_duration_since(NaiveTime::MIN).num_minutes();
    if e <= s { e + 24 * 60 - s } else { e - s }
}

/// One schedule grid cell: the shift an employee works on one weekday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCell {
    /// Whether the employee works that day at all
    pub active: bool,
    pub service: ServicePeriod,
    #[serde(with = "hhmm_option", default)]
    pub start: Option<NaiveTime>,
    #[serde(with = "hhmm_option", default)]
    pub end: Option<NaiveTime>,
}

impl Default for ShiftCell {
    fn default() -> Self {
        Self {
            active: false,
            service: ServicePeriod::Off,
            start: None,
            end: None,
        }
    }
}

impl ShiftCell {
    /// Scheduled duration in minutes; inactive cells always count 0.
    pub fn duration_minutes(&self) -> i64 {
        if !self.active || self.service == ServicePeriod::Off {
            return 0;
        }
        duration_minutes(self.start, self.end)
    }
}

/// Partial cell update, merged field-wise into the stored cell.
///
/// `start`/`end` are doubly optional: absent leaves the stored time alone,
/// explicit `null` clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShiftCellPatch {
    pub active: Option<bool>,
    pub service: Option<ServicePeriod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Option<NaiveTime>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Option<NaiveTime>>,
}

/// One employee's weekly template (missing days are inactive Off cells)
pub type WeekSchedule = BTreeMap<Weekday, ShiftCell>;

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(h, m, 0)
    }

    #[test]
    fn test_duration_plain() {
        assert_eq!(duration_minutes(hm(11, 0), hm(15, 0)), 240);
        assert_eq!(duration_minutes(hm(9, 30), hm(10, 0)), 30);
    }

    #[test]
    fn test_duration_wraps_past_midnight() {
        assert_eq!(duration_minutes(hm(23, 0), hm(2, 0)), 180);
        // equal non-empty endpoints read as a full day
        assert_eq!(duration_minutes(hm(10, 0), hm(10, 0)), 24 * 60);
    }

    #[test]
    fn test_duration_missing_endpoint_is_zero() {
        assert_eq!(duration_minutes(None, None), 0);
        assert_eq!(duration_minutes(hm(10, 0), None), 0);
        assert_eq!(duration_minutes(None, hm(10, 0)), 0);
    }

    #[test]
    fn test_inactive_cell_has_no_duration() {
        let cell = ShiftCell {
            active: false,
            service: ServicePeriod::Lunch,
            start: hm(11, 0),
            end: hm(15, 0),
        };
        assert_eq!(cell.duration_minutes(), 0);
    }

    #[test]
    fn test_off_cell_has_no_duration() {
        let cell = ShiftCell {
            active: true,
            service: ServicePeriod::Off,
            start: hm(11, 0),
            end: hm(15, 0),
        };
        assert_eq!(cell.duration_minutes(), 0);
    }

    #[test]
    fn test_weekday_from_date() {
        // 2025-06-02 is a Monday
        let monday = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        assert_eq!(Weekday::from_date(monday), Weekday::Mon);
        assert_eq!(
            Weekday::from_date(monday + chrono::Duration::days(6)),
            Weekday::Sun
        );
    }

    #[test]
    fn test_cell_legacy_blob() {
        // legacy cells stored empty strings for unset times
        let cell: ShiftCell =
            serde_json::from_str(r#"{"active":false,"service":"OFF","start":"","end":""}"#)
                .unwrap();
        assert_eq!(cell, ShiftCell::default());
    }
}
