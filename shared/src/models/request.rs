//! Employee Request Model (lateness / leave / absence submissions)

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::serde_helpers::{bool_false, hhmm_option};

/// Kind of staff request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestKind {
    /// Arriving late; carries the expected arrival time
    #[serde(rename = "LATE")]
    Late,
    #[serde(rename = "LEAVE")]
    Leave,
    #[serde(rename = "ABSENCE")]
    Absence,
}

/// A submitted request. Append-only: after submission only `treated` may
/// change, flipped once by a manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    pub id: String,
    pub employee_id: String,
    #[serde(rename = "type")]
    pub kind: RequestKind,
    pub date: NaiveDate,
    /// Expected arrival time; present iff `kind` is Late
    #[serde(with = "hhmm_option", default)]
    pub time: Option<NaiveTime>,
    pub message: Option<String>,
    #[serde(default, deserialize_with = "bool_false")]
    pub treated: bool,
    /// Submission timestamp, Unix millis
    pub created_at: i64,
}

/// Submit request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestCreate {
    pub employee_id: String,
    #[serde(rename = "type")]
    pub kind: RequestKind,
    pub date: NaiveDate,
    #[serde(with = "hhmm_option", default)]
    pub time: Option<NaiveTime>,
    pub message: Option<String>,
}
