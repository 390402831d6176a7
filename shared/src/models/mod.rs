//! Domain Models
//!
//! Entities and payloads persisted by the back-office store. Every model is
//! a plain serde struct; times of day are serialized as `"HH:MM"` strings
//! (empty string accepted as "unset" for legacy blobs) and money fields as
//! plain JSON numbers.

pub mod attendance;
pub mod employee;
pub mod expense;
pub mod report;
pub mod request;
pub mod schedule;
pub mod serde_helpers;
pub mod settings;

pub use attendance::{AttendanceRecord, AttendanceUpdate};
pub use employee::{Employee, EmployeeCreate, EmployeeUpdate, RevenueSegment, Role, Zone};
pub use expense::{ExpenseCreate, ExpenseEntry, ExpenseUpdate};
pub use report::{DailySummary, EmployeeWeekTotal, WeekTotals};
pub use request::{EmployeeRequest, RequestCreate, RequestKind};
pub use schedule::{ServicePeriod, ShiftCell, ShiftCellPatch, WeekSchedule, Weekday};
pub use settings::UiSettings;
