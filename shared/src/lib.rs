//! Shared types for the back-office suite
//!
//! Domain models used by the store, repositories, and reporting:
//! roster, weekly schedule, attendance, expenses, and staff requests.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    AttendanceRecord, AttendanceUpdate, DailySummary, Employee, EmployeeCreate, EmployeeRequest,
    EmployeeUpdate, EmployeeWeekTotal, ExpenseCreate, ExpenseEntry, ExpenseUpdate, RequestCreate,
    RequestKind, RevenueSegment, Role, ServicePeriod, ShiftCell, ShiftCellPatch, UiSettings,
    WeekSchedule, WeekTotals, Weekday, Zone,
};
