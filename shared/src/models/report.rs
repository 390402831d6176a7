//! Report Models
//!
//! Derived figures read by the dashboard and the printable day sheet. These
//! are computed values, never stored.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// End-of-day figures for one date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    /// Paid hours of present staff
    pub total_hours: Decimal,
    /// Gross wages: paid hours x hourly rate
    pub labor_cost: Decimal,
    /// Gross wages plus employer charges
    pub real_cost: Decimal,
    /// Employer charge rate applied to `labor_cost`
    pub employer_charge_rate: Decimal,
    /// Revenue reported by floor/service staff (owner, manager, servers)
    pub revenue_service: Decimal,
    /// Revenue reported by bartenders
    pub revenue_bar: Decimal,
    pub total_revenue: Decimal,
    pub total_expenses: Decimal,
    /// `real_cost / total_revenue`; None when there is no revenue
    pub labor_cost_ratio: Option<Decimal>,
    /// Day-sheet margin: revenue - gross wages - expenses.
    /// Deliberately excludes employer charges; the sheet has always shown
    /// the gross-wage basis.
    pub margin: Decimal,
    /// Dashboard margin: revenue - real cost - expenses (charges included)
    pub margin_after_charges: Decimal,
}

/// Scheduled weekly totals for one employee (schedule grid footer)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeWeekTotal {
    pub employee_id: String,
    pub name: String,
    pub hours: Decimal,
    pub cost: Decimal,
}

/// Weekly totals over the (zone-filtered) roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekTotals {
    pub per_employee: Vec<EmployeeWeekTotal>,
    pub total_hours: Decimal,
    pub total_cost: Decimal,
}
