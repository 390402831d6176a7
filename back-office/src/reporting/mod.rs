//! Aggregation / Reporting
//!
//! Pure derived figures over one day's attendance, roster, and expenses.
//! Nothing here writes to the store.
//!
//! Two margin figures coexist on purpose: the printable day sheet has
//! always shown `revenue - gross wages - expenses`, while the dashboard
//! subtracts the charge-loaded real cost. Reconciling them is a business
//! decision, not a code cleanup, so both are computed and labelled.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use shared::models::{AttendanceRecord, DailySummary, Employee, RevenueSegment};

use crate::expenses;
use crate::repository::{AttendanceRepository, ExpenseRepository, RepoResult, RosterRepository};
use crate::store::BackOfficeStore;

/// Fixed employer charge rate applied on top of gross wages
pub const EMPLOYER_CHARGE_RATE: Decimal = dec!(0.45);

/// Minutes -> decimal hours (210 -> 3.5)
pub fn hours_from_minutes(minutes: i64) -> Decimal {
    Decimal::from(minutes) / dec!(60)
}

/// Gross wages plus employer charges
pub fn real_cost(labor_cost: Decimal) -> Decimal {
    labor_cost * (Decimal::ONE + EMPLOYER_CHARGE_RATE)
}

/// Share of revenue eaten by charge-loaded labor; None when there is no
/// revenue to divide by.
pub fn labor_cost_ratio(real_cost: Decimal, total_revenue: Decimal) -> Option<Decimal> {
    if total_revenue > Decimal::ZERO {
        Some(real_cost / total_revenue)
    } else {
        None
    }
}

/// Day-sheet margin: gross-wage cost basis, employer charges excluded
pub fn margin(total_revenue: Decimal, labor_cost: Decimal, total_expenses: Decimal) -> Decimal {
    total_revenue - labor_cost - total_expenses
}

/// Dashboard margin: charge-loaded cost basis
pub fn margin_after_charges(
    total_revenue: Decimal,
    real_cost: Decimal,
    total_expenses: Decimal,
) -> Decimal {
    total_revenue - real_cost - total_expenses
}

/// Daily report assembly
#[derive(Clone)]
pub struct ReportService {
    attendance: AttendanceRepository,
    expenses: ExpenseRepository,
    roster: RosterRepository,
}

impl ReportService {
    pub fn new(store: BackOfficeStore) -> Self {
        Self {
            attendance: AttendanceRepository::new(store.clone()),
            expenses: ExpenseRepository::new(store.clone()),
            roster: RosterRepository::new(store),
        }
    }

    /// End-of-day figures for one date.
    ///
    /// Only present records of employees still on the roster count;
    /// orphaned rows of deleted staff are skipped, never an error.
    pub fn daily_summary(&self, date: NaiveDate) -> RepoResult<DailySummary> {
        let roster: HashMap<String, Employee> = self
            .roster
            .find_all()?
            .into_iter()
            .map(|e| (e.id.clone(), e))
            .collect();

        let mut total_minutes: i64 = 0;
        let mut labor_cost = Decimal::ZERO;
        let mut revenue_service = Decimal::ZERO;
        let mut revenue_bar = Decimal::ZERO;

        for record in self.attendance.list_for_date(date)? {
            if !record.present {
                continue;
            }
            let Some(employee) = roster.get(&record.employee_id) else {
                continue;
            };

            total_minutes += record.paid_minutes();
            labor_cost += paid_cost(&record, employee);

            if let (Some(revenue), Some(segment)) =
                (record.individual_revenue, employee.role.revenue_segment())
            {
                match segment {
                    RevenueSegment::Service => revenue_service += revenue,
                    RevenueSegment::Bar => revenue_bar += revenue,
                }
            }
        }

        let total_expenses = expenses::total(&self.expenses.list_for_date(date)?);
        let total_revenue = revenue_service + revenue_bar;
        let real_cost = real_cost(labor_cost);

        Ok(DailySummary {
            date,
            total_hours: hours_from_minutes(total_minutes),
            labor_cost,
            real_cost,
            employer_charge_rate: EMPLOYER_CHARGE_RATE,
            revenue_service,
            revenue_bar,
            total_revenue,
            total_expenses,
            labor_cost_ratio: labor_cost_ratio(real_cost, total_revenue),
            margin: margin(total_revenue, labor_cost, total_expenses),
            margin_after_charges: margin_after_charges(total_revenue, real_cost, total_expenses),
        })
    }
}

/// Pay for one attendance record: paid hours x the employee's rate
fn paid_cost(record: &AttendanceRecord, employee: &Employee) -> Decimal {
    hours_from_minutes(record.paid_minutes()) * employee.hourly_rate
}
