//! Weekly Schedule Grid
//!
//! The 7-day × N-employee grid of shift cells, plus the copy gestures the
//! grid page offers and the weekly hour/cost totals shown in its footer.
//!
//! The grid is a weekly template: the same cells apply to every calendar
//! week. Dated attendance rows are derived from it lazily, per date, by
//! [`crate::attendance::AttendanceService::sync_for_date`].

use rust_decimal::Decimal;
use shared::models::{
    EmployeeWeekTotal, ServicePeriod, ShiftCell, ShiftCellPatch, WeekSchedule, WeekTotals, Weekday,
    Zone,
};

use crate::repository::{RepoError, RepoResult, RosterRepository, ScheduleRepository};
use crate::reporting::hours_from_minutes;
use crate::store::BackOfficeStore;

/// Schedule grid operations
#[derive(Clone)]
pub struct ScheduleService {
    roster: RosterRepository,
    schedule: ScheduleRepository,
}

impl ScheduleService {
    pub fn new(store: BackOfficeStore) -> Self {
        Self {
            roster: RosterRepository::new(store.clone()),
            schedule: ScheduleRepository::new(store),
        }
    }

    /// One employee's weekly template
    pub fn week(&self, employee_id: &str) -> RepoResult<WeekSchedule> {
        self.schedule.week(employee_id)
    }

    /// One grid cell (default inactive cell when nothing is stored)
    pub fn cell(&self, employee_id: &str, day: Weekday) -> RepoResult<ShiftCell> {
        self.schedule.cell(employee_id, day)
    }

    /// Merge a patch into one cell and store the result.
    ///
    /// Picking a service period with default times fills start/end from the
    /// template unless the patch also carries explicit times; picking Off
    /// deactivates the cell and clears its times.
    pub fn set_cell(
        &self,
        employee_id: &str,
        day: Weekday,
        patch: ShiftCellPatch,
    ) -> RepoResult<ShiftCell> {
        self.require_employee(employee_id)?;

        let mut cell = self.schedule.cell(employee_id, day)?;

        if let Some(active) = patch.active {
            cell.active = active;
        }
        if let Some(service) = patch.service {
            cell.service = service;
            match service {
                ServicePeriod::Off => {
                    cell.active = false;
                    cell.start = None;
                    cell.end = None;
                }
                _ => {
                    if let Some((start, end)) = service.default_times()
                        && patch.start.is_none()
                        && patch.end.is_none()
                    {
                        cell.start = Some(start);
                        cell.end = Some(end);
                    }
                }
            }
        }
        if let Some(start) = patch.start {
            cell.start = start;
        }
        if let Some(end) = patch.end {
            cell.end = end;
        }

        self.schedule.put_cell(employee_id, day, cell.clone())?;
        tracing::debug!("Cell updated: {} {:?}", employee_id, day);
        Ok(cell)
    }

    /// Broadcast one cell to all 7 days of the employee's week.
    ///
    /// The copy is the full cell value, `active` included: a day that was
    /// previously off becomes a working day if the source is one.
    pub fn copy_cell_to_week(&self, employee_id: &str, source_day: Weekday) -> RepoResult<()> {
        self.require_employee(employee_id)?;

        let source = self.schedule.cell(employee_id, source_day)?;
        let mut week = WeekSchedule::new();
        for day in Weekday::ALL {
            week.insert(day, source.clone());
        }
        self.schedule.put_week(employee_id, &week)?;
        tracing::debug!("Cell {:?} copied across the week for {}", source_day, employee_id);
        Ok(())
    }

    /// Overwrite one cell with another's full value (drag-and-drop / paste)
    pub fn copy_cell_to_cell(
        &self,
        from: (&str, Weekday),
        to: (&str, Weekday),
    ) -> RepoResult<()> {
        self.require_employee(from.0)?;
        self.require_employee(to.0)?;

        let source = self.schedule.cell(from.0, from.1)?;
        self.schedule.put_cell(to.0, to.1, source)?;
        Ok(())
    }

    /// Weekly scheduled hours and cost per employee, over the roster
    /// filtered by zone. Schedule rows for ids no longer on the roster are
    /// simply never visited.
    pub fn week_totals(&self, zone: Option<Zone>) -> RepoResult<WeekTotals> {
        let mut per_employee = Vec::new();
        let mut total_hours = Decimal::ZERO;
        let mut total_cost = Decimal::ZERO;

        for employee in self.roster.find_all()? {
            if let Some(zone) = zone
                && employee.zone != zone
            {
                continue;
            }

            let week = self.schedule.week(&employee.id)?;
            let minutes: i64 = week.values().map(ShiftCell::duration_minutes).sum();
            let hours = hours_from_minutes(minutes);
            let cost = hours * employee.hourly_rate;

            total_hours += hours;
            total_cost += cost;
            per_employee.push(EmployeeWeekTotal {
                employee_id: employee.id,
                name: employee.name,
                hours,
                cost,
            });
        }

        Ok(WeekTotals {
            per_employee,
            total_hours,
            total_cost,
        })
    }

    fn require_employee(&self, employee_id: &str) -> RepoResult<()> {
        if self.roster.find_by_id(employee_id)?.is_none() {
            return Err(RepoError::NotFound(format!(
                "Employee {} not found",
                employee_id
            )));
        }
        Ok(())
    }
}
