//! Attendance Sheet
//!
//! Dated attendance rows, pre-filled once from the weekly schedule. The
//! sync is one-directional and deliberately lossy: a record that exists —
//! whether auto-filled or written by hand — is never touched again by the
//! schedule, no matter which field was edited.

use chrono::NaiveDate;
use shared::models::{AttendanceRecord, AttendanceUpdate, Employee, ServicePeriod, Weekday};

use crate::repository::{
    AttendanceRepository, RepoError, RepoResult, RosterRepository, ScheduleRepository,
};
use crate::store::BackOfficeStore;
use crate::utils::validation::{MAX_NOTE_LEN, validate_optional_text};

/// Attendance sheet operations
#[derive(Clone)]
pub struct AttendanceService {
    attendance: AttendanceRepository,
    roster: RosterRepository,
    schedule: ScheduleRepository,
}

impl AttendanceService {
    pub fn new(store: BackOfficeStore) -> Self {
        Self {
            attendance: AttendanceRepository::new(store.clone()),
            roster: RosterRepository::new(store.clone()),
            schedule: ScheduleRepository::new(store),
        }
    }

    /// Materialize the weekly schedule into the sheet for one date.
    ///
    /// For every roster employee with an active, non-Off cell on that
    /// weekday and no attendance record yet, a record is inserted with the
    /// cell's times and `auto_filled` set. Existing records are skipped
    /// unconditionally, so running the sync again is a no-op.
    ///
    /// Returns the number of records inserted.
    pub fn sync_for_date(&self, date: NaiveDate) -> RepoResult<usize> {
        let weekday = Weekday::from_date(date);
        let mut inserted = 0;

        for employee in self.roster.find_all()? {
            let cell = self.schedule.cell(&employee.id, weekday)?;
            if !cell.active || cell.service == ServicePeriod::Off {
                continue;
            }
            if self.attendance.get(date, &employee.id)?.is_some() {
                continue;
            }

            self.attendance.put(&AttendanceRecord {
                employee_id: employee.id.clone(),
                date,
                present: true,
                start: cell.start,
                end: cell.end,
                pause_minutes: 0,
                individual_revenue: None,
                note: None,
                auto_filled: true,
            })?;
            inserted += 1;
        }

        if inserted > 0 {
            tracing::debug!("Auto-filled {} attendance record(s) for {}", inserted, date);
        }
        Ok(inserted)
    }

    /// Manual edit of one record; creates it when the employee had no row
    /// for that date yet.
    pub fn update_record(
        &self,
        date: NaiveDate,
        employee_id: &str,
        patch: AttendanceUpdate,
    ) -> RepoResult<AttendanceRecord> {
        let employee = self.roster.find_by_id(employee_id)?.ok_or_else(|| {
            RepoError::NotFound(format!("Employee {} not found", employee_id))
        })?;

        let mut record = self
            .attendance
            .get(date, employee_id)?
            .unwrap_or_else(|| AttendanceRecord {
                employee_id: employee_id.to_string(),
                date,
                present: false,
                start: None,
                end: None,
                pause_minutes: 0,
                individual_revenue: None,
                note: None,
                auto_filled: false,
            });

        if let Some(present) = patch.present {
            record.present = present;
        }
        if let Some(start) = patch.start {
            record.start = start;
        }
        if let Some(end) = patch.end {
            record.end = end;
        }
        if let Some(pause) = patch.pause_minutes {
            record.pause_minutes = pause;
        }
        if let Some(revenue) = patch.individual_revenue {
            if revenue.is_some() && employee.role.revenue_segment().is_none() {
                return Err(RepoError::Validation(format!(
                    "Employee {} does not report individual revenue",
                    employee_id
                )));
            }
            record.individual_revenue = revenue;
        }
        if let Some(note) = patch.note {
            validate_optional_text(&note, "note", MAX_NOTE_LEN)?;
            record.note = note;
        }

        self.attendance.put(&record)?;
        Ok(record)
    }

    /// Raw records for a date (orphans of deleted employees included)
    pub fn records_for_date(&self, date: NaiveDate) -> RepoResult<Vec<AttendanceRecord>> {
        self.attendance.list_for_date(date)
    }

    /// The sheet as rendered: records joined against the roster, rows of
    /// deleted employees silently dropped.
    pub fn sheet_for_date(&self, date: NaiveDate) -> RepoResult<Vec<(Employee, AttendanceRecord)>> {
        let roster = self.roster.find_all()?;
        let mut rows = Vec::new();
        for record in self.attendance.list_for_date(date)? {
            if let Some(employee) = roster.iter().find(|e| e.id == record.employee_id) {
                rows.push((employee.clone(), record));
            }
        }
        Ok(rows)
    }

    pub fn delete_record(&self, date: NaiveDate, employee_id: &str) -> RepoResult<()> {
        if !self.attendance.delete(date, employee_id)? {
            return Err(RepoError::NotFound(format!(
                "No attendance record for {} on {}",
                employee_id, date
            )));
        }
        Ok(())
    }
}
