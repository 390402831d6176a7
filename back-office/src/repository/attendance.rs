//! Attendance Repository
//!
//! One row per (date, employee). This per-date map is the single
//! authoritative attendance representation.

use chrono::NaiveDate;
use shared::models::AttendanceRecord;

use super::RepoResult;
use crate::store::{BackOfficeStore, DatedBucket};

#[derive(Clone)]
pub struct AttendanceRepository {
    store: BackOfficeStore,
}

impl AttendanceRepository {
    pub fn new(store: BackOfficeStore) -> Self {
        Self { store }
    }

    pub fn get(&self, date: NaiveDate, employee_id: &str) -> RepoResult<Option<AttendanceRecord>> {
        Ok(self
            .store
            .get_dated(DatedBucket::Attendance, &date_key(date), employee_id)?)
    }

    pub fn put(&self, record: &AttendanceRecord) -> RepoResult<()> {
        Ok(self.store.put_dated(
            DatedBucket::Attendance,
            &date_key(record.date),
            &record.employee_id,
            record,
        )?)
    }

    pub fn delete(&self, date: NaiveDate, employee_id: &str) -> RepoResult<bool> {
        Ok(self
            .store
            .remove_dated(DatedBucket::Attendance, &date_key(date), employee_id)?)
    }

    /// All records for one date, employee order
    pub fn list_for_date(&self, date: NaiveDate) -> RepoResult<Vec<AttendanceRecord>> {
        Ok(self
            .store
            .list_dated(DatedBucket::Attendance, &date_key(date))?)
    }
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: NaiveDate, employee_id: &str) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: employee_id.to_string(),
            date,
            present: true,
            start: None,
            end: None,
            pause_minutes: 0,
            individual_revenue: None,
            note: None,
            auto_filled: false,
        }
    }

    #[test]
    fn test_rows_are_scoped_by_date() {
        let repo = AttendanceRepository::new(BackOfficeStore::open_in_memory().unwrap());
        let monday = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let tuesday = NaiveDate::from_ymd_opt(2025, 6, 3).unwrap();

        repo.put(&record(monday, "marco")).unwrap();
        repo.put(&record(monday, "anna")).unwrap();
        repo.put(&record(tuesday, "marco")).unwrap();

        assert_eq!(repo.list_for_date(monday).unwrap().len(), 2);
        assert_eq!(repo.list_for_date(tuesday).unwrap().len(), 1);
        assert!(repo.get(tuesday, "anna").unwrap().is_none());

        assert!(repo.delete(monday, "anna").unwrap());
        assert_eq!(repo.list_for_date(monday).unwrap().len(), 1);
    }
}
