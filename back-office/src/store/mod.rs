//! redb-based storage layer — the single authoritative store
//!
//! Every page-level feature reads and writes through this one store; there
//! are no per-page buckets with competing shapes.
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `roster` | `employee_id` | `Employee` | Staff roster |
//! | `schedule` | `employee_id` | `Weekday → ShiftCell` | Weekly template |
//! | `attendance` | `(date, employee_id)` | `AttendanceRecord` | Day sheets |
//! | `expenses` | `(date, expense_id)` | `ExpenseEntry` | Expense log |
//! | `requests` | `request_id` | `EmployeeRequest` | Shift requests |
//! | `settings` | `"ui"` | `UiSettings` | UI preferences |
//!
//! Values are JSON blobs. A blob that no longer matches its schema is
//! logged and treated as absent — reads fail closed to the default, they
//! never crash the caller.

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Staff roster: key = employee id, value = JSON-serialized Employee
const ROSTER_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("roster");

/// Weekly template: key = employee id, value = JSON map weekday -> cell
const SCHEDULE_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("schedule");

/// Attendance: key = (date "YYYY-MM-DD", employee id), value = JSON record
const ATTENDANCE_TABLE: TableDefinition<(&str, &str), &[u8]> = TableDefinition::new("attendance");

/// Expenses: key = (date "YYYY-MM-DD", expense id), value = JSON entry
const EXPENSES_TABLE: TableDefinition<(&str, &str), &[u8]> = TableDefinition::new("expenses");

/// Requests: key = request id, value = JSON-serialized EmployeeRequest
const REQUESTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("requests");

/// Settings: single row under key "ui"
const SETTINGS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("settings");

pub(crate) const SETTINGS_KEY: &str = "ui";

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Handle to the named tables a caller may address generically
#[derive(Debug, Clone, Copy)]
pub(crate) enum Bucket {
    Roster,
    Schedule,
    Requests,
    Settings,
}

impl Bucket {
    fn table(self) -> TableDefinition<'static, &'static str, &'static [u8]> {
        match self {
            Bucket::Roster => ROSTER_TABLE,
            Bucket::Schedule => SCHEDULE_TABLE,
            Bucket::Requests => REQUESTS_TABLE,
            Bucket::Settings => SETTINGS_TABLE,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Bucket::Roster => "roster",
            Bucket::Schedule => "schedule",
            Bucket::Requests => "requests",
            Bucket::Settings => "settings",
        }
    }
}

/// Date-scoped tables with (date, id) composite keys
#[derive(Debug, Clone, Copy)]
pub(crate) enum DatedBucket {
    Attendance,
    Expenses,
}

impl DatedBucket {
    fn table(self) -> TableDefinition<'static, (&'static str, &'static str), &'static [u8]> {
        match self {
            DatedBucket::Attendance => ATTENDANCE_TABLE,
            DatedBucket::Expenses => EXPENSES_TABLE,
        }
    }

    fn name(self) -> &'static str {
        match self {
            DatedBucket::Attendance => "attendance",
            DatedBucket::Expenses => "expenses",
        }
    }
}

/// Back-office storage backed by redb
#[derive(Clone)]
pub struct BackOfficeStore {
    db: Arc<Database>,
}

impl BackOfficeStore {
    /// Open or create the database at the given path.
    ///
    /// redb commits with `Durability::Immediate`: the file is always in a
    /// consistent state, even across power loss.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;
        let store = Self { db: Arc::new(db) };
        store.init_tables()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        let store = Self { db: Arc::new(db) };
        store.init_tables()?;
        Ok(store)
    }

    /// Create all tables so later read transactions never miss one
    fn init_tables(&self) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let _ = write_txn.open_table(ROSTER_TABLE)?;
            let _ = write_txn.open_table(SCHEDULE_TABLE)?;
            let _ = write_txn.open_table(ATTENDANCE_TABLE)?;
            let _ = write_txn.open_table(EXPENSES_TABLE)?;
            let _ = write_txn.open_table(REQUESTS_TABLE)?;
            let _ = write_txn.open_table(SETTINGS_TABLE)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    // ========== Simple buckets ==========

    /// Read one value; malformed blobs are logged and read as absent
    pub(crate) fn get<T: DeserializeOwned>(
        &self,
        bucket: Bucket,
        key: &str,
    ) -> StoreResult<Option<T>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(bucket.table())?;
        let Some(guard) = table.get(key)? else {
            return Ok(None);
        };
        Ok(decode(bucket.name(), key, guard.value()))
    }

    /// Insert or replace one value
    pub(crate) fn put<T: Serialize>(&self, bucket: Bucket, key: &str, value: &T) -> StoreResult<()> {
        let bytes = serde_json::to_vec(value)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(bucket.table())?;
            table.insert(key, bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Remove one value; returns whether the key existed
    pub(crate) fn remove(&self, bucket: Bucket, key: &str) -> StoreResult<bool> {
        let write_txn = self.db.begin_write()?;
        let existed;
        {
            let mut table = write_txn.open_table(bucket.table())?;
            existed = table.remove(key)?.is_some();
        }
        write_txn.commit()?;
        Ok(existed)
    }

    /// All entries of a bucket, skipping malformed blobs
    pub(crate) fn list<T: DeserializeOwned>(&self, bucket: Bucket) -> StoreResult<Vec<T>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(bucket.table())?;
        let mut out = Vec::new();
        for entry in table.iter()? {
            let (key, value) = entry?;
            if let Some(decoded) = decode(bucket.name(), key.value(), value.value()) {
                out.push(decoded);
            }
        }
        Ok(out)
    }

    // ========== Date-scoped buckets ==========

    pub(crate) fn get_dated<T: DeserializeOwned>(
        &self,
        bucket: DatedBucket,
        date: &str,
        id: &str,
    ) -> StoreResult<Option<T>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(bucket.table())?;
        let Some(guard) = table.get((date, id))? else {
            return Ok(None);
        };
        Ok(decode(bucket.name(), id, guard.value()))
    }

    pub(crate) fn put_dated<T: Serialize>(
        &self,
        bucket: DatedBucket,
        date: &str,
        id: &str,
        value: &T,
    ) -> StoreResult<()> {
        let bytes = serde_json::to_vec(value)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(bucket.table())?;
            table.insert((date, id), bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    pub(crate) fn remove_dated(
        &self,
        bucket: DatedBucket,
        date: &str,
        id: &str,
    ) -> StoreResult<bool> {
        let write_txn = self.db.begin_write()?;
        let existed;
        {
            let mut table = write_txn.open_table(bucket.table())?;
            existed = table.remove((date, id))?.is_some();
        }
        write_txn.commit()?;
        Ok(existed)
    }

    /// All entries for one date, skipping malformed blobs
    pub(crate) fn list_dated<T: DeserializeOwned>(
        &self,
        bucket: DatedBucket,
        date: &str,
    ) -> StoreResult<Vec<T>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(bucket.table())?;
        let mut out = Vec::new();
        for entry in table.iter()? {
            let (key, value) = entry?;
            let (entry_date, id) = key.value();
            if entry_date != date {
                continue;
            }
            if let Some(decoded) = decode(bucket.name(), id, value.value()) {
                out.push(decoded);
            }
        }
        Ok(out)
    }

    /// Insert raw bytes (test hook for exercising the fail-closed read path)
    #[cfg(test)]
    pub(crate) fn put_raw(&self, bucket: Bucket, key: &str, bytes: &[u8]) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(bucket.table())?;
            table.insert(key, bytes)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

/// Schema-validated decode: a blob that fails to parse is reported once
/// and dropped, so one bad row cannot take a whole page down.
fn decode<T: DeserializeOwned>(table: &str, key: &str, bytes: &[u8]) -> Option<T> {
    match serde_json::from_slice(bytes) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Discarding malformed blob in '{}' at key '{}': {}", table, key, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Employee, Role, Zone};

    fn employee(id: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: id.to_string(),
            role: Role::Server,
            zone: Zone::FloorBar,
            hourly_rate: rust_decimal_macros::dec!(14),
        }
    }

    #[test]
    fn test_put_get_remove() {
        let store = BackOfficeStore::open_in_memory().unwrap();
        assert!(store.get::<Employee>(Bucket::Roster, "marco").unwrap().is_none());

        store.put(Bucket::Roster, "marco", &employee("marco")).unwrap();
        let back: Employee = store.get(Bucket::Roster, "marco").unwrap().unwrap();
        assert_eq!(back.id, "marco");

        assert!(store.remove(Bucket::Roster, "marco").unwrap());
        assert!(!store.remove(Bucket::Roster, "marco").unwrap());
    }

    #[test]
    fn test_malformed_blob_reads_as_absent() {
        let store = BackOfficeStore::open_in_memory().unwrap();
        store.put_raw(Bucket::Roster, "broken", b"{not json at all").unwrap();
        store.put(Bucket::Roster, "ok", &employee("ok")).unwrap();

        // single read: absent, not an error
        assert!(store.get::<Employee>(Bucket::Roster, "broken").unwrap().is_none());

        // listing: the bad row is skipped, the good one survives
        let all: Vec<Employee> = store.list(Bucket::Roster).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, "ok");
    }

    #[test]
    fn test_dated_bucket_scopes_by_date() {
        let store = BackOfficeStore::open_in_memory().unwrap();
        store
            .put_dated(DatedBucket::Expenses, "2025-06-02", "a", &serde_json::json!({"v": 1}))
            .unwrap();
        store
            .put_dated(DatedBucket::Expenses, "2025-06-03", "b", &serde_json::json!({"v": 2}))
            .unwrap();

        let day: Vec<serde_json::Value> =
            store.list_dated(DatedBucket::Expenses, "2025-06-02").unwrap();
        assert_eq!(day.len(), 1);
        assert_eq!(day[0]["v"], 1);
    }

    #[test]
    fn test_open_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.redb");
        {
            let store = BackOfficeStore::open(&path).unwrap();
            store.put(Bucket::Roster, "marco", &employee("marco")).unwrap();
        }
        let store = BackOfficeStore::open(&path).unwrap();
        let back: Option<Employee> = store.get(Bucket::Roster, "marco").unwrap();
        assert!(back.is_some());
    }
}
