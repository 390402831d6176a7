//! Schedule Repository
//!
//! Stores one weekly template row per employee (`Weekday → ShiftCell`).
//! This is the unified shape; `import_legacy_blob` folds the two storage
//! layouts older builds produced into it.

use std::collections::HashMap;

use serde::Deserialize;
use shared::models::{ShiftCell, WeekSchedule, Weekday};

use super::{RepoError, RepoResult};
use crate::store::{BackOfficeStore, Bucket};

#[derive(Clone)]
pub struct ScheduleRepository {
    store: BackOfficeStore,
}

impl ScheduleRepository {
    pub fn new(store: BackOfficeStore) -> Self {
        Self { store }
    }

    /// One employee's weekly template; missing days read as inactive cells
    pub fn week(&self, employee_id: &str) -> RepoResult<WeekSchedule> {
        Ok(self
            .store
            .get(Bucket::Schedule, employee_id)?
            .unwrap_or_default())
    }

    /// One cell; absent rows and days read as the default (inactive, Off)
    pub fn cell(&self, employee_id: &str, day: Weekday) -> RepoResult<ShiftCell> {
        Ok(self.week(employee_id)?.remove(&day).unwrap_or_default())
    }

    pub fn put_cell(&self, employee_id: &str, day: Weekday, cell: ShiftCell) -> RepoResult<()> {
        let mut week = self.week(employee_id)?;
        week.insert(day, cell);
        self.put_week(employee_id, &week)
    }

    pub fn put_week(&self, employee_id: &str, week: &WeekSchedule) -> RepoResult<()> {
        Ok(self.store.put(Bucket::Schedule, employee_id, week)?)
    }

    /// Drop an employee's template row
    pub fn delete_week(&self, employee_id: &str) -> RepoResult<bool> {
        Ok(self.store.remove(Bucket::Schedule, employee_id)?)
    }

    /// Import a schedule blob written by an older build.
    ///
    /// Two layouts existed: a nested map `employee_id → weekday → cell` and
    /// a flat map keyed `"employee_id-WEEKDAY"` (weekday as a name or a
    /// 0-based index, Monday first). Either is folded into per-employee
    /// rows; anything else is rejected. Returns the number of employees
    /// whose rows were written.
    pub fn import_legacy_blob(&self, json: &str) -> RepoResult<usize> {
        let blob: LegacyScheduleBlob = serde_json::from_str(json)
            .map_err(|e| RepoError::Validation(format!("Unrecognized schedule blob: {e}")))?;

        let nested: HashMap<String, WeekSchedule> = match blob {
            LegacyScheduleBlob::Nested(map) => map,
            LegacyScheduleBlob::Flat(map) => {
                let mut nested: HashMap<String, WeekSchedule> = HashMap::new();
                for (key, cell) in map {
                    let Some((employee_id, day)) = split_flat_key(&key) else {
                        tracing::warn!("Skipping legacy schedule key '{}'", key);
                        continue;
                    };
                    nested.entry(employee_id.to_string()).or_default().insert(day, cell);
                }
                nested
            }
        };

        let count = nested.len();
        for (employee_id, week) in &nested {
            self.put_week(employee_id, week)?;
        }
        tracing::info!("Imported legacy schedule rows for {} employee(s)", count);
        Ok(count)
    }
}

/// The two blob layouts older builds wrote, tried in order
#[derive(Deserialize)]
#[serde(untagged)]
enum LegacyScheduleBlob {
    Nested(HashMap<String, WeekSchedule>),
    Flat(HashMap<String, ShiftCell>),
}

/// Split `"employee_id-WEEKDAY"`; the employee id may itself contain dashes
fn split_flat_key(key: &str) -> Option<(&str, Weekday)> {
    let (employee_id, day_part) = key.rsplit_once('-')?;
    let day = match day_part.to_ascii_uppercase().as_str() {
        "0" | "MON" => Weekday::Mon,
        "1" | "TUE" => Weekday::Tue,
        "2" | "WED" => Weekday::Wed,
        "3" | "THU" => Weekday::Thu,
        "4" | "FRI" => Weekday::Fri,
        "5" | "SAT" => Weekday::Sat,
        "6" | "SUN" => Weekday::Sun,
        _ => return None,
    };
    Some((employee_id, day))
}
