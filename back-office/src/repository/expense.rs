//! Expense Repository

use chrono::NaiveDate;
use shared::models::ExpenseEntry;

use super::RepoResult;
use crate::store::{BackOfficeStore, DatedBucket};

#[derive(Clone)]
pub struct ExpenseRepository {
    store: BackOfficeStore,
}

impl ExpenseRepository {
    pub fn new(store: BackOfficeStore) -> Self {
        Self { store }
    }

    pub fn get(&self, date: NaiveDate, id: &str) -> RepoResult<Option<ExpenseEntry>> {
        Ok(self
            .store
            .get_dated(DatedBucket::Expenses, &date_key(date), id)?)
    }

    pub fn put(&self, entry: &ExpenseEntry) -> RepoResult<()> {
        Ok(self.store.put_dated(
            DatedBucket::Expenses,
            &date_key(entry.date),
            &entry.id,
            entry,
        )?)
    }

    pub fn delete(&self, date: NaiveDate, id: &str) -> RepoResult<bool> {
        Ok(self
            .store
            .remove_dated(DatedBucket::Expenses, &date_key(date), id)?)
    }

    /// All entries for one date, including unfinished blank drafts
    pub fn list_for_date(&self, date: NaiveDate) -> RepoResult<Vec<ExpenseEntry>> {
        Ok(self.store.list_dated(DatedBucket::Expenses, &date_key(date))?)
    }
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
