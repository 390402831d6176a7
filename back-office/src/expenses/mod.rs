//! Expense Log
//!
//! Per-day ad-hoc expenses. Submits are validated whole (label and amount)
//! or rejected; blank draft rows that older storage may still contain are
//! tolerated but never counted.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::models::{ExpenseCreate, ExpenseEntry, ExpenseUpdate};
use uuid::Uuid;

use crate::repository::{ExpenseRepository, RepoError, RepoResult};
use crate::store::BackOfficeStore;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_required_text,
};

/// Sum of the non-blank entries of a day
pub fn total(entries: &[ExpenseEntry]) -> Decimal {
    entries
        .iter()
        .filter(|e| !e.is_blank_draft())
        .map(|e| e.amount)
        .sum()
}

/// Expense log operations
#[derive(Clone)]
pub struct ExpenseService {
    expenses: ExpenseRepository,
}

impl ExpenseService {
    pub fn new(store: BackOfficeStore) -> Self {
        Self {
            expenses: ExpenseRepository::new(store),
        }
    }

    /// Add an expense for a date
    pub fn add(&self, data: ExpenseCreate) -> RepoResult<ExpenseEntry> {
        validate_required_text(&data.label, "label", MAX_NAME_LEN)?;
        validate_amount(data.amount)?;
        validate_optional_text(&data.category, "category", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&data.payment_method, "payment method", MAX_SHORT_TEXT_LEN)?;

        let entry = ExpenseEntry {
            id: Uuid::new_v4().to_string(),
            date: data.date,
            label: data.label.trim().to_string(),
            amount: data.amount,
            category: data.category,
            payment_method: data.payment_method,
        };
        self.expenses.put(&entry)?;
        tracing::debug!("Expense '{}' logged for {}", entry.label, entry.date);
        Ok(entry)
    }

    /// Update an expense in place
    pub fn update(&self, date: NaiveDate, id: &str, data: ExpenseUpdate) -> RepoResult<ExpenseEntry> {
        let mut entry = self
            .expenses
            .get(date, id)?
            .ok_or_else(|| RepoError::NotFound(format!("Expense {} not found", id)))?;

        if let Some(label) = data.label {
            validate_required_text(&label, "label", MAX_NAME_LEN)?;
            entry.label = label.trim().to_string();
        }
        if let Some(amount) = data.amount {
            validate_amount(amount)?;
            entry.amount = amount;
        }
        if let Some(category) = data.category {
            validate_optional_text(&category, "category", MAX_SHORT_TEXT_LEN)?;
            entry.category = category;
        }
        if let Some(payment_method) = data.payment_method {
            validate_optional_text(&payment_method, "payment method", MAX_SHORT_TEXT_LEN)?;
            entry.payment_method = payment_method;
        }

        self.expenses.put(&entry)?;
        Ok(entry)
    }

    /// Delete an expense
    pub fn delete(&self, date: NaiveDate, id: &str) -> RepoResult<()> {
        if !self.expenses.delete(date, id)? {
            return Err(RepoError::NotFound(format!("Expense {} not found", id)));
        }
        Ok(())
    }

    /// All entries of a date, blank drafts included
    pub fn list_for_date(&self, date: NaiveDate) -> RepoResult<Vec<ExpenseEntry>> {
        self.expenses.list_for_date(date)
    }

    /// Day total over non-blank entries
    pub fn total_for_date(&self, date: NaiveDate) -> RepoResult<Decimal> {
        Ok(total(&self.expenses.list_for_date(date)?))
    }

    /// Rows for the printable day sheet: blank drafts are filtered out
    pub fn printable_rows(&self, date: NaiveDate) -> RepoResult<Vec<ExpenseEntry>> {
        let mut rows = self.expenses.list_for_date(date)?;
        rows.retain(|e| !e.is_blank_draft());
        Ok(rows)
    }
}

fn validate_amount(amount: Decimal) -> RepoResult<()> {
    if amount <= Decimal::ZERO {
        return Err(RepoError::Validation("amount must be positive".to_string()));
    }
    Ok(())
}
