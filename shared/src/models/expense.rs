//! Expense Model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Ad-hoc expense entry, scoped to one calendar date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub id: String,
    pub date: NaiveDate,
    pub label: String,
    pub amount: Decimal,
    pub category: Option<String>,
    pub payment_method: Option<String>,
}

impl ExpenseEntry {
    /// A draft row the user never filled in: no label and no amount.
    /// Blank drafts are kept in storage but excluded from totals and print.
    pub fn is_blank_draft(&self) -> bool {
        self.label.trim().is_empty() && self.amount.is_zero()
    }
}

/// Create expense payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseCreate {
    pub date: NaiveDate,
    pub label: String,
    pub amount: Decimal,
    pub category: Option<String>,
    pub payment_method: Option<String>,
}

/// Update expense payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseUpdate {
    pub label: Option<String>,
    pub amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<Option<String>>,
}
