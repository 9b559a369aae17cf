use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single dated ledger entry. Positive amounts are income, negative
/// amounts are expenses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: u64,
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub amount: f64,
}

impl Transaction {
    pub fn new(
        id: u64,
        date: NaiveDate,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            id,
            date,
            description: description.into(),
            category: category.into(),
            amount,
        }
    }

    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }
}
