//! Dashboard aggregates. Every function here is pure: derived values are
//! recomputed from the current state on each call, never cached.

use crate::model::{AppState, Transaction};

/// The financial overview card row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overview {
    pub net_balance: f64,
    pub total_income: f64,
    pub total_expenses: f64,
    pub savings: f64,
}

pub struct SummaryService;

impl SummaryService {
    /// Sum of all transaction amounts, signed.
    pub fn net_balance(state: &AppState) -> f64 {
        state.transactions.iter().map(|txn| txn.amount).sum()
    }

    /// Sum of positive amounts.
    pub fn total_income(state: &AppState) -> f64 {
        state
            .transactions
            .iter()
            .filter(|txn| txn.is_income())
            .map(|txn| txn.amount)
            .sum()
    }

    /// Sum of absolute values of negative amounts.
    pub fn total_expenses(state: &AppState) -> f64 {
        state
            .transactions
            .iter()
            .filter(|txn| txn.is_expense())
            .map(|txn| txn.amount.abs())
            .sum()
    }

    pub fn savings(state: &AppState) -> f64 {
        Self::total_income(state) - Self::total_expenses(state)
    }

    pub fn overview(state: &AppState) -> Overview {
        Overview {
            net_balance: Self::net_balance(state),
            total_income: Self::total_income(state),
            total_expenses: Self::total_expenses(state),
            savings: Self::savings(state),
        }
    }

    /// First `limit` transactions of the sequence, for the dashboard table.
    pub fn recent_transactions(state: &AppState, limit: usize) -> Vec<&Transaction> {
        state.transactions.iter().take(limit).collect()
    }

    /// Transaction categories in first-appearance order, deduplicated. Used
    /// to populate selection lists.
    pub fn distinct_categories(state: &AppState) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for txn in &state.transactions {
            if !categories.iter().any(|c| c == &txn.category) {
                categories.push(txn.category.clone());
            }
        }
        categories
    }
}
