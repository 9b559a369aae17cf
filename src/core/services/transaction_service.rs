//! Business logic helpers for managing transactions.

use chrono::NaiveDate;

use crate::core::services::{require_finite, require_text};
use crate::errors::{FinanceError, Result};
use crate::model::{AppState, Transaction};

/// Validated field set for creating or replacing a transaction. The id is
/// never part of the input; it is assigned by the state and immutable.
#[derive(Debug, Clone)]
pub struct TransactionInput {
    pub date: NaiveDate,
    pub description: String,
    pub category: String,
    pub amount: f64,
}

impl TransactionInput {
    fn validated(self) -> Result<Self> {
        Ok(Self {
            date: self.date,
            description: require_text("description", &self.description)?,
            category: require_text("category", &self.category)?,
            amount: require_finite("amount", self.amount)?,
        })
    }
}

/// Provides validated CRUD operations over the transaction sequence.
pub struct TransactionService;

impl TransactionService {
    /// Adds a new transaction and returns its freshly assigned id.
    pub fn add(state: &mut AppState, input: TransactionInput) -> Result<u64> {
        let input = input.validated()?;
        let id = state.allocate_transaction_id();
        state.push_transaction(Transaction::new(
            id,
            input.date,
            input.description,
            input.category,
            input.amount,
        ));
        tracing::debug!(id, "transaction added");
        Ok(id)
    }

    /// Replaces the fields of the transaction identified by `id`; the id
    /// itself is unchanged.
    pub fn update(state: &mut AppState, id: u64, input: TransactionInput) -> Result<()> {
        let input = input.validated()?;
        let txn = state
            .transaction_mut(id)
            .ok_or(FinanceError::TransactionNotFound(id))?;
        txn.date = input.date;
        txn.description = input.description;
        txn.category = input.category;
        txn.amount = input.amount;
        Ok(())
    }

    /// Removes the transaction identified by `id`, returning the removed
    /// record.
    pub fn remove(state: &mut AppState, id: u64) -> Result<Transaction> {
        state
            .remove_transaction(id)
            .ok_or(FinanceError::TransactionNotFound(id))
    }

    pub fn list(state: &AppState) -> &[Transaction] {
        &state.transactions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::SummaryService;
    use crate::model::User;

    fn base_state() -> AppState {
        AppState::new(User::new("Jane", "jane@example.com"))
    }

    fn input(description: &str, category: &str, amount: f64) -> TransactionInput {
        TransactionInput {
            date: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
            description: description.into(),
            category: category.into(),
            amount,
        }
    }

    #[test]
    fn add_assigns_distinct_ids() {
        let mut state = base_state();
        let first = TransactionService::add(&mut state, input("Salary", "Income", 5000.0)).unwrap();
        let second = TransactionService::add(&mut state, input("Rent", "Housing", -1500.0)).unwrap();
        assert_ne!(first, second);
        assert_eq!(state.transaction_count(), 2);
    }

    #[test]
    fn add_rejects_empty_description() {
        let mut state = base_state();
        let err = TransactionService::add(&mut state, input("  ", "Income", 10.0))
            .expect_err("blank description must fail");
        assert!(matches!(err, FinanceError::Validation(_)));
        assert_eq!(state.transaction_count(), 0);
    }

    #[test]
    fn update_fails_for_missing_transaction() {
        let mut state = base_state();
        let err = TransactionService::update(&mut state, 99, input("Rent", "Housing", -1500.0))
            .expect_err("update must fail for unknown id");
        assert!(matches!(err, FinanceError::TransactionNotFound(99)));
    }

    #[test]
    fn update_replaces_fields_but_not_id() {
        let mut state = base_state();
        let id = TransactionService::add(&mut state, input("Rent", "Housing", -1400.0)).unwrap();
        TransactionService::update(&mut state, id, input("Rent May", "Housing", -1500.0)).unwrap();
        let txn = state.transaction(id).expect("still present");
        assert_eq!(txn.id, id);
        assert_eq!(txn.description, "Rent May");
        assert_eq!(txn.amount, -1500.0);
    }

    #[test]
    fn remove_missing_id_reports_not_found() {
        let mut state = base_state();
        let err = TransactionService::remove(&mut state, 7).expect_err("nothing to remove");
        assert!(matches!(err, FinanceError::TransactionNotFound(7)));
    }

    #[test]
    fn add_then_remove_restores_prior_aggregates() {
        let mut state = base_state();
        TransactionService::add(&mut state, input("Salary", "Income", 5000.0)).unwrap();
        let before = SummaryService::overview(&state);

        let id = TransactionService::add(&mut state, input("Dinner", "Food", -80.0)).unwrap();
        let removed = TransactionService::remove(&mut state, id).unwrap();
        assert_eq!(removed.amount, -80.0);

        assert_eq!(SummaryService::overview(&state), before);
    }
}
