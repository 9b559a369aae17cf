use serde::{Deserialize, Serialize};

use super::{Budget, Goal, Investment, Transaction, User};

/// Root container owning every domain collection for one session.
///
/// All entities live inside `AppState` and have no identity outside it.
/// Collection access goes through the lookup/removal primitives here; the
/// services in `crate::core` layer validation on top.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    pub user: User,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub investments: Vec<Investment>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default = "AppState::first_id")]
    next_id: u64,
}

impl AppState {
    pub fn new(user: User) -> Self {
        Self {
            user,
            transactions: Vec::new(),
            budgets: Vec::new(),
            investments: Vec::new(),
            goals: Vec::new(),
            next_id: Self::first_id(),
        }
    }

    fn first_id() -> u64 {
        1
    }

    /// Hands out a fresh transaction id. Ids are monotonically increasing and
    /// never reused within a state's lifetime.
    pub fn allocate_transaction_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Bumps the id counter past every id already present. Called after
    /// deserializing a snapshot so future allocations cannot collide.
    pub fn sync_id_counter(&mut self) {
        let highest = self.transactions.iter().map(|txn| txn.id).max();
        if let Some(highest) = highest {
            self.next_id = self.next_id.max(highest + 1);
        }
    }

    pub fn push_transaction(&mut self, transaction: Transaction) -> u64 {
        let id = transaction.id;
        self.transactions.push(transaction);
        self.next_id = self.next_id.max(id + 1);
        id
    }

    pub fn transaction(&self, id: u64) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn transaction_mut(&mut self, id: u64) -> Option<&mut Transaction> {
        self.transactions.iter_mut().find(|txn| txn.id == id)
    }

    pub fn remove_transaction(&mut self, id: u64) -> Option<Transaction> {
        let index = self.transactions.iter().position(|txn| txn.id == id)?;
        Some(self.transactions.remove(index))
    }

    pub fn budget(&self, category: &str) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.category == category)
    }

    pub fn budget_mut(&mut self, category: &str) -> Option<&mut Budget> {
        self.budgets.iter_mut().find(|b| b.category == category)
    }

    pub fn remove_budget(&mut self, category: &str) -> Option<Budget> {
        let index = self.budgets.iter().position(|b| b.category == category)?;
        Some(self.budgets.remove(index))
    }

    pub fn investment(&self, name: &str) -> Option<&Investment> {
        self.investments.iter().find(|i| i.name == name)
    }

    pub fn investment_mut(&mut self, name: &str) -> Option<&mut Investment> {
        self.investments.iter_mut().find(|i| i.name == name)
    }

    pub fn remove_investment(&mut self, name: &str) -> Option<Investment> {
        let index = self.investments.iter().position(|i| i.name == name)?;
        Some(self.investments.remove(index))
    }

    pub fn goal(&self, name: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.name == name)
    }

    pub fn goal_mut(&mut self, name: &str) -> Option<&mut Goal> {
        self.goals.iter_mut().find(|g| g.name == name)
    }

    pub fn remove_goal(&mut self, name: &str) -> Option<Goal> {
        let index = self.goals.iter().position(|g| g.name == name)?;
        Some(self.goals.remove(index))
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 5, 1).unwrap()
    }

    #[test]
    fn allocated_ids_are_unique_and_monotonic() {
        let mut state = AppState::new(User::new("Jane", "jane@example.com"));
        let first = state.allocate_transaction_id();
        let second = state.allocate_transaction_id();
        assert!(second > first);
    }

    #[test]
    fn sync_id_counter_skips_past_existing_ids() {
        let mut state = AppState::new(User::new("Jane", "jane@example.com"));
        state
            .transactions
            .push(Transaction::new(41, sample_date(), "Salary", "Income", 100.0));
        state.sync_id_counter();
        assert_eq!(state.allocate_transaction_id(), 42);
    }

    #[test]
    fn remove_transaction_returns_the_removed_record() {
        let mut state = AppState::new(User::new("Jane", "jane@example.com"));
        let id = state.push_transaction(Transaction::new(
            7,
            sample_date(),
            "Groceries",
            "Food",
            -20.0,
        ));
        let removed = state.remove_transaction(id).expect("present");
        assert_eq!(removed.id, 7);
        assert!(state.transaction(id).is_none());
    }
}
