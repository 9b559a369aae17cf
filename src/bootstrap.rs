//! Fixed example dataset used when no snapshot is imported at startup.
//! Stands in for a real data source in any non-demo deployment.

use chrono::NaiveDate;

use crate::model::{AppState, Budget, Goal, Investment, Transaction, User};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// One user, three transactions, three budgets, two investments, two goals.
pub fn sample_state() -> AppState {
    let mut state = AppState::new(User::new("John Doe", "john@example.com"));

    for (description, category, amount, day) in [
        ("Salary", "Income", 5000.0, 1),
        ("Rent", "Housing", -1500.0, 2),
        ("Groceries", "Food", -200.0, 3),
    ] {
        let id = state.allocate_transaction_id();
        state.push_transaction(Transaction::new(
            id,
            date(2023, 5, day),
            description,
            category,
            amount,
        ));
    }

    state.budgets.push(Budget::new("Housing", 2000.0));
    state.budgets.push(Budget::new("Food", 500.0));
    state.budgets.push(Budget::new("Entertainment", 300.0));

    state.investments.push(Investment::new("Stock A", 10_000.0, 5.2));
    state.investments.push(Investment::new("Stock B", 5_000.0, -2.1));

    state.goals.push(Goal::new("Emergency Fund", 10_000.0, 5_000.0));
    state.goals.push(Goal::new("Vacation", 5_000.0, 2_000.0));

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::SummaryService;

    #[test]
    fn sample_state_matches_expected_shape() {
        let state = sample_state();
        assert_eq!(state.user.name, "John Doe");
        assert_eq!(state.transaction_count(), 3);
        assert_eq!(state.budgets.len(), 3);
        assert_eq!(state.investments.len(), 2);
        assert_eq!(state.goals.len(), 2);
    }

    #[test]
    fn sample_state_overview() {
        let overview = SummaryService::overview(&sample_state());
        assert_eq!(overview.net_balance, 3300.0);
        assert_eq!(overview.savings, 3300.0);
    }
}
