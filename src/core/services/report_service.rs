//! Date-windowed reports over the transaction sequence and the portfolio.

use chrono::NaiveDate;

use crate::core::services::InvestmentService;
use crate::errors::{FinanceError, Result};
use crate::model::AppState;

/// Inclusive calendar range used to scope reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(FinanceError::Validation(format!(
                "window start {} is after end {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncomeExpenseReport {
    pub income: f64,
    pub expenses: f64,
    pub net_income: f64,
}

/// No liabilities are modeled, so `liabilities` is always zero and net worth
/// equals assets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetWorthReport {
    pub assets: f64,
    pub liabilities: f64,
    pub net_worth: f64,
}

pub struct ReportService;

impl ReportService {
    pub fn income_expense(state: &AppState, window: DateWindow) -> IncomeExpenseReport {
        let mut income = 0.0;
        let mut expenses = 0.0;
        for txn in state.transactions.iter().filter(|t| window.contains(t.date)) {
            if txn.is_income() {
                income += txn.amount;
            } else if txn.is_expense() {
                expenses += txn.amount.abs();
            }
        }
        IncomeExpenseReport {
            income,
            expenses,
            net_income: income - expenses,
        }
    }

    /// Expense totals per category over the window, in first-appearance
    /// order.
    pub fn category_breakdown(state: &AppState, window: DateWindow) -> Vec<(String, f64)> {
        let mut totals: Vec<(String, f64)> = Vec::new();
        for txn in state.transactions.iter().filter(|t| window.contains(t.date)) {
            if !txn.is_expense() {
                continue;
            }
            match totals.iter_mut().find(|(category, _)| category == &txn.category) {
                Some((_, total)) => *total += txn.amount.abs(),
                None => totals.push((txn.category.clone(), txn.amount.abs())),
            }
        }
        totals
    }

    pub fn net_worth(state: &AppState) -> NetWorthReport {
        let assets = InvestmentService::net_worth(state);
        let liabilities = 0.0;
        NetWorthReport {
            assets,
            liabilities,
            net_worth: assets - liabilities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::{TransactionInput, TransactionService};
    use crate::model::{Investment, User};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn seeded_state() -> AppState {
        let mut state = AppState::new(User::new("Jane", "jane@example.com"));
        for (day, description, category, amount) in [
            (1, "Salary", "Income", 5000.0),
            (2, "Rent", "Housing", -1500.0),
            (3, "Groceries", "Food", -200.0),
            (20, "Dinner", "Food", -80.0),
        ] {
            TransactionService::add(
                &mut state,
                TransactionInput {
                    date: date(2023, 5, day),
                    description: description.into(),
                    category: category.into(),
                    amount,
                },
            )
            .unwrap();
        }
        state
    }

    #[test]
    fn window_rejects_inverted_range() {
        let err = DateWindow::new(date(2023, 6, 1), date(2023, 5, 1)).expect_err("inverted");
        assert!(matches!(err, FinanceError::Validation(_)));
    }

    #[test]
    fn income_expense_respects_the_window() {
        let state = seeded_state();
        let window = DateWindow::new(date(2023, 5, 1), date(2023, 5, 10)).unwrap();
        let report = ReportService::income_expense(&state, window);
        assert_eq!(report.income, 5000.0);
        assert_eq!(report.expenses, 1700.0);
        assert_eq!(report.net_income, 3300.0);
    }

    #[test]
    fn category_breakdown_accumulates_expenses_only() {
        let state = seeded_state();
        let window = DateWindow::new(date(2023, 5, 1), date(2023, 5, 31)).unwrap();
        let breakdown = ReportService::category_breakdown(&state, window);
        assert_eq!(
            breakdown,
            vec![("Housing".to_string(), 1500.0), ("Food".to_string(), 280.0)]
        );
    }

    #[test]
    fn net_worth_report_has_zero_liabilities() {
        let mut state = seeded_state();
        state.investments.push(Investment::new("Stock A", 10_000.0, 5.2));
        state.investments.push(Investment::new("Stock B", 5_000.0, -2.1));
        let report = ReportService::net_worth(&state);
        assert_eq!(report.assets, 15_000.0);
        assert_eq!(report.liabilities, 0.0);
        assert_eq!(report.net_worth, 15_000.0);
    }
}
