//! Budget upserts and per-category spending math.

use crate::core::services::{require_non_negative, require_text, UpsertOutcome};
use crate::errors::Result;
use crate::model::{AppState, Budget};

/// One row of the budget table: the configured limit next to what was
/// actually spent in that category.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetLine {
    pub category: String,
    pub limit: f64,
    pub spent: f64,
    pub remaining: f64,
}

pub struct BudgetService;

impl BudgetService {
    /// Inserts a budget for `category`, or replaces its limit when one
    /// already exists. The category is the key; repeating the call with the
    /// same arguments leaves a single record behind.
    pub fn upsert(state: &mut AppState, category: &str, limit: f64) -> Result<UpsertOutcome> {
        let category = require_text("category", category)?;
        let limit = require_non_negative("limit", limit)?;
        if let Some(existing) = state.budget_mut(&category) {
            existing.limit = limit;
            return Ok(UpsertOutcome::Replaced);
        }
        state.budgets.push(Budget::new(category, limit));
        Ok(UpsertOutcome::Inserted)
    }

    /// Sum of absolute expense amounts recorded against `category`.
    pub fn spent_by_category(state: &AppState, category: &str) -> f64 {
        state
            .transactions
            .iter()
            .filter(|txn| txn.is_expense() && txn.category == category)
            .map(|txn| txn.amount.abs())
            .sum()
    }

    /// Limit minus spend. Negative means over budget, which is a valid,
    /// displayable state rather than an error.
    pub fn remaining(state: &AppState, budget: &Budget) -> f64 {
        budget.limit - Self::spent_by_category(state, &budget.category)
    }

    /// Budget table rows in stored order.
    pub fn lines(state: &AppState) -> Vec<BudgetLine> {
        state
            .budgets
            .iter()
            .map(|budget| {
                let spent = Self::spent_by_category(state, &budget.category);
                BudgetLine {
                    category: budget.category.clone(),
                    limit: budget.limit,
                    spent,
                    remaining: budget.limit - spent,
                }
            })
            .collect()
    }
}
