//! Investment upserts and portfolio totals.

use crate::core::services::{require_finite, require_non_negative, require_text, UpsertOutcome};
use crate::errors::{FinanceError, Result};
use crate::model::{AppState, Investment};

pub struct InvestmentService;

impl InvestmentService {
    /// Inserts or fully replaces the investment with the input's name.
    pub fn upsert(state: &mut AppState, input: Investment) -> Result<UpsertOutcome> {
        let name = require_text("investment name", &input.name)?;
        let value = require_non_negative("value", input.value)?;
        let growth_percent = require_finite("growth", input.growth_percent)?;
        if let Some(existing) = state.investment_mut(&name) {
            existing.value = value;
            existing.growth_percent = growth_percent;
            return Ok(UpsertOutcome::Replaced);
        }
        state
            .investments
            .push(Investment::new(name, value, growth_percent));
        Ok(UpsertOutcome::Inserted)
    }

    /// Removes the investment with that name, returning the removed record.
    pub fn remove(state: &mut AppState, name: &str) -> Result<Investment> {
        state
            .remove_investment(name)
            .ok_or_else(|| FinanceError::InvestmentNotFound(name.to_string()))
    }

    /// Sum of all held investment values. No liabilities are modeled, so this
    /// is also the net worth.
    pub fn net_worth(state: &AppState) -> f64 {
        state.investments.iter().map(|i| i.value).sum()
    }

    pub fn list(state: &AppState) -> &[Investment] {
        &state.investments
    }
}
