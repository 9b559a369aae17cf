//! Savings goal upserts. Targets are strictly positive by construction, so
//! progress percentages never divide by zero.

use crate::core::services::{require_non_negative, require_positive, require_text, UpsertOutcome};
use crate::errors::{FinanceError, Result};
use crate::model::{AppState, Goal};

pub struct GoalService;

impl GoalService {
    /// Inserts or fully replaces the goal with the input's name.
    pub fn upsert(state: &mut AppState, input: Goal) -> Result<UpsertOutcome> {
        let name = require_text("goal name", &input.name)?;
        let target = require_positive("target", input.target)?;
        let current = require_non_negative("current", input.current)?;
        if let Some(existing) = state.goal_mut(&name) {
            existing.target = target;
            existing.current = current;
            return Ok(UpsertOutcome::Replaced);
        }
        state.goals.push(Goal::new(name, target, current));
        Ok(UpsertOutcome::Inserted)
    }

    /// Removes the goal with that name, returning the removed record.
    pub fn remove(state: &mut AppState, name: &str) -> Result<Goal> {
        state
            .remove_goal(name)
            .ok_or_else(|| FinanceError::GoalNotFound(name.to_string()))
    }

    pub fn list(state: &AppState) -> &[Goal] {
        &state.goals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::User;

    fn base_state() -> AppState {
        AppState::new(User::new("Jane", "jane@example.com"))
    }

    #[test]
    fn upsert_rejects_non_positive_target() {
        let mut state = base_state();
        let err = GoalService::upsert(&mut state, Goal::new("Vacation", 0.0, 0.0))
            .expect_err("zero target");
        assert!(matches!(err, FinanceError::Validation(_)));
        assert!(state.goals.is_empty());
    }

    #[test]
    fn upsert_is_keyed_by_name() {
        let mut state = base_state();
        GoalService::upsert(&mut state, Goal::new("Vacation", 5_000.0, 2_000.0)).unwrap();
        let outcome =
            GoalService::upsert(&mut state, Goal::new("Vacation", 6_000.0, 2_500.0)).unwrap();
        assert_eq!(outcome, UpsertOutcome::Replaced);
        assert_eq!(state.goals.len(), 1);
        assert_eq!(state.goals[0].target, 6_000.0);
    }

    #[test]
    fn remove_missing_name_reports_not_found() {
        let mut state = base_state();
        let err = GoalService::remove(&mut state, "Boat").expect_err("nothing to remove");
        assert!(matches!(err, FinanceError::GoalNotFound(name) if name == "Boat"));
    }
}
