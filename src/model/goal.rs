use serde::{Deserialize, Serialize};

/// A savings goal, keyed by name. `target` is strictly positive, enforced at
/// creation, so progress is always well defined.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub name: String,
    pub target: f64,
    pub current: f64,
}

impl Goal {
    pub fn new(name: impl Into<String>, target: f64, current: f64) -> Self {
        Self {
            name: name.into(),
            target,
            current,
        }
    }

    /// Completion percentage (`current / target * 100`).
    pub fn progress_percent(&self) -> f64 {
        self.current / self.target * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_current_over_target() {
        let goal = Goal::new("Emergency Fund", 10_000.0, 5_000.0);
        assert_eq!(goal.progress_percent(), 50.0);
    }
}
