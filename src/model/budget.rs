use serde::{Deserialize, Serialize};

/// A spending guardrail for a specific transaction category.
/// The category doubles as the record key; at most one budget exists per
/// category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub category: String,
    pub limit: f64,
}

impl Budget {
    pub fn new(category: impl Into<String>, limit: f64) -> Self {
        Self {
            category: category.into(),
            limit,
        }
    }
}
