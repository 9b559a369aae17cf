use serde::{Deserialize, Serialize};

/// A held asset position, keyed by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Investment {
    pub name: String,
    pub value: f64,
    pub growth_percent: f64,
}

impl Investment {
    pub fn new(name: impl Into<String>, value: f64, growth_percent: f64) -> Self {
        Self {
            name: name.into(),
            value,
            growth_percent,
        }
    }
}
