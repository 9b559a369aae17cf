#![doc(test(attr(deny(warnings))))]

//! Finance Core tracks transactions, budgets, investments, and savings goals
//! for a single user session, and derives dashboard aggregates from them.

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod model;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
