mod budget;
mod data;
mod goal;
mod investment;
mod report;
mod summary;
mod system;
mod transaction;
mod user;

use crate::cli::context::CommandError;
use crate::cli::registry::CommandRegistry;

pub(crate) fn build_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    let definitions = [
        summary::definitions(),
        transaction::definitions(),
        budget::definitions(),
        investment::definitions(),
        goal::definitions(),
        user::definitions(),
        report::definitions(),
        data::definitions(),
        system::definitions(),
    ];
    for entry in definitions.into_iter().flatten() {
        registry.register(entry);
    }
    registry
}

pub(crate) fn usage(line: &str) -> CommandError {
    CommandError::Usage(format!("Usage: {}", line))
}

pub(crate) fn parse_amount(field: &str, raw: &str) -> Result<f64, CommandError> {
    raw.parse::<f64>()
        .map_err(|_| CommandError::Usage(format!("{} must be a number, got `{}`", field, raw)))
}

pub(crate) fn parse_id(raw: &str) -> Result<u64, CommandError> {
    raw.parse::<u64>()
        .map_err(|_| CommandError::Usage(format!("transaction id must be an integer, got `{}`", raw)))
}
