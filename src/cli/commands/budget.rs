use crate::cli::commands::{parse_amount, usage};
use crate::cli::context::{CommandResult, ShellContext};
use crate::cli::output::{self, format_currency};
use crate::cli::registry::CommandEntry;
use crate::core::services::{BudgetService, UpsertOutcome};

const USAGE: &str = "budget <set|list> [args]";
const SET_USAGE: &str = "budget set <category> <limit>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "budget",
        "Set category limits and review spending against them",
        USAGE,
        cmd_budget,
    )]
}

fn cmd_budget(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().copied() {
        None | Some("list") => budget_list(context),
        Some("set") => budget_set(context, &args[1..]),
        Some(_) => Err(usage(USAGE)),
    }
}

fn budget_set(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let &[category, raw_limit] = args else {
        return Err(usage(SET_USAGE));
    };
    let limit = parse_amount("limit", raw_limit)?;
    let outcome = BudgetService::upsert(&mut context.state, category, limit)?;
    let verb = match outcome {
        UpsertOutcome::Inserted => "added",
        UpsertOutcome::Replaced => "updated",
    };
    output::success(format!(
        "Budget for `{}` {} ({}).",
        category,
        verb,
        format_currency(limit, &context.config.currency)
    ));
    Ok(())
}

fn budget_list(context: &mut ShellContext) -> CommandResult {
    let currency = &context.config.currency;
    let lines = BudgetService::lines(&context.state);
    if lines.is_empty() {
        output::info("No budgets configured yet.");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = lines
        .iter()
        .map(|line| {
            vec![
                line.category.clone(),
                format_currency(line.limit, currency),
                format_currency(line.spent, currency),
                format_currency(line.remaining, currency),
            ]
        })
        .collect();
    output::print_table(&["Category", "Limit", "Spent", "Remaining"], &rows);
    Ok(())
}
