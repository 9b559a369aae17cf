use crate::cli::context::{CommandResult, ShellContext};
use crate::cli::output::{self, format_currency};
use crate::cli::registry::CommandEntry;
use crate::core::services::SummaryService;

const RECENT_LIMIT: usize = 5;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "overview",
            "Show the financial overview and recent transactions",
            "overview",
            cmd_overview,
        ),
        CommandEntry::new(
            "categories",
            "List the distinct transaction categories",
            "categories",
            cmd_categories,
        ),
    ]
}

fn cmd_overview(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let currency = context.config.currency.clone();
    let overview = SummaryService::overview(&context.state);

    output::section("Financial Overview");
    output::info(format!(
        "  Net Balance : {}",
        format_currency(overview.net_balance, &currency)
    ));
    output::info(format!(
        "  Income      : {}",
        format_currency(overview.total_income, &currency)
    ));
    output::info(format!(
        "  Expenses    : {}",
        format_currency(overview.total_expenses, &currency)
    ));
    output::info(format!(
        "  Savings     : {}",
        format_currency(overview.savings, &currency)
    ));

    let recent = SummaryService::recent_transactions(&context.state, RECENT_LIMIT);
    if !recent.is_empty() {
        output::section("Recent Transactions");
        let rows: Vec<Vec<String>> = recent
            .iter()
            .map(|txn| {
                vec![
                    txn.date.to_string(),
                    txn.description.clone(),
                    txn.category.clone(),
                    format_currency(txn.amount, &currency),
                ]
            })
            .collect();
        output::print_table(&["Date", "Description", "Category", "Amount"], &rows);
    }
    Ok(())
}

fn cmd_categories(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let categories = SummaryService::distinct_categories(&context.state);
    if categories.is_empty() {
        output::info("No categories recorded yet.");
        return Ok(());
    }
    for category in categories {
        output::info(format!("  {}", category));
    }
    Ok(())
}
