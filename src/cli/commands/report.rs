use crate::cli::commands::usage;
use crate::cli::context::{CommandResult, ShellContext};
use crate::cli::output::{self, format_currency};
use crate::cli::registry::CommandEntry;
use crate::core::services::{parse_date, DateWindow, ReportService};

const USAGE: &str = "report <income-expense|categories|net-worth> [<start> <end>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "report",
        "Generate a report over a date range or the portfolio",
        USAGE,
        cmd_report,
    )]
}

fn cmd_report(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().copied() {
        Some("income-expense") => income_expense(context, &args[1..]),
        Some("categories") => category_breakdown(context, &args[1..]),
        Some("net-worth") => net_worth(context),
        _ => Err(usage(USAGE)),
    }
}

fn parse_window(args: &[&str]) -> Result<DateWindow, crate::cli::context::CommandError> {
    let &[start, end] = args else {
        return Err(usage(USAGE));
    };
    Ok(DateWindow::new(parse_date(start)?, parse_date(end)?)?)
}

fn income_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let window = parse_window(args)?;
    let currency = &context.config.currency;
    let report = ReportService::income_expense(&context.state, window);
    output::section(format!("Income vs Expenses ({} to {})", window.start, window.end));
    output::info(format!("  Income     : {}", format_currency(report.income, currency)));
    output::info(format!("  Expenses   : {}", format_currency(report.expenses, currency)));
    output::info(format!(
        "  Net Income : {}",
        format_currency(report.net_income, currency)
    ));
    Ok(())
}

fn category_breakdown(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let window = parse_window(args)?;
    let currency = &context.config.currency;
    let breakdown = ReportService::category_breakdown(&context.state, window);
    output::section(format!(
        "Expense Breakdown ({} to {})",
        window.start, window.end
    ));
    if breakdown.is_empty() {
        output::info("No expenses in this range.");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = breakdown
        .iter()
        .map(|(category, total)| vec![category.clone(), format_currency(*total, currency)])
        .collect();
    output::print_table(&["Category", "Spent"], &rows);
    Ok(())
}

fn net_worth(context: &mut ShellContext) -> CommandResult {
    let currency = &context.config.currency;
    let report = ReportService::net_worth(&context.state);
    output::section("Net Worth");
    output::info(format!("  Assets      : {}", format_currency(report.assets, currency)));
    output::info(format!(
        "  Liabilities : {}",
        format_currency(report.liabilities, currency)
    ));
    output::info(format!(
        "  Net Worth   : {}",
        format_currency(report.net_worth, currency)
    ));
    Ok(())
}
