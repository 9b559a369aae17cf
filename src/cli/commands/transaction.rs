use crate::cli::commands::{parse_amount, parse_id, usage};
use crate::cli::context::{CommandResult, ShellContext};
use crate::cli::output::{self, format_currency};
use crate::cli::registry::CommandEntry;
use crate::core::services::{parse_date, TransactionInput, TransactionService};

const USAGE: &str = "tx <add|list|edit|rm> [args]";
const ADD_USAGE: &str = "tx add <date> <description> <category> <amount>";
const EDIT_USAGE: &str = "tx edit <id> <date> <description> <category> <amount>";
const RM_USAGE: &str = "tx rm <id>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "tx",
        "Add, list, edit, or delete transactions",
        USAGE,
        cmd_tx,
    )]
}

fn cmd_tx(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().copied() {
        None | Some("list") => tx_list(context),
        Some("add") => tx_add(context, &args[1..]),
        Some("edit") => tx_edit(context, &args[1..]),
        Some("rm") => tx_rm(context, &args[1..]),
        Some(_) => Err(usage(USAGE)),
    }
}

fn parse_input(
    args: &[&str],
    usage_line: &str,
) -> Result<TransactionInput, crate::cli::context::CommandError> {
    let &[date, description, category, amount] = args else {
        return Err(usage(usage_line));
    };
    Ok(TransactionInput {
        date: parse_date(date)?,
        description: description.to_string(),
        category: category.to_string(),
        amount: parse_amount("amount", amount)?,
    })
}

fn tx_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let input = parse_input(args, ADD_USAGE)?;
    let id = TransactionService::add(&mut context.state, input)?;
    output::success(format!("Transaction #{} added.", id));
    Ok(())
}

fn tx_list(context: &mut ShellContext) -> CommandResult {
    let currency = &context.config.currency;
    let transactions = TransactionService::list(&context.state);
    if transactions.is_empty() {
        output::info("No transactions recorded yet.");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = transactions
        .iter()
        .map(|txn| {
            vec![
                txn.id.to_string(),
                txn.date.to_string(),
                txn.description.clone(),
                txn.category.clone(),
                format_currency(txn.amount, currency),
            ]
        })
        .collect();
    output::print_table(&["ID", "Date", "Description", "Category", "Amount"], &rows);
    Ok(())
}

fn tx_edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((&raw_id, rest)) = args.split_first() else {
        return Err(usage(EDIT_USAGE));
    };
    let id = parse_id(raw_id)?;
    let input = parse_input(rest, EDIT_USAGE)?;
    TransactionService::update(&mut context.state, id, input)?;
    output::success(format!("Transaction #{} updated.", id));
    Ok(())
}

fn tx_rm(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let &[raw_id] = args else {
        return Err(usage(RM_USAGE));
    };
    let id = parse_id(raw_id)?;
    if !context.confirm(&format!("Delete transaction #{}?", id), false)? {
        output::info("Aborted.");
        return Ok(());
    }
    let removed = TransactionService::remove(&mut context.state, id)?;
    output::success(format!(
        "Transaction #{} ({}) deleted.",
        id, removed.description
    ));
    Ok(())
}
