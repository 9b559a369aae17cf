use crate::cli::commands::{parse_amount, usage};
use crate::cli::context::{CommandResult, ShellContext};
use crate::cli::output::{self, format_currency};
use crate::cli::registry::CommandEntry;
use crate::core::services::{InvestmentService, UpsertOutcome};
use crate::model::Investment;

const USAGE: &str = "invest <set|list|rm> [args]";
const SET_USAGE: &str = "invest set <name> <value> <growth>";
const RM_USAGE: &str = "invest rm <name>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "invest",
        "Track investment positions and portfolio value",
        USAGE,
        cmd_invest,
    )]
}

fn cmd_invest(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().copied() {
        None | Some("list") => invest_list(context),
        Some("set") => invest_set(context, &args[1..]),
        Some("rm") => invest_rm(context, &args[1..]),
        Some(_) => Err(usage(USAGE)),
    }
}

fn invest_set(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let &[name, raw_value, raw_growth] = args else {
        return Err(usage(SET_USAGE));
    };
    let value = parse_amount("value", raw_value)?;
    let growth = parse_amount("growth", raw_growth)?;
    let outcome =
        InvestmentService::upsert(&mut context.state, Investment::new(name, value, growth))?;
    let verb = match outcome {
        UpsertOutcome::Inserted => "added",
        UpsertOutcome::Replaced => "updated",
    };
    output::success(format!("Investment `{}` {}.", name, verb));
    Ok(())
}

fn invest_list(context: &mut ShellContext) -> CommandResult {
    let currency = &context.config.currency;
    let investments = InvestmentService::list(&context.state);
    if investments.is_empty() {
        output::info("No investments recorded yet.");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = investments
        .iter()
        .map(|inv| {
            vec![
                inv.name.clone(),
                format_currency(inv.value, currency),
                format!("{:+.2}%", inv.growth_percent),
            ]
        })
        .collect();
    output::print_table(&["Name", "Value", "Growth"], &rows);
    output::info(format!(
        "Net worth: {}",
        format_currency(InvestmentService::net_worth(&context.state), currency)
    ));
    Ok(())
}

fn invest_rm(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let &[name] = args else {
        return Err(usage(RM_USAGE));
    };
    if !context.confirm(&format!("Delete investment `{}`?", name), false)? {
        output::info("Aborted.");
        return Ok(());
    }
    InvestmentService::remove(&mut context.state, name)?;
    output::success(format!("Investment `{}` deleted.", name));
    Ok(())
}
