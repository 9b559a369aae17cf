use crate::cli::commands::{parse_amount, usage};
use crate::cli::context::{CommandResult, ShellContext};
use crate::cli::output::{self, format_currency};
use crate::cli::registry::CommandEntry;
use crate::core::services::{GoalService, UpsertOutcome};
use crate::model::Goal;

const USAGE: &str = "goal <set|list|rm> [args]";
const SET_USAGE: &str = "goal set <name> <target> <current>";
const RM_USAGE: &str = "goal rm <name>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "goal",
        "Track savings goals and their progress",
        USAGE,
        cmd_goal,
    )]
}

fn cmd_goal(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().copied() {
        None | Some("list") => goal_list(context),
        Some("set") => goal_set(context, &args[1..]),
        Some("rm") => goal_rm(context, &args[1..]),
        Some(_) => Err(usage(USAGE)),
    }
}

fn goal_set(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let &[name, raw_target, raw_current] = args else {
        return Err(usage(SET_USAGE));
    };
    let target = parse_amount("target", raw_target)?;
    let current = parse_amount("current", raw_current)?;
    let outcome = GoalService::upsert(&mut context.state, Goal::new(name, target, current))?;
    let verb = match outcome {
        UpsertOutcome::Inserted => "added",
        UpsertOutcome::Replaced => "updated",
    };
    output::success(format!("Goal `{}` {}.", name, verb));
    Ok(())
}

fn goal_list(context: &mut ShellContext) -> CommandResult {
    let currency = &context.config.currency;
    let goals = GoalService::list(&context.state);
    if goals.is_empty() {
        output::info("No goals recorded yet.");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = goals
        .iter()
        .map(|goal| {
            vec![
                goal.name.clone(),
                format_currency(goal.target, currency),
                format_currency(goal.current, currency),
                format!("{:.2}%", goal.progress_percent()),
            ]
        })
        .collect();
    output::print_table(&["Name", "Target", "Current", "Progress"], &rows);
    Ok(())
}

fn goal_rm(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let &[name] = args else {
        return Err(usage(RM_USAGE));
    };
    if !context.confirm(&format!("Delete goal `{}`?", name), false)? {
        output::info("Aborted.");
        return Ok(());
    }
    GoalService::remove(&mut context.state, name)?;
    output::success(format!("Goal `{}` deleted.", name));
    Ok(())
}
