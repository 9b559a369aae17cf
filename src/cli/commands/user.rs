use crate::cli::commands::usage;
use crate::cli::context::{CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::core::services::UserService;

const USAGE: &str = "user [<name> <email>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "user",
        "Show or update the account holder",
        USAGE,
        cmd_user,
    )]
}

fn cmd_user(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            output::info(format!(
                "{} <{}>",
                context.state.user.name, context.state.user.email
            ));
            Ok(())
        }
        &[name, email] => {
            UserService::update(&mut context.state, name, email)?;
            output::success("Settings updated.");
            Ok(())
        }
        _ => Err(usage(USAGE)),
    }
}
