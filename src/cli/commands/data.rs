use std::path::PathBuf;

use crate::cli::commands::usage;
use crate::cli::context::{CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::config::Theme;
use crate::storage;

const EXPORT_USAGE: &str = "export [path]";
const IMPORT_USAGE: &str = "import <path>";
const THEME_USAGE: &str = "theme [light|dark]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "export",
            "Write all data to a snapshot file",
            EXPORT_USAGE,
            cmd_export,
        ),
        CommandEntry::new(
            "import",
            "Replace all data with a snapshot file",
            IMPORT_USAGE,
            cmd_import,
        ),
        CommandEntry::new(
            "theme",
            "Show or change the display theme",
            THEME_USAGE,
            cmd_theme,
        ),
    ]
}

fn cmd_export(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let path = match args {
        [] => PathBuf::from(storage::DEFAULT_EXPORT_FILE_NAME),
        &[path] => PathBuf::from(path),
        _ => return Err(usage(EXPORT_USAGE)),
    };
    storage::export_to_path(&path, &context.state, context.config.theme)?;
    output::success(format!("Data exported to `{}`.", path.display()));
    Ok(())
}

fn cmd_import(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let &[raw_path] = args else {
        return Err(usage(IMPORT_USAGE));
    };
    let path = PathBuf::from(raw_path);
    if !context.confirm(
        &format!("Replace ALL current data with `{}`?", path.display()),
        false,
    )? {
        output::info("Aborted.");
        return Ok(());
    }
    // Parse and validate fully before touching the live state.
    let (state, theme) = storage::import_from_path(&path)?;
    context.replace_state(state);
    context.set_theme(theme)?;
    output::success("Data imported.");
    Ok(())
}

fn cmd_theme(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            output::info(format!("Theme: {}", context.config.theme));
            Ok(())
        }
        &[value @ ("light" | "dark")] => {
            context.set_theme(Theme::from_str(value))?;
            output::success(format!("Theme set to {}.", context.config.theme));
            Ok(())
        }
        _ => Err(usage(THEME_USAGE)),
    }
}
