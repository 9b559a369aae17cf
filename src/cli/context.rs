//! Shell state shared by every command handler.

use dialoguer::{theme::ColorfulTheme, Confirm};
use strsim::levenshtein;
use thiserror::Error;

use crate::bootstrap;
use crate::cli::commands;
use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::config::{Config, ConfigManager, Theme};
use crate::errors::FinanceError;
use crate::model::AppState;

/// Suggestions further than this edit distance are noise.
const SUGGESTION_THRESHOLD: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Failure of a single command; the shell reports it and keeps running.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Core(#[from] FinanceError),
    #[error("{0}")]
    Usage(String),
    #[error("Prompt failed: {0}")]
    Prompt(String),
    #[error("exit requested")]
    ExitRequested,
}

pub type CommandResult = Result<(), CommandError>;

/// Failure that tears down the whole shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] FinanceError),
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct ShellContext {
    pub state: AppState,
    pub config: Config,
    config_manager: ConfigManager,
    pub mode: CliMode,
    pub(crate) registry: CommandRegistry,
}

impl ShellContext {
    /// Seeds the session with the bootstrap dataset and the persisted
    /// preferences.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;
        Ok(Self {
            state: bootstrap::sample_state(),
            config,
            config_manager,
            mode,
            registry: commands::build_registry(),
        })
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        match self.registry.handler(command) {
            Some(handler) => match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            },
            None => {
                self.suggest_command(raw);
                Ok(LoopControl::Continue)
            }
        }
    }

    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub fn suggest_command(&self, raw: &str) {
        let lowered = raw.to_lowercase();
        let closest = self
            .registry
            .names()
            .map(|name| (levenshtein(&lowered, name), name))
            .min();
        match closest {
            Some((distance, name)) if distance <= SUGGESTION_THRESHOLD => {
                output::warning(format!("Unknown command `{}`. Did you mean `{}`?", raw, name));
            }
            _ => {
                output::warning(format!(
                    "Unknown command `{}`. Type `help` for the command list.",
                    raw
                ));
            }
        }
    }

    /// Asks a yes/no question. Script mode answers yes so piped scripts run
    /// unattended.
    pub fn confirm(&self, prompt: &str, default: bool) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|err| CommandError::Prompt(err.to_string()))
    }

    pub fn set_theme(&mut self, theme: Theme) -> CommandResult {
        self.config.theme = theme;
        self.persist_config()
    }

    pub fn persist_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    /// Atomic swap of the state root, used by import.
    pub fn replace_state(&mut self, state: AppState) {
        self.state = state;
    }
}
