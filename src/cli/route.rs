//! CLI route: single route table and run context.

use crate::apply::apply_default_config;
use crate::cli::parse::Commands;
use crate::cli::presentation::format_apply_outcome;
use crate::confirm::{Confirmer, YesNoAsker};
use crate::error::PitchError;
use std::path::PathBuf;
use tracing::debug;

/// Runtime context for CLI execution.
pub struct RunContext {
    workspace_root: PathBuf,
}

impl RunContext {
    pub fn new(workspace_root: PathBuf) -> Self {
        Self { workspace_root }
    }

    /// Execute a command, prompting on the attached terminal when needed.
    pub fn execute(&self, command: &Commands) -> Result<String, PitchError> {
        let mut confirmer = Confirmer::for_terminal();
        self.execute_with(command, &mut confirmer)
    }

    /// Execute a command with a caller-supplied asker.
    pub fn execute_with(
        &self,
        command: &Commands,
        asker: &mut dyn YesNoAsker,
    ) -> Result<String, PitchError> {
        debug!(?command, workspace = %self.workspace_root.display(), "Dispatching command");
        match command {
            Commands::Apply { force } => self.handle_apply(*force, asker),
        }
    }

    fn handle_apply(&self, force: bool, asker: &mut dyn YesNoAsker) -> Result<String, PitchError> {
        let outcome = apply_default_config(&self.workspace_root, force, asker)?;
        Ok(format_apply_outcome(&outcome))
    }
}
