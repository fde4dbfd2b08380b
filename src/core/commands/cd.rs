use super::{Command, CommandError, Outcome};
use crate::core::env::Environment;
use crate::path::PathExpander;
use std::env;

#[derive(Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[String], env: &mut Environment) -> Result<Outcome, CommandError> {
        let path_str = args
            .first()
            .ok_or(CommandError::MissingArgument("cd: missing argument"))?;

        let home = env.get("HOME");
        let expanded_path = PathExpander::with_home(home.as_deref())
            .expand(path_str)
            .map_err(|e| CommandError::InvalidArguments(format!("cd: {}", e)))?;

        env::set_current_dir(&expanded_path).map_err(|source| CommandError::Io {
            context: "cd failed",
            source,
        })?;
        Ok(Outcome::Silent)
    }
}
