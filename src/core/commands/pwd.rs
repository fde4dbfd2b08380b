use super::{Command, CommandError, Outcome};
use crate::core::env::Environment;
use std::env;

#[derive(Clone)]
pub struct PwdCommand;

impl Default for PwdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl PwdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for PwdCommand {
    fn execute(&self, _args: &[String], _env: &mut Environment) -> Result<Outcome, CommandError> {
        let cwd = env::current_dir().map_err(|source| CommandError::Io {
            context: "pwd failed",
            source,
        })?;
        Ok(Outcome::Output(format!("{}\n", cwd.display())))
    }
}
