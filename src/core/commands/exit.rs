use super::{Command, CommandError, Outcome};
use crate::core::env::Environment;

#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, _args: &[String], _env: &mut Environment) -> Result<Outcome, CommandError> {
        Ok(Outcome::Exit)
    }
}
