use super::{Command, CommandError, Outcome};
use crate::core::env::Environment;

#[derive(Clone)]
pub struct SetEnvCommand;

impl Default for SetEnvCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl SetEnvCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for SetEnvCommand {
    fn execute(&self, args: &[String], env: &mut Environment) -> Result<Outcome, CommandError> {
        let (Some(name), Some(value)) = (args.first(), args.get(1)) else {
            return Err(CommandError::MissingArgument("setenv: missing arguments"));
        };

        env.set(name, value)
            .map_err(|e| CommandError::InvalidArguments(format!("setenv: {}", e)))?;
        Ok(Outcome::Silent)
    }
}
