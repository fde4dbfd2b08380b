use super::{Command, CommandError, Outcome};
use crate::core::env::Environment;

#[derive(Clone)]
pub struct EnvCommand;

impl Default for EnvCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for EnvCommand {
    fn execute(&self, _args: &[String], env: &mut Environment) -> Result<Outcome, CommandError> {
        let listing: String = env
            .iter()
            .map(|(name, value)| {
                format!("{}={}\n", name.to_string_lossy(), value.to_string_lossy())
            })
            .collect();
        Ok(Outcome::Output(listing))
    }
}
