use std::collections::BTreeMap;

mod cd;
mod echo;
mod env;
mod exit;
mod pwd;
mod setenv;

pub use cd::CdCommand;
pub use echo::EchoCommand;
pub use env::EnvCommand;
pub use exit::ExitCommand;
pub use pwd::PwdCommand;
pub use setenv::SetEnvCommand;

use crate::core::env::Environment;

#[derive(Debug)]
pub enum CommandError {
    MissingArgument(&'static str),
    InvalidArguments(String),
    Io {
        context: &'static str,
        source: std::io::Error,
    },
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::MissingArgument(msg) => write!(f, "{}", msg),
            CommandError::InvalidArguments(msg) => write!(f, "{}", msg),
            CommandError::Io { context, source } => write!(f, "{}: {}", context, source),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// What a built-in asks the main loop to do next.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Silent,
    Output(String),
    Exit,
}

pub trait Command {
    fn execute(&self, args: &[String], env: &mut Environment) -> Result<Outcome, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Pwd(PwdCommand),
    Echo(EchoCommand),
    Env(EnvCommand),
    SetEnv(SetEnvCommand),
    Exit(ExitCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[String], env: &mut Environment) -> Result<Outcome, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args, env),
            CommandType::Pwd(cmd) => cmd.execute(args, env),
            CommandType::Echo(cmd) => cmd.execute(args, env),
            CommandType::Env(cmd) => cmd.execute(args, env),
            CommandType::SetEnv(cmd) => cmd.execute(args, env),
            CommandType::Exit(cmd) => cmd.execute(args, env),
        }
    }
}

/// Name-to-handler table for the in-process commands.
#[derive(Clone)]
pub struct BuiltinRegistry {
    commands: BTreeMap<String, CommandType>,
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            commands: BTreeMap::new(),
        };

        registry.register("exit", CommandType::Exit(ExitCommand::new()));
        registry.register("cd", CommandType::Cd(CdCommand::new()));
        registry.register("pwd", CommandType::Pwd(PwdCommand::new()));
        registry.register("echo", CommandType::Echo(EchoCommand::new()));
        registry.register("env", CommandType::Env(EnvCommand::new()));
        registry.register("setenv", CommandType::SetEnv(SetEnvCommand::new()));

        registry
    }

    fn register(&mut self, name: &str, command: CommandType) {
        self.commands.insert(name.to_string(), command);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|cmd| cmd as &dyn Command)
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }
}
