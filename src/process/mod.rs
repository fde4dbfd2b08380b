use std::fmt;
use std::io;

pub mod executor;
pub mod signal;

pub use executor::{Launch, Launcher, FOREGROUND_TIMEOUT_SECS};
pub use signal::Interceptor;

#[derive(Debug)]
pub enum ProcessError {
    EmptyCommand,
    CommandNotFound { command: String, source: io::Error },
    Spawn { command: String, source: io::Error },
    Wait { pid: u32, source: io::Error },
    SignalError(String),
}

impl ProcessError {
    pub(crate) fn spawn(command: &str, source: io::Error) -> Self {
        let command = command.to_string();
        if source.kind() == io::ErrorKind::NotFound {
            ProcessError::CommandNotFound { command, source }
        } else {
            ProcessError::Spawn { command, source }
        }
    }
}

impl From<ctrlc::Error> for ProcessError {
    fn from(err: ctrlc::Error) -> Self {
        ProcessError::SignalError(err.to_string())
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::EmptyCommand => write!(f, "no command given"),
            ProcessError::CommandNotFound { command, source } => {
                write!(f, "command not found: {} ({})", command, source)
            }
            ProcessError::Spawn { command, source } => write!(f, "{}: {}", command, source),
            ProcessError::Wait { pid, source } => {
                write!(f, "waiting for process {} failed: {}", pid, source)
            }
            ProcessError::SignalError(msg) => write!(f, "Signal error: {}", msg),
        }
    }
}

impl std::error::Error for ProcessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessError::CommandNotFound { source, .. }
            | ProcessError::Spawn { source, .. }
            | ProcessError::Wait { source, .. } => Some(source),
            _ => None,
        }
    }
}
