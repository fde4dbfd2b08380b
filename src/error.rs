use crate::core::commands::CommandError;
use crate::process::ProcessError;

#[derive(Debug)]
pub enum ShellError {
    Io(std::io::Error),
    HomeDirNotFound,
    Command(CommandError),
    Process(ProcessError),
    FlagError(String),
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<CommandError> for ShellError {
    fn from(err: CommandError) -> Self {
        ShellError::Command(err)
    }
}

impl From<ProcessError> for ShellError {
    fn from(err: ProcessError) -> Self {
        ShellError::Process(err)
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Io(e) => write!(f, "IO error: {}", e),
            ShellError::HomeDirNotFound => write!(f, "Home directory not found"),
            ShellError::Command(e) => write!(f, "{}", e),
            ShellError::Process(e) => write!(f, "{}", e),
            ShellError::FlagError(msg) => write!(f, "Flag error: {}", msg),
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShellError::Io(e) => Some(e),
            ShellError::Command(e) => Some(e),
            ShellError::Process(e) => Some(e),
            _ => None,
        }
    }
}
