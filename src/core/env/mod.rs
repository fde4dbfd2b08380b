mod vars;

pub use vars::Environment;

#[derive(Debug, PartialEq, Eq)]
pub enum EnvError {
    InvalidName(String),
    InvalidValue(String),
}

impl std::fmt::Display for EnvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvError::InvalidName(name) => write!(f, "invalid variable name: {:?}", name),
            EnvError::InvalidValue(name) => write!(f, "value for {} contains a NUL byte", name),
        }
    }
}

impl std::error::Error for EnvError {}
