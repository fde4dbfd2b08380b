pub mod error;
pub mod flags;
pub mod highlight;
pub mod logging;
pub mod shell;

pub mod core;
pub mod input;
pub mod path;
pub mod process;

/// Serializes tests that change the process working directory.
#[cfg(test)]
pub(crate) static CWD_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
