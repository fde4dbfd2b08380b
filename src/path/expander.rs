use crate::error::ShellError;
use std::path::{Path, PathBuf};

/// Expands a leading `~` to the home directory.
///
/// The home directory comes from the explicit override when one is set,
/// and from the operating system otherwise.
#[derive(Clone, Debug, Default)]
pub struct PathExpander {
    home: Option<PathBuf>,
}

impl PathExpander {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_home(home: Option<&str>) -> Self {
        Self {
            home: home.filter(|h| !h.is_empty()).map(PathBuf::from),
        }
    }

    pub fn expand(&self, path: &str) -> Result<PathBuf, ShellError> {
        if path.starts_with('~') {
            self.expand_tilde(path)
        } else {
            Ok(Path::new(path).to_path_buf())
        }
    }

    fn expand_tilde(&self, path: &str) -> Result<PathBuf, ShellError> {
        if path.len() == 1 {
            // Just "~"
            self.get_home_dir()
        } else {
            let without_tilde = &path[1..];
            if let Some(stripped) = without_tilde.strip_prefix('/') {
                // "~/path"
                let mut home_path = self.get_home_dir()?;
                for part in stripped.split('/') {
                    if !part.is_empty() {
                        home_path.push(part);
                    }
                }
                Ok(home_path)
            } else {
                // "~username/path" is taken literally
                Ok(Path::new(path).to_path_buf())
            }
        }
    }

    pub fn get_home_dir(&self) -> Result<PathBuf, ShellError> {
        self.home
            .clone()
            .or_else(dirs::home_dir)
            .ok_or(ShellError::HomeDirNotFound)
    }
}
