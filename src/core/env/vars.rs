use super::EnvError;
use std::borrow::Cow;
use std::env;
use std::ffi::{OsStr, OsString};

/// The shell's environment table.
///
/// Snapshotted from the process at startup and owned by the shell from then
/// on. Children receive a copy of it at spawn time; nothing here writes back
/// to the process-wide environment. Names and values keep their raw bytes,
/// so non-UTF-8 entries reach children unchanged. Iteration follows
/// insertion order, and overwriting a variable keeps its original position.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    vars: Vec<(OsString, OsString)>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_process() -> Self {
        Self {
            vars: env::vars_os().collect(),
        }
    }

    pub fn set(&mut self, name: &str, value: &str) -> Result<(), EnvError> {
        if name.is_empty() || name.contains(['=', '\0']) {
            return Err(EnvError::InvalidName(name.to_string()));
        }
        if value.contains('\0') {
            return Err(EnvError::InvalidValue(name.to_string()));
        }

        match self.position(name) {
            Some(i) => self.vars[i].1 = OsString::from(value),
            None => self.vars.push((OsString::from(name), OsString::from(value))),
        }
        Ok(())
    }

    /// Looks up a variable; non-UTF-8 bytes are replaced for display.
    pub fn get(&self, name: &str) -> Option<Cow<'_, str>> {
        self.position(name)
            .map(|i| self.vars[i].1.to_string_lossy())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.vars.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.vars.iter().position(|(key, _)| key == name)
    }

    /// Substitutes a `$NAME` token with the variable's value.
    ///
    /// Tokens without a leading `$` come back unchanged. `None` means the
    /// token referenced an unset variable and should be dropped.
    pub fn expand_token<'a>(&'a self, token: &'a str) -> Option<Cow<'a, str>> {
        match token.strip_prefix('$') {
            Some(name) => self.get(name),
            None => Some(Cow::Borrowed(token)),
        }
    }
}
