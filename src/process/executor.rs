use std::os::unix::process::{CommandExt, ExitStatusExt};
use std::process::{Command, ExitStatus, Stdio};

use tracing::{debug, warn};

use super::ProcessError;
use crate::core::env::Environment;

/// Seconds a foreground child may run before `SIGALRM` ends it.
pub const FOREGROUND_TIMEOUT_SECS: u32 = 10;

#[derive(Debug)]
pub enum Launch {
    Foreground(ExitStatus),
    Background(u32),
}

impl Launch {
    /// True when a foreground child was ended by the watchdog alarm.
    pub fn timed_out(&self) -> bool {
        matches!(self, Launch::Foreground(status) if status.signal() == Some(libc::SIGALRM))
    }
}

/// Spawns external programs with the shell's environment.
///
/// Foreground children get an `alarm(2)` armed between fork and exec, so
/// the timer belongs to the child and survives the exec. Background
/// children are never waited on; they stay unreaped after exiting.
#[derive(Clone, Debug)]
pub struct Launcher {
    timeout_secs: u32,
}

impl Default for Launcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Launcher {
    pub fn new() -> Self {
        Launcher {
            timeout_secs: FOREGROUND_TIMEOUT_SECS,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_timeout(timeout_secs: u32) -> Self {
        Launcher { timeout_secs }
    }

    pub fn timeout_secs(&self) -> u32 {
        self.timeout_secs
    }

    pub fn launch(
        &self,
        args: &[String],
        background: bool,
        env: &Environment,
    ) -> Result<Launch, ProcessError> {
        let (program, rest) = args.split_first().ok_or(ProcessError::EmptyCommand)?;

        let mut command = Command::new(program);
        command
            .args(rest)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .env_clear()
            .envs(env.iter());

        if !background {
            arm_watchdog(&mut command, self.timeout_secs);
        }

        let mut child = command
            .spawn()
            .map_err(|e| ProcessError::spawn(program, e))?;
        let pid = child.id();

        if background {
            debug!(pid, program = %program, "started background process");
            return Ok(Launch::Background(pid));
        }

        debug!(pid, program = %program, timeout_secs = self.timeout_secs, "waiting for foreground process");
        let status = child
            .wait()
            .map_err(|source| ProcessError::Wait { pid, source })?;

        let launch = Launch::Foreground(status);
        if launch.timed_out() {
            warn!(pid, program = %program, "foreground process killed by watchdog");
        }
        Ok(launch)
    }
}

fn arm_watchdog(command: &mut Command, secs: u32) {
    // SAFETY: alarm(2) is async-signal-safe and touches no parent state.
    unsafe {
        command.pre_exec(move || {
            libc::alarm(secs);
            Ok(())
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_foreground_success_and_failure() -> Result<(), ProcessError> {
        let launcher = Launcher::new();
        let env = Environment::from_process();

        match launcher.launch(&args(&["true"]), false, &env)? {
            Launch::Foreground(status) => assert!(status.success()),
            other => panic!("unexpected {:?}", other),
        }
        match launcher.launch(&args(&["sh", "-c", "exit 3"]), false, &env)? {
            Launch::Foreground(status) => assert_eq!(status.code(), Some(3)),
            other => panic!("unexpected {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_child_sees_shell_environment_only() -> Result<(), Box<dyn std::error::Error>> {
        let launcher = Launcher::new();
        let mut env = Environment::from_process();
        env.set("TERN_CHILD_VAR", "from-shell")?;

        let script = r#"[ "$TERN_CHILD_VAR" = from-shell ]"#;
        match launcher.launch(&args(&["sh", "-c", script]), false, &env)? {
            Launch::Foreground(status) => assert!(status.success()),
            other => panic!("unexpected {:?}", other),
        }
        assert!(std::env::var_os("TERN_CHILD_VAR").is_none());
        Ok(())
    }

    #[test]
    fn test_child_receives_non_utf8_value_unchanged() -> Result<(), ProcessError> {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        std::env::set_var("TERN_RAW_BYTES", OsString::from_vec(b"a\xffb".to_vec()));
        let env = Environment::from_process();

        let script = r#"[ "$(printf %s "$TERN_RAW_BYTES" | od -An -tx1 | tr -d ' \n')" = 61ff62 ]"#;
        match Launcher::new().launch(&args(&["sh", "-c", script]), false, &env)? {
            Launch::Foreground(status) => assert!(status.success(), "child saw altered bytes"),
            other => panic!("unexpected {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_background_returns_immediately() -> Result<(), ProcessError> {
        let launcher = Launcher::new();
        let env = Environment::from_process();

        let start = Instant::now();
        let launch = launcher.launch(&args(&["sleep", "5"]), true, &env)?;
        assert!(start.elapsed() < Duration::from_secs(2));
        match launch {
            Launch::Background(pid) => assert!(pid > 0),
            other => panic!("unexpected {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_watchdog_kills_slow_foreground_child() -> Result<(), ProcessError> {
        let launcher = Launcher::with_timeout(1);
        let env = Environment::from_process();

        let start = Instant::now();
        let launch = launcher.launch(&args(&["sleep", "30"]), false, &env)?;
        assert!(launch.timed_out());
        assert!(start.elapsed() < Duration::from_secs(10));
        Ok(())
    }

    #[test]
    fn test_missing_program() {
        let launcher = Launcher::new();
        let env = Environment::from_process();

        let result = launcher.launch(&args(&["tern-no-such-program-xyz"]), false, &env);
        match result {
            Err(e @ ProcessError::CommandNotFound { .. }) => {
                assert!(e.to_string().starts_with("command not found: tern-no-such-program-xyz"))
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_empty_command() {
        let launcher = Launcher::new();
        let result = launcher.launch(&[], false, &Environment::new());
        assert!(matches!(result, Err(ProcessError::EmptyCommand)));
    }

    #[test]
    fn test_default_timeout() {
        assert_eq!(Launcher::default().timeout_secs(), 10);
    }
}
