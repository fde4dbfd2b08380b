use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::process::ProcessError;
use crate::shell::render_prompt;

/// Keeps Ctrl-C from ending the shell.
///
/// The handler runs on ctrlc's own thread rather than in signal context,
/// so it may print. It leaves a pending flag that the main loop drains
/// once its blocking read or wait returns.
#[derive(Clone, Debug)]
pub struct Interceptor {
    pending: Arc<AtomicBool>,
}

impl Interceptor {
    /// Installs the SIGINT handler. Only one may exist per process.
    pub fn install(quiet: bool) -> Result<Self, ProcessError> {
        let pending = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&pending);

        ctrlc::set_handler(move || {
            flag.store(true, Ordering::SeqCst);
            if !quiet {
                announce();
            }
        })?;

        Ok(Interceptor { pending })
    }

    /// Returns whether an interrupt arrived since the last call.
    pub fn take_pending(&self) -> bool {
        self.pending.swap(false, Ordering::SeqCst)
    }
}

fn announce() {
    let mut stdout = std::io::stdout().lock();
    let _ = stdout.write_all(interrupt_notice().as_bytes());
    let _ = stdout.flush();
}

/// The text shown on Ctrl-C: a notice line followed by a fresh prompt.
pub(crate) fn interrupt_notice() -> String {
    format!(
        "\nCaught signal {}. Type 'exit' to quit.\n{}",
        libc::SIGINT,
        render_prompt().unwrap_or_else(|_| "> ".to_string())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CWD_LOCK;

    #[test]
    fn test_interrupt_notice_text() -> Result<(), std::io::Error> {
        let _guard = CWD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let expected = format!("\nCaught signal 2. Type 'exit' to quit.\n{}", render_prompt()?);
        assert_eq!(interrupt_notice(), expected);
        Ok(())
    }
}
