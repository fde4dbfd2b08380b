use std::io::Write;

use tracing::debug;

use super::LoopControl;
use crate::core::commands::Outcome;
use crate::error::ShellError;
use crate::input::{strip_background, tokenize};
use crate::process::Launch;

pub(crate) trait CommandHandler {
    fn execute_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<LoopControl, ShellError>;
}

impl CommandHandler for super::Shell {
    fn execute_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<LoopControl, ShellError> {
        let mut args = tokenize(line);
        let Some(name) = args.first() else {
            return Ok(LoopControl::Continue);
        };

        // Built-ins win before `&` is looked at, so `echo a &` prints the `&`.
        if let Some(command) = self.builtins.get(name) {
            debug!(builtin = %name, argc = args.len() - 1, "running built-in");
            match command.execute(&args[1..], &mut self.env)? {
                Outcome::Exit => return Ok(LoopControl::Exit),
                Outcome::Output(text) => {
                    out.write_all(text.as_bytes())?;
                    out.flush()?;
                }
                Outcome::Silent => {}
            }
            return Ok(LoopControl::Continue);
        }

        let background = strip_background(&mut args);
        if args.is_empty() {
            return Ok(LoopControl::Continue);
        }

        out.flush()?;
        let launch = self.launcher.launch(&args, background, &self.env)?;
        let quiet = self.flags.is_set("quiet");

        match &launch {
            Launch::Background(pid) => {
                writeln!(out, "[Running in background] PID: {}", pid)?;
            }
            Launch::Foreground(status) => {
                self.observe_interrupt("waiting for foreground process");
                if !quiet && launch.timed_out() {
                    writeln!(out, "Process timed out after {}s", self.launcher.timeout_secs())?;
                } else if !quiet && !status.success() {
                    writeln!(out, "Process exited with status: {}", status)?;
                }
            }
        }
        out.flush()?;

        Ok(LoopControl::Continue)
    }
}
