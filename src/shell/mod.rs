use std::env;
use std::io::{self, BufRead, Write};

use tracing::{debug, error};

mod executor;

use crate::{
    core::{commands::BuiltinRegistry, env::Environment},
    error::ShellError,
    flags::Flags,
    highlight::SyntaxHighlighter,
    input::{LineReader, ReadOutcome},
    process::{Interceptor, Launcher},
};

pub(crate) use executor::CommandHandler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub struct Shell {
    pub(crate) flags: Flags,
    pub(crate) env: Environment,
    pub(crate) builtins: BuiltinRegistry,
    pub(crate) launcher: Launcher,
    pub(crate) highlighter: SyntaxHighlighter,
    pub(crate) interceptor: Option<Interceptor>,
}

/// The prompt text: the working directory followed by ` > `.
pub fn render_prompt() -> io::Result<String> {
    Ok(format!("{} > ", env::current_dir()?.display()))
}

impl Shell {
    pub fn new(flags: Flags) -> Self {
        Shell {
            flags,
            env: Environment::from_process(),
            builtins: BuiltinRegistry::new(),
            launcher: Launcher::new(),
            highlighter: SyntaxHighlighter::new(),
            interceptor: None,
        }
    }

    pub fn with_environment(mut self, env: Environment) -> Self {
        self.env = env;
        self
    }

    pub fn with_interceptor(mut self, interceptor: Interceptor) -> Self {
        self.interceptor = Some(interceptor);
        self
    }

    #[cfg(test)]
    pub(crate) fn with_launcher(mut self, launcher: Launcher) -> Self {
        self.launcher = launcher;
        self
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        let stdin = io::stdin();
        // Stdout is left unlocked so the interrupt handler can print while
        // the loop is blocked on input.
        self.run_with(stdin.lock(), io::stdout())
    }

    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<(), ShellError> {
        let mut reader = LineReader::new(input);

        loop {
            self.show_prompt(&mut out)?;

            let line = match reader.read_line() {
                Ok(ReadOutcome::Line(line)) => line,
                Ok(ReadOutcome::Eof) => break,
                Err(e) => {
                    error!(error = %e, "failed to read input, treating as end of input");
                    break;
                }
            };
            self.observe_interrupt("reading input");

            match self.execute_line(&line, &mut out) {
                Ok(LoopControl::Exit) => {
                    out.flush()?;
                    return Ok(());
                }
                Ok(LoopControl::Continue) => {}
                Err(e) => self.report(&e),
            }
        }

        writeln!(out)?;
        out.flush()?;
        Ok(())
    }

    fn show_prompt<W: Write>(&self, out: &mut W) -> Result<(), ShellError> {
        match render_prompt() {
            Ok(prompt) => write!(out, "{}", prompt)?,
            Err(e) => {
                eprintln!("{}", self.highlighter.highlight_error(&format!("getcwd() error: {}", e)));
                write!(out, "> ")?;
            }
        }
        out.flush()?;
        Ok(())
    }

    pub(crate) fn observe_interrupt(&self, during: &str) {
        if let Some(interceptor) = &self.interceptor {
            if interceptor.take_pending() {
                debug!(during, "interrupt received");
            }
        }
    }

    pub(crate) fn report(&self, err: &ShellError) {
        eprintln!("{}", self.highlighter.highlight_error(&err.to_string()));
    }
}
