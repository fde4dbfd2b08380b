use tracing_subscriber::EnvFilter;

/// Overrides the log filter, e.g. `TERN_LOG=tern=trace`.
pub const LOG_ENV: &str = "TERN_LOG";

/// Installs the stderr log subscriber.
///
/// Standard output carries the prompt and command output, so logs never go
/// there. A second call is a no-op.
pub fn init(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
