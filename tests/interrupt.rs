use std::thread;
use std::time::{Duration, Instant};

use signal_hook::consts::SIGINT;
use signal_hook::low_level::raise;
use tern::process::{Interceptor, ProcessError};

#[test]
fn interrupt_sets_pending_and_process_survives() -> Result<(), Box<dyn std::error::Error>> {
    let interceptor = Interceptor::install(true)?;
    assert!(!interceptor.take_pending());

    raise(SIGINT)?;

    let deadline = Instant::now() + Duration::from_secs(5);
    let mut seen = false;
    while Instant::now() < deadline {
        if interceptor.take_pending() {
            seen = true;
            break;
        }
        thread::sleep(Duration::from_millis(10));
    }
    assert!(seen, "interrupt was not observed");
    assert!(!interceptor.take_pending());

    // A second handler cannot be installed in the same process.
    assert!(matches!(
        Interceptor::install(true),
        Err(ProcessError::SignalError(_))
    ));
    Ok(())
}
