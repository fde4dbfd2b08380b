use std::env;
use tern::flags::Flags;
use tern::logging;
use tern::process::Interceptor;
use tern::shell::Shell;

fn main() -> Result<(), tern::error::ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("tern {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    logging::init(flags.is_set("debug"));

    let interceptor = Interceptor::install(flags.is_set("quiet"))?;
    let mut shell = Shell::new(flags).with_interceptor(interceptor);
    shell.run()
}
