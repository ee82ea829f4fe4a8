use std::{io, process::ExitCode};

use animate::app::{self, Native};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    let status = app::run(&mut Native, std::env::args().skip(1), &mut io::stdout());
    ExitCode::from(status)
}

fn init_tracing() {
    // RUST_LOG=animate=debug,plinth=trace
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .compact()
        .try_init();
}
