//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();
    if let Err(err) = spotcast_cli::run() {
        eprintln!("spotcast: {:?}", eyre::Report::new(err));
        std::process::exit(1);
    }
}

/// Route `log` records to stderr, honouring `RUST_LOG` and defaulting to `warn`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
