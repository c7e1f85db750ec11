//! `tracing` initialisation. Always writes to stderr — stdout is reserved
//! for the JSON command array.

use tracing_subscriber::EnvFilter;

pub fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
