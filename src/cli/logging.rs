use std::io::{self, IsTerminal};

use tracing::Level;

/// Install the stderr diagnostics subscriber.
///
/// Defaults to `warn` so per-file failures are visible; `-v` raises it to
/// `debug` and `-q` lowers it to `error`.
pub fn init(verbose: bool, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    // Ignore the error if a subscriber is already installed (e.g. in tests).
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
