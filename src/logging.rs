//! Logger setup for the command-line binaries.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a compact stderr logger.
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown, or debug
/// output from this crate when `verbose` is set. Logs go to stderr.
pub fn init(verbose: bool) {
    let default = if verbose {
        "hilo_bank=debug,warn"
    } else {
        "hilo_bank=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
