//! Structured logging for the binary. Level is overridden by `RUST_LOG`
//! unless `--verbose` is given.

use tracing_subscriber::EnvFilter;

/// Directive used when neither `RUST_LOG` nor `--verbose` says otherwise.
fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Install a stderr fmt subscriber. Calling it twice is harmless.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(default_directive(true))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(false)))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
