//! Logging configuration.
//!
//! The interactive menu talks to the user directly, so tracing output mostly
//! matters for the web server. The level can be raised with `--verbose` or
//! overridden entirely via `RUST_LOG`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the logging system. Safe to call more than once; only the
/// first call installs the subscriber.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "rolodex=debug"
    } else {
        "rolodex=info"
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_target(true)
            .with_file(false)
            .with_line_number(false),
    );

    let _ = subscriber.try_init();
}
