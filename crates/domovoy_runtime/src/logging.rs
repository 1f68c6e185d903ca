//! Diagnostic logging setup.

use std::sync::Once;

use domovoy_foundation::{Error, Result};
use tracing_subscriber::EnvFilter;

static TRACING_INIT: Once = Once::new();

/// Installs the global `tracing` subscriber, writing to stderr.
///
/// An explicit `level` (any `EnvFilter` directive, e.g. `debug` or
/// `domovoy_intent=trace`) takes precedence over `RUST_LOG`. With neither,
/// no subscriber is installed. Later calls are no-ops.
///
/// # Errors
///
/// Returns a `ConfigError` if `level` is not a valid filter directive.
pub fn init_tracing(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(directive) => EnvFilter::try_new(directive)
            .map_err(|e| Error::config(format!("invalid log level '{directive}': {e}")))?,
        None => match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => return Ok(()),
        },
    };

    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*};

        // Another subscriber may already be installed by an embedding host.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .try_init();
    });
    Ok(())
}
