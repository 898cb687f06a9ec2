use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::{Result, SyncError};

/// Installs the global tracing subscriber.
///
/// Logs go to stderr so they never mix with anything written to stdout.
/// `RUST_LOG` takes precedence; otherwise `default_directive` is used.
pub fn init(default_directive: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .map_err(|error| SyncError::Logging(error.to_string()))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|error| SyncError::Logging(error.to_string()))
}
