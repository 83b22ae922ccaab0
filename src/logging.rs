//! Tracing setup for scripts.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LOG_ENV;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `debug` argument sets level to DEBUG
/// 2. `ZSCRIPT_LOG` environment variable (if set)
/// 3. Default is WARN, so script output stays clean
///
/// Logs are written to standard error. Calling this twice is harmless.
pub fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("zscript=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("zscript=warn"))
    };

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .try_init();
}
