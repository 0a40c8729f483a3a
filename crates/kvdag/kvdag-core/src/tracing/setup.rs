//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the tracing/logging system.
///
/// Reads the `KVDAG_LOG` environment variable for per-module log levels.
/// Format: `KVDAG_LOG=kvdag_graph=debug,kvdag_core=warn`
///
/// Falls back to `kvdag=info` if `KVDAG_LOG` is not set or is invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    install(filter);
}

/// Initialize tracing with an explicit filter directive, usually
/// `KvdagConfig::observability.effective_log_filter()`.
///
/// An unparsable directive falls back to `kvdag=info`.
pub fn init_tracing_with_filter(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    install(filter);
}

fn install(filter: EnvFilter) {
    INIT.call_once(|| {
        // A subscriber installed by the host application wins.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
