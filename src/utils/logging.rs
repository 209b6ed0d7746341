//! Logger initialisation.
//!
//! Everything in the crate logs through the `log` facade; hosts that want the
//! output on stderr call [`init`] once at startup.

use env_logger::{Builder, Env};

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Installs `env_logger` as the global logger.
///
/// Safe to call more than once: later calls are ignored, which keeps test
/// binaries that share a process from panicking.
pub fn init() {
    let env = Env::default().default_filter_or(DEFAULT_FILTER);
    if Builder::from_env(env).format_timestamp_millis().try_init().is_ok() {
        log::info!("Starting Baby D-day");
    }
}
