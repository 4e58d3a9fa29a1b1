//! Logger setup for the command-line binary

use log::LevelFilter;
use std::env;

/// Initialise `env_logger`
///
/// Logs at `Info` (or `Debug` when `verbose`), without timestamps or module
/// paths. An explicit `RUST_LOG` overrides the level. Calling this twice is a
/// no-op.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("Logger initialised at {level:?}");
    }
}
