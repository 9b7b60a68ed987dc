//! Logger setup
//!
//! Diagnostics go through the `log` facade to stderr; results are printed to stdout.

use log::LevelFilter;

/// Initialize `env_logger`
///
/// Defaults to `Info`, or `Debug` when `verbose` is set. `RUST_LOG` overrides both.
/// Calling it twice is harmless.
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

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
