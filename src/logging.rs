//! Logging initialization utilities.

use env_logger::Env;

/// Initialize logging from `RUST_LOG`, defaulting to `info`.
///
/// Safe to call more than once; later calls leave the first logger in place.
pub fn init() {
    let env = Env::default().default_filter_or("info");
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
