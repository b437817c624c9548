// src/logging.rs
use log::LevelFilter;

/// Install the stderr logger. `RUST_LOG` wins over the command-line level.
pub fn init(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env();
    // Already installed when called twice in one process (tests).
    let _ = builder.try_init();
}
