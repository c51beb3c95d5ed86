#![cfg(feature = "std")]

use log::{LevelFilter, Log, Metadata, Record};
use std::env;

/// Environment variable holding the log level filter.
pub const LOG_ENV_VAR: &str = "GAME2048_LOG";

/// Writes records to stderr so stdout stays free for boards and JSON output.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Parse a level filter, falling back to `info`.
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the logger with the level from `GAME2048_LOG`. Repeated calls are
/// ignored.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV_VAR).ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
