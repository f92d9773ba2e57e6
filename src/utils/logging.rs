// Logging utilities
// Author: Gabriel Demetrios Lafis

use std::io::Write;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use super::LoggingConfig;

/// Install a stderr logger at `level`, with colored level labels
pub fn init_logging(level: LevelFilter) -> Result<(), SetLoggerError> {
    install(StderrLogger { level, color: true })
}

/// Install a stderr logger as described by the logging configuration
pub fn init_logging_with(config: &LoggingConfig) -> Result<(), SetLoggerError> {
    install(StderrLogger {
        level: config.level_filter(),
        color: config.color,
    })
}

fn install(logger: StderrLogger) -> Result<(), SetLoggerError> {
    let level = logger.level;
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level);
    Ok(())
}

/// Writes `timestamp LEVEL target: message` lines to stderr
struct StderrLogger {
    level: LevelFilter,
    color: bool,
}

impl StderrLogger {
    fn label(&self, level: Level) -> String {
        if !self.color {
            return format!("{:<5}", level);
        }

        let ansi = match level {
            Level::Error => 31,
            Level::Warn => 33,
            Level::Info => 32,
            Level::Debug => 34,
            Level::Trace => 90,
        };
        format!("\x1B[{}m{:<5}\x1B[0m", ansi, level)
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        // A failed write to stderr has nowhere better to go
        let _ = writeln!(
            std::io::stderr().lock(),
            "{} {} {}: {}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
            self.label(record.level()),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
