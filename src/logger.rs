//! Custom logging module.
//!
//! This module provides a logger implementation that captures log entries into
//! a shared buffer so they can be shown in the log panel. Writing to stderr is
//! not an option while the terminal is in raw mode on the alternate screen.

use crate::error::{AppError, AppResult};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Maximum number of entries kept before the oldest are dropped.
///
const MAX_ENTRIES: usize = 1000;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Bounded buffer of formatted log lines, shared between the logger and the UI.
///
#[derive(Clone, Default)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<String>>>,
    pushed: Arc<AtomicU64>,
}

impl LogBuffer {
    pub fn new() -> Self {
        LogBuffer::default()
    }

    pub fn push(&self, entry: String) {
        // A poisoned lock only loses log lines
        if let Ok(mut entries) = self.entries.lock() {
            entries.push_back(entry);
            while entries.len() > MAX_ENTRIES {
                entries.pop_front();
            }
            self.pushed.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Total number of entries ever pushed, including dropped ones.
    ///
    pub fn pushed(&self) -> u64 {
        self.pushed.load(Ordering::Relaxed)
    }

    /// Copy out the current entries, oldest first.
    ///
    pub fn snapshot(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|entries| entries.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Logger that captures records into a `LogBuffer`
///
pub struct CustomLogger {
    level: LevelFilter,
    buffer: LogBuffer,
}

impl CustomLogger {
    pub fn new(level: LevelFilter, buffer: LogBuffer) -> Self {
        CustomLogger { level, buffer }
    }

    /// Install this logger as the global `log` backend.
    ///
    pub fn install(self) -> AppResult<()> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self)).map_err(|e| AppError::Logger(e.to_string()))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.buffer.push(format_log(record));
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_at(level: Level, logger: &CustomLogger) {
        logger.log(
            &Record::builder()
                .level(level)
                .args(format_args!("message at {}", level))
                .build(),
        );
    }

    #[test]
    fn format_log_includes_level_and_message() {
        let line = format_log(
            &Record::builder()
                .level(Level::Warn)
                .args(format_args!("disk full"))
                .build(),
        );
        assert!(line.contains("WARN disk full"));
    }

    #[test]
    fn logger_filters_by_level() {
        let buffer = LogBuffer::new();
        let logger = CustomLogger::new(LevelFilter::Info, buffer.clone());
        record_at(Level::Debug, &logger);
        record_at(Level::Info, &logger);
        record_at(Level::Error, &logger);

        let entries = buffer.snapshot();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].contains("INFO"));
        assert!(entries[1].contains("ERROR"));
    }

    #[test]
    fn installed_logger_receives_macro_records() {
        let buffer = LogBuffer::new();
        CustomLogger::new(LevelFilter::Info, buffer.clone())
            .install()
            .unwrap();
        log::info!("saved 3 items");
        log::debug!("hidden");

        let entries = buffer.snapshot();
        assert!(entries.iter().any(|e| e.ends_with("INFO saved 3 items")));
        assert!(!entries.iter().any(|e| e.contains("hidden")));
    }

    #[test]
    fn buffer_drops_oldest_entries() {
        let buffer = LogBuffer::new();
        for i in 0..(MAX_ENTRIES + 5) {
            buffer.push(format!("entry {}", i));
        }
        let entries = buffer.snapshot();
        assert_eq!(entries.len(), MAX_ENTRIES);
        assert_eq!(entries[0], "entry 5");
        assert_eq!(buffer.pushed(), (MAX_ENTRIES + 5) as u64);
        assert!(!buffer.is_empty());
    }
}
