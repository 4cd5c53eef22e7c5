//! Rolling Logger
//!
//! `log` backend that writes to the browser console (stderr off-wasm) and
//! keeps the most recent records in a fixed-size circular buffer, so they can
//! be inspected or attached to a bug report after the fact.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Records kept when no capacity is given
pub const DEFAULT_CAPACITY: usize = 500;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// One buffered record
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    /// Single-line rendering used for console output
    pub fn format(&self) -> String {
        format!(
            "{} {:<5} {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.message
        )
    }
}

pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    buffer: Mutex<VecDeque<LogEntry>>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            buffer: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Buffered records, oldest first
    pub fn entries(&self) -> Vec<LogEntry> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Buffered records as text, one line per record
    pub fn dump(&self) -> String {
        self.entries()
            .iter()
            .map(LogEntry::format)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn clear(&self) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.clear();
        }
    }

    fn push(&self, entry: LogEntry) {
        if let Ok(mut buffer) = self.buffer.lock() {
            if buffer.len() == self.capacity {
                buffer.pop_front();
            }
            buffer.push_back(entry);
        }
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        write_console(&entry);
        self.push(entry);
    }

    fn flush(&self) {}
}

/// Install the global logger. Calling it twice returns an error from `log`.
pub fn init(level: LevelFilter, capacity: usize) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

/// Text dump of the global buffer, empty before `init`
pub fn recent_log_text() -> String {
    LOGGER.get().map(RollingLogger::dump).unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn write_console(entry: &LogEntry) {
    use web_sys::console;

    let line = wasm_bindgen::JsValue::from_str(&entry.format());
    match entry.level {
        Level::Error => console::error_1(&line),
        Level::Warn => console::warn_1(&line),
        Level::Info => console::info_1(&line),
        Level::Debug | Level::Trace => console::debug_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(entry: &LogEntry) {
    eprintln!("{}", entry.format());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(logger: &RollingLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", message))
                .level(level)
                .target("test")
                .build(),
        );
    }

    #[test]
    fn test_buffer_rolls_over() {
        let logger = RollingLogger::new(LevelFilter::Trace, 3);
        for i in 0..5 {
            emit(&logger, Level::Info, &format!("message {}", i));
        }
        let messages: Vec<String> = logger.entries().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["message 2", "message 3", "message 4"]);
    }

    #[test]
    fn test_level_filter() {
        let logger = RollingLogger::new(LevelFilter::Warn, 10);
        emit(&logger, Level::Info, "skipped");
        emit(&logger, Level::Error, "kept");
        let entries = logger.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, Level::Error);
        assert_eq!(entries[0].target, "test");
    }

    #[test]
    fn test_zero_capacity_keeps_latest() {
        let logger = RollingLogger::new(LevelFilter::Info, 0);
        emit(&logger, Level::Info, "first");
        emit(&logger, Level::Info, "second");
        assert_eq!(logger.entries().len(), 1);
        assert_eq!(logger.entries()[0].message, "second");
    }

    #[test]
    fn test_clear() {
        let logger = RollingLogger::new(LevelFilter::Info, 4);
        emit(&logger, Level::Info, "a");
        logger.clear();
        assert!(logger.entries().is_empty());
    }

    #[test]
    fn test_dump_lists_records_oldest_first() {
        let logger = RollingLogger::new(LevelFilter::Info, 2);
        assert_eq!(logger.dump(), "");
        emit(&logger, Level::Info, "one");
        emit(&logger, Level::Warn, "two");
        emit(&logger, Level::Error, "three");
        let dump = logger.dump();
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("two"));
        assert!(lines[1].contains("ERROR"));
        assert!(lines[1].ends_with("three"));
    }

    #[test]
    fn test_format_contains_level_and_message() {
        let logger = RollingLogger::new(LevelFilter::Info, 4);
        emit(&logger, Level::Warn, "[Gallery] slow");
        let line = logger.entries()[0].format();
        assert!(line.contains("WARN"));
        assert!(line.ends_with("[Gallery] slow"));
    }
}
