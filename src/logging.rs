//! File logging for CitySift
//!
//! Writes a plain-text log next to the executable so query traffic can
//! be inspected after an interactive session without disturbing the
//! terminal screen.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::SystemTime;

/// Global logger instance
static LOGGER: OnceLock<Mutex<SiftLogger>> = OnceLock::new();

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Main logger struct
pub struct SiftLogger {
    file: Option<File>,
    min_level: LogLevel,
}

impl SiftLogger {
    fn new() -> Self {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true) // Start fresh each run
            .open(Self::log_path())
            .ok();

        Self {
            file,
            min_level: LogLevel::Debug,
        }
    }

    /// Log file path (same directory as the executable)
    fn log_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("citysift.log")
    }

    fn log(&mut self, level: LogLevel, module: &str, message: &str) {
        if level < self.min_level {
            return;
        }

        let timestamp = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);

        let entry = format!(
            "[{:013}] [{:5}] [{}] {}\n",
            timestamp, level, module, message
        );

        if let Some(ref mut file) = self.file {
            let _ = file.write_all(entry.as_bytes());
            let _ = file.flush();
        }
    }
}

/// Initialize the global logger
pub fn init() {
    let _ = LOGGER.set(Mutex::new(SiftLogger::new()));
}

fn log(level: LogLevel, module: &str, message: &str) {
    if let Some(logger) = LOGGER.get() {
        if let Ok(mut l) = logger.lock() {
            l.log(level, module, message);
        }
    }
}

/// Log debug message
pub fn debug(module: &str, message: &str) {
    log(LogLevel::Debug, module, message);
}

/// Log info message
pub fn info(module: &str, message: &str) {
    log(LogLevel::Info, module, message);
}

/// Log warning message
pub fn warn(module: &str, message: &str) {
    log(LogLevel::Warn, module, message);
}

/// Log error message
pub fn error(module: &str, message: &str) {
    log(LogLevel::Error, module, message);
}

// ============================================================================
// Specialized logging functions
// ============================================================================

/// Log a query leaving the pipeline. `source` is "settled" for
/// trailing-edge emissions and "commit" for explicit searches.
pub fn log_query_emission(source: &str, query: &str) {
    let msg = format!("query [{}]: '{}'", source, query);
    info("QUERY", &msg);
}

/// Log the outcome of applying a query to the list model
pub fn log_filter_result(query: &str, shown: usize, total: usize) {
    let msg = format!("query '{}' matched {} of {}", query, shown, total);
    info("FILTER", &msg);
}

/// Flush the log file
pub fn flush() {
    if let Some(logger) = LOGGER.get() {
        if let Ok(mut l) = logger.lock() {
            if let Some(ref mut file) = l.file {
                let _ = file.flush();
            }
        }
    }
}
