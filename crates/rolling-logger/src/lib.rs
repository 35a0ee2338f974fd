//! Rolling Logger
//!
//! `log` backend for browser frontends. Every record is written to the
//! devtools console and kept in a fixed-size circular buffer, so the most
//! recent diagnostics can be pulled out after the fact.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Number of records kept when no explicit capacity is given
pub const DEFAULT_CAPACITY: usize = 200;

/// One captured log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub timestamp: String,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogLine {
    pub fn render(&self) -> String {
        format!("{} {:<5} {}: {}", self.timestamp, self.level, self.target, self.message)
    }
}

/// Fixed-capacity buffer that drops the oldest line when full
#[derive(Debug)]
pub struct RollingBuffer {
    lines: VecDeque<LogLine>,
    capacity: usize,
}

impl RollingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: LogLine) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn lines(&self) -> Vec<LogLine> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub struct RollingLogger {
    level: LevelFilter,
    buffer: Mutex<RollingBuffer>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            buffer: Mutex::new(RollingBuffer::new(capacity)),
        }
    }

    /// Copy of the buffered lines, oldest first
    pub fn snapshot(&self) -> Vec<LogLine> {
        self.buffer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .lines()
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

        let line = LogLine {
            timestamp: chrono::Utc::now().format("%H:%M:%S%.3f").to_string(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        write_console(line.level, &line.render());

        self.buffer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(line);
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Install the global logger. Fails if another logger is already set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(level, DEFAULT_CAPACITY));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Recently buffered lines of the global logger (empty before `init`)
pub fn recent_lines() -> Vec<LogLine> {
    LOGGER.get().map(RollingLogger::snapshot).unwrap_or_default()
}

/// One rendered line per record, oldest first
pub fn render_lines(lines: &[LogLine]) -> String {
    lines.iter().map(LogLine::render).collect::<Vec<_>>().join("\n")
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, text: &str) {
    use wasm_bindgen::JsValue;

    let value = JsValue::from_str(text);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, text: &str) {
    eprintln!("{}", text);
}
