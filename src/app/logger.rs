//! JSON-lines file logger behind the `log` facade
//!
//! The terminal belongs to the popup, so logs only go to a file.

use log::{LevelFilter, Log, Metadata, Record};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{NavError, Result};

/// One log line
#[derive(Debug, Serialize)]
pub struct LogEvent<'a> {
    pub ts_ms: u64,
    pub level: &'a str,
    pub target: &'a str,
    pub message: String,
}

fn current_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

pub struct JsonFileLogger {
    level: LevelFilter,
    writer: Mutex<BufWriter<File>>,
}

impl JsonFileLogger {
    /// Open (append) the log file
    pub fn open(path: &Path, level: LevelFilter) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            level,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    /// Install as the global logger
    pub fn install(self) -> Result<()> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))
            .map_err(|e| NavError::internal(format!("logger already installed: {}", e)))?;
        log::set_max_level(level);
        Ok(())
    }

    fn write_event(&self, event: &LogEvent<'_>) -> Result<()> {
        let line = serde_json::to_string(event)?;
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| NavError::internal("log writer poisoned"))?;
        writeln!(writer, "{}", line)?;
        Ok(())
    }
}

impl Log for JsonFileLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let event = LogEvent {
            ts_ms: current_ms(),
            level: record.level().as_str(),
            target: record.target(),
            message: record.args().to_string(),
        };
        // Nowhere left to report a failing log sink
        let _ = self.write_event(&event);
    }

    fn flush(&self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

/// Install the file logger when a log file is configured
pub fn init(path: Option<&Path>, level: LevelFilter) -> Result<()> {
    match path {
        Some(path) if level != LevelFilter::Off => JsonFileLogger::open(path, level)?.install(),
        _ => Ok(()),
    }
}
