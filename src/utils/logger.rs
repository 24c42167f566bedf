//! Logger utility for application-wide logging
//!
//! This module provides a custom logger implementation that works alongside
//! the standard log crate, but adds file output capabilities.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Metadata, LevelFilter};

use crate::nitf::types::FieldWarning;

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Most verbose level this logger emits
    level: LevelFilter,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str) -> io::Result<Self> {
        Self::with_level(log_file, LevelFilter::Debug)
    }

    /// Creates a logger that emits records up to `level`
    pub fn with_level(log_file: &str, level: LevelFilter) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            level,
        })
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = match self.file.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Logs the warnings collected while parsing a file
    ///
    /// # Arguments
    ///
    /// * `warnings` - Warnings in the order they were found
    pub fn log_warnings(&self, warnings: &[FieldWarning]) -> io::Result<()> {
        if warnings.is_empty() {
            return self.log("No warnings");
        }

        self.log(&format!("{} warnings:", warnings.len()))?;
        for warning in warnings {
            self.log(&format!("  {}", warning))?;
        }

        Ok(())
    }

    /// Static method to initialize the global logger
    pub fn init_global_logger(log_file: &str, level: LevelFilter) -> io::Result<()> {
        // Create a dedicated logger for the log crate
        let global_logger = Logger::with_level(log_file, level)?;

        // We only call this once at startup
        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level);
        Ok(())
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = Logger::log(self, &message);

            // Also print to console
            println!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}
